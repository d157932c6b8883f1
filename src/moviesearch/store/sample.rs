use super::DataStore;
use crate::error::Result;
use crate::model::Movie;

/// The catalogue compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleStore;

impl DataStore for SampleStore {
    fn get_all(&self) -> Result<Vec<Movie>> {
        Ok(sample_movies())
    }
}

// id, korean, english, year, country, type, genre, status, director, company, release
type Row = (
    &'static str,
    &'static str,
    &'static str,
    i32,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const SAMPLE_ROWS: &[Row] = &[
    (
        "20224492",
        "내가 잠들 때까지",
        "When I Sleep",
        2022,
        "한국",
        "장편",
        "드라마",
        "개봉예정",
        "최지훈",
        "(주)시네마달",
        "2025-07-01",
    ),
    (
        "20255168",
        "극장판 여성향 게임의 파멸 플래그밖에 없는 악역 영애로 환생해버렸다…",
        "BanG Dream! It's MyGO!!!!!",
        2024,
        "일본",
        "장편",
        "애니메이션",
        "개봉예정",
        "카키모토 코다이",
        "",
        "2025-06-15",
    ),
    (
        "20253956",
        "나를 모르는 그의 세계에서",
        "My Beloved Stranger",
        2025,
        "일본",
        "장편",
        "멜로/로맨스",
        "개봉",
        "미키 타카히로",
        "",
        "2025-05-20",
    ),
    (
        "20223444",
        "미스치프 시흥",
        "MISFITS [SIHEUNG]",
        2021,
        "한국",
        "단편",
        "드라마",
        "기타",
        "김아무개",
        "독립영화사",
        "2021-10-10",
    ),
    (
        "20244606",
        "새로 온 공기",
        "All that saves us",
        2024,
        "한국",
        "장편",
        "다큐멘터리",
        "개봉준비",
        "남보라, 문혜성, 김보람",
        "영화사보통",
        "2024-12-01",
    ),
    (
        "20254931",
        "인피니트 13주년 콘서트 무비 인피니트 ＜컴백 어게인＞",
        "",
        2025,
        "한국",
        "장편",
        "공연",
        "개봉예정",
        "손석",
        "주식회사 케이엔",
        "2025-08-01",
    ),
    (
        "20240001",
        "파묘",
        "Exhuma",
        2024,
        "한국",
        "장편",
        "미스터리, 공포",
        "개봉",
        "장재현",
        "(주)쇼박스",
        "2024-02-22",
    ),
    (
        "20230002",
        "범죄도시3",
        "The Roundup: No Way Out",
        2023,
        "한국",
        "장편",
        "액션, 범죄",
        "개봉",
        "이상용",
        "에이비오엔터테인먼트",
        "2023-05-31",
    ),
    (
        "20230003",
        "웡카",
        "Wonka",
        2023,
        "미국",
        "장편",
        "판타지, 드라마, 뮤지컬",
        "개봉",
        "폴 킹",
        "워너브라더스 코리아(주)",
        "2024-01-31",
    ),
    (
        "20220004",
        "아바타: 물의 길",
        "Avatar: The Way of Water",
        2022,
        "미국",
        "장편",
        "SF, 액션, 어드벤처",
        "개봉",
        "제임스 카메론",
        "월트디즈니컴퍼니코리아 유한책임회사",
        "2022-12-14",
    ),
];

pub fn sample_movies() -> Vec<Movie> {
    SAMPLE_ROWS
        .iter()
        .map(
            |&(id, korean, english, year, country, kind, genre, status, director, company, release)| {
                Movie {
                    id: id.to_string(),
                    title_korean: korean.to_string(),
                    title_english: english.to_string(),
                    production_year: year,
                    production_country: country.to_string(),
                    movie_type: kind.to_string(),
                    genre: genre.to_string(),
                    production_status: status.to_string(),
                    director: director.to_string(),
                    production_company: company.to_string(),
                    release_date: release.to_string(),
                }
            },
        )
        .collect()
}
