//! The predicate pipeline.
//!
//! Each active constraint is checked independently and a movie is kept only if
//! it passes all of them. Catalogue order is preserved. Text constraints are
//! case-insensitive substring matches; an empty value is no constraint.
//!
//! Release dates are the one thing that can fail to evaluate. When any date
//! bound is set, a movie whose release date does not parse is dropped and the
//! failure is logged.

use crate::dates::{parse_release_date, DateRange};
use crate::filters::FilterState;
use crate::model::Movie;

pub fn filter_movies(movies: &[Movie], filters: &FilterState) -> Vec<Movie> {
    let query = Query::from_state(filters);
    movies
        .iter()
        .filter(|movie| query.matches(movie))
        .cloned()
        .collect()
}

/// Lowercased, pre-parsed form of a [`FilterState`].
struct Query {
    title: Option<String>,
    director: Option<String>,
    production_status: Option<String>,
    genre: Option<String>,
    movie_type: Option<String>,
    year_start: Option<i32>,
    year_end: Option<i32>,
    release_dates: DateRange,
    title_index: Option<String>,
}

impl Query {
    fn from_state(filters: &FilterState) -> Self {
        Self {
            title: needle(&filters.title),
            director: needle(&filters.director),
            production_status: needle(&filters.production_status),
            genre: needle(&filters.genre),
            movie_type: needle(&filters.movie_type),
            year_start: filters.year_start(),
            year_end: filters.year_end(),
            release_dates: filters.release_dates(),
            title_index: filters.title_index().map(str::to_lowercase),
        }
    }

    fn matches(&self, movie: &Movie) -> bool {
        self.matches_title(movie)
            && contains(&movie.director, &self.director)
            && self.matches_years(movie)
            && self.matches_release_date(movie)
            && contains(&movie.production_status, &self.production_status)
            && contains(&movie.genre, &self.genre)
            && contains(&movie.movie_type, &self.movie_type)
            && self.matches_index(movie)
    }

    fn matches_title(&self, movie: &Movie) -> bool {
        match &self.title {
            Some(q) => {
                movie.title_korean.to_lowercase().contains(q)
                    || movie.title_english.to_lowercase().contains(q)
            }
            None => true,
        }
    }

    fn matches_years(&self, movie: &Movie) -> bool {
        let year = movie.production_year;
        self.year_start.map_or(true, |start| year >= start)
            && self.year_end.map_or(true, |end| year <= end)
    }

    fn matches_release_date(&self, movie: &Movie) -> bool {
        if !self.release_dates.is_active() {
            return true;
        }
        match parse_release_date(&movie.release_date) {
            Ok(date) => self.release_dates.contains(date),
            Err(e) => {
                log::warn!("Excluding movie {} from date filter: {}", movie.id, e);
                false
            }
        }
    }

    fn matches_index(&self, movie: &Movie) -> bool {
        match &self.title_index {
            Some(prefix) => {
                movie.title_korean.to_lowercase().starts_with(prefix)
                    || movie.title_english.to_lowercase().starts_with(prefix)
            }
            None => true,
        }
    }
}

fn needle(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_lowercase())
    }
}

fn contains(haystack: &str, needle: &Option<String>) -> bool {
    match needle {
        Some(n) => haystack.to_lowercase().contains(n),
        None => true,
    }
}
