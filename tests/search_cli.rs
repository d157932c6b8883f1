use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn moviesearch(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("moviesearch").unwrap();
    cmd.env("MOVIESEARCH_HOME", home.path())
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn no_command_lists_whole_catalogue() {
    let home = tempfile::tempdir().unwrap();
    moviesearch(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("총 10 건"))
        .stdout(predicate::str::contains("영화명(영문)"))
        .stdout(predicate::str::contains("최신상영데이터순"));
}

#[test]
fn search_by_korean_title() {
    let home = tempfile::tempdir().unwrap();
    moviesearch(&home)
        .args(["search", "-t", "아바타"])
        .assert()
        .success()
        .stdout(predicate::str::contains("총 1 건"))
        .stdout(predicate::str::contains("Avatar: The Way of Water"))
        .stdout(predicate::str::contains("웡카").not());
}

#[test]
fn search_by_production_year_range() {
    let home = tempfile::tempdir().unwrap();
    moviesearch(&home)
        .args(["search", "--year-start", "2023", "--year-end", "2023"])
        .assert()
        .success()
        .stdout(predicate::str::contains("총 2 건"))
        .stdout(predicate::str::contains("범죄도시3"))
        .stdout(predicate::str::contains("웡카"));
}

#[test]
fn search_without_matches_says_so() {
    let home = tempfile::tempdir().unwrap();
    moviesearch(&home)
        .args(["search", "-t", "존재하지않는영화"])
        .assert()
        .success()
        .stdout(predicate::str::contains("총 0 건"))
        .stdout(predicate::str::contains("검색 결과가 없습니다."));
}

#[test]
fn search_json_output() {
    let home = tempfile::tempdir().unwrap();
    let output = moviesearch(&home)
        .args(["search", "-t", "아바타", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["totalCount"], 1);
    assert_eq!(value["currentPage"], 1);
    assert_eq!(value["movies"][0]["id"], "20220004");
    assert_eq!(value["movies"][0]["type"], "장편");
}

#[test]
fn inert_filter_is_reported_and_ignored() {
    let home = tempfile::tempdir().unwrap();
    moviesearch(&home)
        .args(["search", "--classification", "independent", "--rating", "15세"])
        .assert()
        .success()
        .stdout(predicate::str::contains("총 10 건"))
        .stdout(predicate::str::contains(
            "classification.independent is recorded but does not narrow results",
        ));
}

#[test]
fn inverted_release_dates_match_nothing() {
    let home = tempfile::tempdir().unwrap();
    moviesearch(&home)
        .args(["search", "--from", "2024-12-31", "--to", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("총 0 건"))
        .stdout(predicate::str::contains("Release end date is before the start date"));
}

#[test]
fn malformed_date_fails() {
    let home = tempfile::tempdir().unwrap();
    moviesearch(&home)
        .args(["search", "--from", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date 'yesterday'"));
}

#[test]
fn unknown_sort_order_fails() {
    let home = tempfile::tempdir().unwrap();
    moviesearch(&home)
        .args(["search", "--sort", "newest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sort order"));
}

#[test]
fn sort_selector_changes_label_only() {
    let home = tempfile::tempdir().unwrap();
    moviesearch(&home)
        .args(["search", "--sort", "title"])
        .assert()
        .success()
        .stdout(predicate::str::contains("영화명순"))
        .stdout(predicate::str::contains("총 10 건"));
}

#[test]
fn page_past_the_end_warns() {
    let home = tempfile::tempdir().unwrap();
    moviesearch(&home)
        .args(["list", "--page", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 5 is past the last page (1)"));
}

#[test]
fn config_page_size_drives_pager() {
    let home = tempfile::tempdir().unwrap();

    moviesearch(&home)
        .args(["config", "page-size", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 3"));

    moviesearch(&home)
        .args(["config", "page-size"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3"));

    moviesearch(&home)
        .args(["list", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("총 10 건"))
        .stdout(predicate::str::contains("‹ 1 2 3 4 ›"));
}

#[test]
fn config_rejects_zero_page_size() {
    let home = tempfile::tempdir().unwrap();
    moviesearch(&home)
        .args(["config", "page-size", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page size must be at least 1"));

    moviesearch(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size = 10"));
}

#[test]
fn shell_session_runs_lines_in_order() {
    let home = tempfile::tempdir().unwrap();
    moviesearch(&home)
        .arg("shell")
        .write_stdin("set title 아바타\nsearch\nreset\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("총 1 건"))
        .stdout(predicate::str::contains("Filters cleared"))
        .stdout(predicate::str::contains("moviesearch> "));
}

#[test]
fn shell_reports_bad_lines_and_continues() {
    let home = tempfile::tempdir().unwrap();
    moviesearch(&home)
        .arg("shell")
        .write_stdin("set boxOffice 1\nset genre 드라마\n조회\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown filter field: boxOffice"))
        .stdout(predicate::str::contains("검색 결과가 없습니다.").not());
}

#[test]
fn fields_lists_form_names() {
    let home = tempfile::tempdir().unwrap();
    moviesearch(&home)
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("productionYearStart"))
        .stdout(predicate::str::contains("classification.independent"));
}

#[test]
fn help_is_grouped() {
    let home = tempfile::tempdir().unwrap();
    moviesearch(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search Commands:"))
        .stdout(predicate::str::contains("Miscellaneous:"));
}
