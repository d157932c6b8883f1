use crate::commands::PageView;
use crate::model::Movie;

pub const DEFAULT_PAGE_SIZE: usize = 10;

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Returns `[(page-1)*size, page*size)` clipped to the data.
///
/// Pages are 1-based. Page 0 and pages past the end are empty.
pub fn page_slice(movies: &[Movie], page: usize, page_size: usize) -> &[Movie] {
    let Some(offset) = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
    else {
        return &[];
    };
    if offset >= movies.len() {
        return &[];
    }
    let end = offset.saturating_add(page_size).min(movies.len());
    &movies[offset..end]
}

pub fn run(movies: &[Movie], page: usize, page_size: usize) -> PageView {
    PageView {
        movies: page_slice(movies, page, page_size).to_vec(),
        current_page: page,
        total_pages: page_count(movies.len(), page_size),
        total_count: movies.len(),
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    fn movies(n: usize) -> Vec<Movie> {
        StoreFixture::new().with_movies(n).store.get_all().unwrap()
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn page_k_yields_its_window() {
        let all = movies(25);
        for k in 1..=3 {
            let slice = page_slice(&all, k, 10);
            let start = 10 * (k - 1);
            let end = (10 * k).min(all.len());
            assert_eq!(slice, &all[start..end], "page {k}");
        }
        assert_eq!(page_slice(&all, 3, 10).len(), 5);
    }

    #[test]
    fn pages_past_the_end_are_empty() {
        let all = movies(25);
        assert!(page_slice(&all, 4, 10).is_empty());
        assert!(page_slice(&all, 100, 10).is_empty());
        assert!(page_slice(&all, 0, 10).is_empty());
        assert!(page_slice(&[], 1, 10).is_empty());
    }

    #[test]
    fn run_reports_totals() {
        let all = movies(12);
        let view = run(&all, 2, 10);
        assert_eq!(view.movies.len(), 2);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.total_count, 12);
        assert!(view.shows_pager());
        assert!(view.has_prev());
        assert!(!view.has_next());
    }

    #[test]
    fn empty_results_hide_the_pager() {
        let view = run(&[], 1, 10);
        assert_eq!(view.total_pages, 0);
        assert!(!view.shows_pager());
        assert!(view.movies.is_empty());
    }
}
