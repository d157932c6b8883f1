//! # API Facade
//!
//! [`MovieSearchApi`] is the page controller: the one place that owns search
//! state. Every UI client drives it through named transitions and reads back a
//! [`PageView`]:
//!
//! | Transition | Effect |
//! |------------|--------|
//! | [`edit_field`](MovieSearchApi::edit_field) | updates one filter field, results untouched |
//! | [`search`](MovieSearchApi::search) | runs the predicate pipeline once, page := 1 |
//! | [`reset`](MovieSearchApi::reset) | default filters, whole catalogue, page := 1 |
//! | [`change_page`](MovieSearchApi::change_page) | moves the page window |
//! | [`set_sort_order`](MovieSearchApi::set_sort_order) | records the selector value only |
//! | [`toggle_more_filters`](MovieSearchApi::toggle_more_filters) | presentational only |
//!
//! Logic lives in `commands/*.rs`; this layer only sequences it. Like the rest
//! of the library it never prints.

use crate::commands;
use crate::config::MovieSearchConfig;
use crate::error::Result;
use crate::filters::{FilterEdit, FilterState};
use crate::model::{Movie, SortOrder};
use crate::store::DataStore;
use std::path::Path;

pub struct MovieSearchApi<S: DataStore> {
    store: S,
    all_movies: Vec<Movie>,
    filters: FilterState,
    results: Vec<Movie>,
    current_page: usize,
    page_size: usize,
    sort_order: SortOrder,
    more_filters: bool,
}

impl<S: DataStore> MovieSearchApi<S> {
    /// Reads the catalogue once; the initial result set is all of it.
    pub fn new(store: S, config: &MovieSearchConfig) -> Result<Self> {
        let all_movies = store.get_all()?;
        log::debug!("loaded {} movies", all_movies.len());
        Ok(Self {
            store,
            results: all_movies.clone(),
            all_movies,
            filters: FilterState::default(),
            current_page: 1,
            page_size: config.page_size.max(1),
            sort_order: SortOrder::default(),
            more_filters: config.more_filters,
        })
    }

    pub fn edit_field(&mut self, edit: FilterEdit) -> CmdResult {
        commands::edit::run(&mut self.filters, edit)
    }

    /// Parses a raw `(field, value)` pair from a form and applies it.
    pub fn edit_named_field(&mut self, field: &str, value: &str) -> Result<CmdResult> {
        let edit = FilterEdit::from_field(field, value)?;
        Ok(self.edit_field(edit))
    }

    pub fn search(&mut self) -> CmdResult {
        self.results = commands::search::filter_movies(&self.all_movies, &self.filters);
        self.current_page = 1;
        log::debug!(
            "search matched {} of {} movies",
            self.results.len(),
            self.all_movies.len()
        );
        CmdResult::default().with_page(self.page_view())
    }

    pub fn reset(&mut self) -> CmdResult {
        let (filters, results) = commands::reset::run(&self.all_movies);
        self.filters = filters;
        self.results = results;
        self.current_page = 1;
        let mut result = CmdResult::default().with_page(self.page_view());
        result.add_message(CmdMessage::info("Filters cleared"));
        result
    }

    pub fn change_page(&mut self, page: usize) -> CmdResult {
        self.current_page = page;
        let view = self.page_view();
        let mut result = CmdResult::default();
        if view.movies.is_empty() && view.total_count > 0 {
            result.add_message(CmdMessage::warning(format!(
                "Page {} is past the last page ({})",
                page, view.total_pages
            )));
        }
        result.with_page(view)
    }

    pub fn next_page(&mut self) -> CmdResult {
        self.change_page(self.current_page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> CmdResult {
        self.change_page(self.current_page.saturating_sub(1).max(1))
    }

    /// Stores the selector value. Results keep catalogue order regardless.
    pub fn set_sort_order(&mut self, order: SortOrder) -> CmdResult {
        self.sort_order = order;
        CmdResult::default().with_page(self.page_view())
    }

    pub fn toggle_more_filters(&mut self) -> bool {
        self.more_filters = !self.more_filters;
        self.more_filters
    }

    pub fn page_view(&self) -> PageView {
        commands::paginate::run(&self.results, self.current_page, self.page_size)
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn results(&self) -> &[Movie] {
        &self.results
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn more_filters(&self) -> bool {
        self.more_filters
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self, config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, PageView};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::ClassificationFlag;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::sample::SampleStore;

    fn sample_api() -> MovieSearchApi<SampleStore> {
        MovieSearchApi::new(SampleStore, &MovieSearchConfig::default()).unwrap()
    }

    fn fixture_api(count: usize) -> MovieSearchApi<crate::store::memory::InMemoryStore> {
        let store = StoreFixture::new().with_movies(count).store;
        MovieSearchApi::new(store, &MovieSearchConfig::default()).unwrap()
    }

    #[test]
    fn starts_with_whole_catalogue_on_page_one() {
        let api = sample_api();
        let view = api.page_view();
        assert_eq!(view.total_count, 10);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.total_pages, 1);
        assert_eq!(api.filters(), &FilterState::default());
    }

    #[test]
    fn editing_does_not_filter_until_search() {
        let mut api = sample_api();
        api.edit_field(FilterEdit::Title("아바타".into()));
        assert_eq!(api.page_view().total_count, 10);

        let result = api.search();
        let view = result.page.unwrap();
        assert_eq!(view.total_count, 1);
        assert_eq!(view.movies[0].title_english, "Avatar: The Way of Water");
    }

    #[test]
    fn search_resets_page_to_one() {
        let mut api = fixture_api(35);
        api.change_page(3);
        assert_eq!(api.current_page(), 3);

        api.edit_named_field("productionYearStart", "2020").unwrap();
        api.search();
        assert_eq!(api.current_page(), 1);
    }

    #[test]
    fn reset_restores_everything_without_searching() {
        let mut api = fixture_api(25);
        api.edit_field(FilterEdit::ProductionYearStart("2024".into()));
        api.search();
        api.change_page(2);
        assert!(api.page_view().total_count < 25);

        let result = api.reset();
        let view = result.page.unwrap();
        assert_eq!(view.total_count, 25);
        assert_eq!(view.current_page, 1);
        assert_eq!(api.filters(), &FilterState::default());
    }

    #[test]
    fn reset_matches_searching_with_empty_filters() {
        let mut api = sample_api();
        api.edit_field(FilterEdit::Genre("드라마".into()));
        api.search();
        let reset_view = api.reset().page.unwrap();
        let search_view = api.search().page.unwrap();
        assert_eq!(reset_view, search_view);
    }

    #[test]
    fn paging_past_the_end_is_empty_with_a_warning() {
        let mut api = fixture_api(25);
        let result = api.change_page(3);
        assert_eq!(result.page.as_ref().unwrap().movies.len(), 5);
        assert!(result.messages.is_empty());

        let result = api.change_page(4);
        assert!(result.page.unwrap().movies.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn next_and_prev_move_one_page() {
        let mut api = fixture_api(25);
        api.next_page();
        api.next_page();
        assert_eq!(api.current_page(), 3);
        api.prev_page();
        assert_eq!(api.current_page(), 2);
        api.prev_page();
        api.prev_page();
        assert_eq!(api.current_page(), 1);
    }

    #[test]
    fn sort_selector_and_inert_fields_leave_results_alone() {
        let mut api = sample_api();
        let before = api.search().page.unwrap();

        api.set_sort_order(SortOrder::Title);
        api.edit_field(FilterEdit::Classification(
            ClassificationFlag::Independent,
            true,
        ));
        api.edit_field(FilterEdit::Rating("전체관람가".into()));
        api.edit_field(FilterEdit::ScreeningType("3D".into()));
        api.edit_field(FilterEdit::Nationality("프랑스".into()));
        api.edit_field(FilterEdit::RepresentativeNationality("독일".into()));
        let after = api.search().page.unwrap();

        assert_eq!(before, after);
        assert_eq!(api.sort_order(), SortOrder::Title);
    }

    #[test]
    fn toggling_independent_flag_yields_identical_results() {
        let mut api = sample_api();
        api.edit_named_field("classification.independent", "true")
            .unwrap();
        let on = api.search().page.unwrap();
        api.edit_named_field("classification.independent", "false")
            .unwrap();
        let off = api.search().page.unwrap();
        assert_eq!(on, off);
    }

    #[test]
    fn more_filters_toggle_is_presentational() {
        let mut api = sample_api();
        assert!(!api.more_filters());
        assert!(api.toggle_more_filters());
        assert_eq!(api.filters(), &FilterState::default());
        api.reset();
        assert!(api.more_filters());
    }

    #[test]
    fn unknown_field_names_are_rejected() {
        let mut api = sample_api();
        assert!(api.edit_named_field("boxOffice", "1").is_err());
    }

    #[test]
    fn production_year_scenario() {
        let mut api = sample_api();
        api.edit_named_field("productionYearStart", "2023").unwrap();
        api.edit_named_field("productionYearEnd", "2023").unwrap();
        let view = api.search().page.unwrap();
        let titles: Vec<_> = view.movies.iter().map(|m| m.title_korean.as_str()).collect();
        assert_eq!(titles, vec!["범죄도시3", "웡카"]);
    }

    #[test]
    fn respects_configured_page_size() {
        let config = MovieSearchConfig {
            page_size: 4,
            ..Default::default()
        };
        let api = MovieSearchApi::new(SampleStore, &config).unwrap();
        let view = api.page_view();
        assert_eq!(view.movies.len(), 4);
        assert_eq!(view.total_pages, 3);
    }
}
