use crate::filters::FilterState;
use crate::model::Movie;

/// Fresh filter state plus the whole catalogue as the visible result set.
///
/// This is a separate path from searching: the predicate pipeline is not run.
pub fn run(all_movies: &[Movie]) -> (FilterState, Vec<Movie>) {
    (FilterState::default(), all_movies.to_vec())
}
