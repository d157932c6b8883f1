//! # Storage Layer
//!
//! The catalogue is read through the [`DataStore`] trait so the page controller
//! never knows where movies come from.
//!
//! ## Implementations
//!
//! - [`sample::SampleStore`]: the compiled-in catalogue the binary ships with
//! - [`memory::InMemoryStore`]: any vector of movies, used by tests and embedders
//!
//! The store is read once when the controller is built; searches run against
//! that snapshot.

use crate::error::Result;
use crate::model::Movie;

pub mod memory;
pub mod sample;

/// Read-only source of movies.
pub trait DataStore {
    /// Every movie, in catalogue order.
    fn get_all(&self) -> Result<Vec<Movie>>;
}
