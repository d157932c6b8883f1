use super::DataStore;
use crate::error::Result;
use crate::model::Movie;

/// Catalogue held in a plain vector. Order is preserved.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    movies: Vec<Movie>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    pub fn push(&mut self, movie: Movie) {
        self.movies.push(movie);
    }
}

impl DataStore for InMemoryStore {
    fn get_all(&self) -> Result<Vec<Movie>> {
        Ok(self.movies.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` movies numbered from 1, spread over 2020..=2024.
        pub fn with_movies(mut self, count: usize) -> Self {
            for i in 0..count {
                let n = self.store.movies.len() + 1;
                let year = 2020 + (i % 5) as i32;
                let mut movie = Movie::new(
                    format!("{:08}", n),
                    format!("영화 {}", n),
                    format!("Movie {}", n),
                    year,
                );
                movie.release_date = format!("{}-06-{:02}", year, (i % 28) + 1);
                self.store.push(movie);
            }
            self
        }

        pub fn with_movie(mut self, movie: Movie) -> Self {
            self.store.push(movie);
            self
        }

        pub fn with_release_date(mut self, id: &str, title: &str, release_date: &str) -> Self {
            let mut movie = Movie::new(id, title, title, 2023);
            movie.release_date = release_date.to_string();
            self.store.push(movie);
            self
        }
    }
}
