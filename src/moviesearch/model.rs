use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MovieSearchError;

/// One movie entry in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title_korean: String,
    pub title_english: String,
    pub production_year: i32,
    pub production_country: String,
    /// Feature, short, etc. (유형)
    #[serde(rename = "type")]
    pub movie_type: String,
    pub genre: String,
    pub production_status: String,
    /// Free text, possibly several comma separated names.
    pub director: String,
    pub production_company: String,
    /// `YYYY-MM-DD`. Not guaranteed to be a real calendar date.
    pub release_date: String,
}

impl Movie {
    pub fn new(
        id: impl Into<String>,
        title_korean: impl Into<String>,
        title_english: impl Into<String>,
        production_year: i32,
    ) -> Self {
        Self {
            id: id.into(),
            title_korean: title_korean.into(),
            title_english: title_english.into(),
            production_year,
            production_country: String::new(),
            movie_type: String::new(),
            genre: String::new(),
            production_status: String::new(),
            director: String::new(),
            production_company: String::new(),
            release_date: String::new(),
        }
    }
}

/// Ordering offered by the results table.
///
/// The selector is shown to the user but results are never reordered by it;
/// the result set always keeps catalogue order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Latest,
    Title,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Latest => "최신상영데이터순",
            SortOrder::Title => "영화명순",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Latest => write!(f, "latest"),
            SortOrder::Title => write!(f, "title"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = MovieSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latest" | "최신상영데이터순" => Ok(SortOrder::Latest),
            "title" | "영화명순" => Ok(SortOrder::Title),
            other => Err(MovieSearchError::InvalidInput(format!(
                "Unknown sort order: {}",
                other
            ))),
        }
    }
}
