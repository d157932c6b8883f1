//! Calendar date helpers for release-date filtering.
//!
//! Release dates are stored as `YYYY-MM-DD` text and may not name a real day
//! (`2023-02-30`). Parsing reports that as an error; callers decide what an
//! unparsable date means for them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MovieSearchError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_release_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| {
        MovieSearchError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}

pub fn is_valid_date(value: &str) -> bool {
    parse_release_date(value).is_ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Optional start/end bounds, both inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// An inverted range (end before start) contains nothing.
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if e < s)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            (Some(start), None) => date >= start,
            (None, Some(end)) => date <= end,
            (None, None) => true,
        }
    }
}
