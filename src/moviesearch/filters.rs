//! # Filter State
//!
//! [`FilterState`] is everything the search form holds. It is plain data: edits
//! arrive one field at a time as a [`FilterEdit`] (see `commands::edit`) and
//! nothing in here filters anything.
//!
//! Some fields are collected by the form but never consulted when searching:
//! the classification flags, `rating`, `screening_type`, `nationality` and
//! `representative_nationality`. They are kept in the state so that the form
//! can round-trip them and so tests can pin down that they have no effect.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dates::{parse_release_date, DateRange};
use crate::error::{MovieSearchError, Result};

/// Value of the year and title-index selects that means "no constraint".
pub const ALL: &str = "전체";

/// True for values that place no constraint on a select field.
pub fn is_all(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == ALL || value.eq_ignore_ascii_case("all")
}

/// Safe year parse: anything that is not a plain integer is unbounded.
pub fn parse_year_bound(value: &str) -> Option<i32> {
    if is_all(value) {
        return None;
    }
    value.trim().parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationFlag {
    General,
    Art,
    Independent,
}

impl ClassificationFlag {
    pub fn all() -> &'static [ClassificationFlag] {
        &[
            ClassificationFlag::General,
            ClassificationFlag::Art,
            ClassificationFlag::Independent,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClassificationFlag::General => "일반영화",
            ClassificationFlag::Art => "예술영화",
            ClassificationFlag::Independent => "독립영화",
        }
    }
}

impl fmt::Display for ClassificationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassificationFlag::General => write!(f, "general"),
            ClassificationFlag::Art => write!(f, "art"),
            ClassificationFlag::Independent => write!(f, "independent"),
        }
    }
}

impl FromStr for ClassificationFlag {
    type Err = MovieSearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "general" | "일반영화" => Ok(ClassificationFlag::General),
            "art" | "예술영화" => Ok(ClassificationFlag::Art),
            "independent" | "독립영화" => Ok(ClassificationFlag::Independent),
            other => Err(MovieSearchError::UnknownField(format!(
                "classification.{}",
                other
            ))),
        }
    }
}

/// The classification checkbox group. Not used by the predicate pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationFlags {
    pub general: bool,
    pub art: bool,
    pub independent: bool,
}

impl ClassificationFlags {
    pub fn get(&self, flag: ClassificationFlag) -> bool {
        match flag {
            ClassificationFlag::General => self.general,
            ClassificationFlag::Art => self.art,
            ClassificationFlag::Independent => self.independent,
        }
    }

    /// Sets one flag, leaving its siblings as they were.
    pub fn set(&mut self, flag: ClassificationFlag, checked: bool) {
        match flag {
            ClassificationFlag::General => self.general = checked,
            ClassificationFlag::Art => self.art = checked,
            ClassificationFlag::Independent => self.independent = checked,
        }
    }

    pub fn checked(&self) -> Vec<ClassificationFlag> {
        ClassificationFlag::all()
            .iter()
            .copied()
            .filter(|flag| self.get(*flag))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub title: String,
    pub director: String,
    pub production_status: String,
    pub genre: String,
    #[serde(rename = "type")]
    pub movie_type: String,
    pub production_year_start: String,
    pub production_year_end: String,
    pub release_date_start: Option<NaiveDate>,
    pub release_date_end: Option<NaiveDate>,
    pub title_index: String,

    // Collected by the form, never applied.
    pub classification: ClassificationFlags,
    pub rating: String,
    pub screening_type: String,
    pub nationality: String,
    pub representative_nationality: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            title: String::new(),
            director: String::new(),
            production_status: String::new(),
            genre: String::new(),
            movie_type: String::new(),
            production_year_start: ALL.to_string(),
            production_year_end: ALL.to_string(),
            release_date_start: None,
            release_date_end: None,
            title_index: ALL.to_string(),
            classification: ClassificationFlags::default(),
            rating: String::new(),
            screening_type: String::new(),
            nationality: String::new(),
            representative_nationality: String::new(),
        }
    }
}

impl FilterState {
    pub fn release_dates(&self) -> DateRange {
        DateRange::new(self.release_date_start, self.release_date_end)
    }

    pub fn year_start(&self) -> Option<i32> {
        parse_year_bound(&self.production_year_start)
    }

    pub fn year_end(&self) -> Option<i32> {
        parse_year_bound(&self.production_year_end)
    }

    pub fn title_index(&self) -> Option<&str> {
        if is_all(&self.title_index) {
            None
        } else {
            Some(self.title_index.trim())
        }
    }
}

/// A single change coming from the form: one field, one new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEdit {
    Title(String),
    Director(String),
    ProductionStatus(String),
    Genre(String),
    MovieType(String),
    ProductionYearStart(String),
    ProductionYearEnd(String),
    ReleaseDateStart(Option<NaiveDate>),
    ReleaseDateEnd(Option<NaiveDate>),
    TitleIndex(String),
    Classification(ClassificationFlag, bool),
    Rating(String),
    ScreeningType(String),
    Nationality(String),
    RepresentativeNationality(String),
}

/// Field names accepted by [`FilterEdit::from_field`], in form order.
pub const FIELD_NAMES: &[&str] = &[
    "title",
    "productionYearStart",
    "productionYearEnd",
    "director",
    "releaseDateStart",
    "releaseDateEnd",
    "productionStatus",
    "genre",
    "type",
    "titleIndex",
    "rating",
    "screeningType",
    "nationality",
    "representativeNationality",
    "classification.general",
    "classification.art",
    "classification.independent",
];

impl FilterEdit {
    /// Builds an edit from a form field name and its raw value.
    ///
    /// Values are taken as-is; only dates and checkbox values need to parse.
    /// An empty date clears that bound.
    pub fn from_field(name: &str, value: &str) -> Result<Self> {
        let text = value.to_string();
        let edit = match name {
            "title" => FilterEdit::Title(text),
            "director" => FilterEdit::Director(text),
            "productionStatus" => FilterEdit::ProductionStatus(text),
            "genre" => FilterEdit::Genre(text),
            "type" => FilterEdit::MovieType(text),
            "productionYearStart" => FilterEdit::ProductionYearStart(text),
            "productionYearEnd" => FilterEdit::ProductionYearEnd(text),
            "releaseDateStart" => FilterEdit::ReleaseDateStart(parse_optional_date(value)?),
            "releaseDateEnd" => FilterEdit::ReleaseDateEnd(parse_optional_date(value)?),
            "titleIndex" => FilterEdit::TitleIndex(text),
            "rating" => FilterEdit::Rating(text),
            "screeningType" => FilterEdit::ScreeningType(text),
            "nationality" => FilterEdit::Nationality(text),
            "representativeNationality" => FilterEdit::RepresentativeNationality(text),
            other => match other.strip_prefix("classification.") {
                Some(flag) => FilterEdit::Classification(flag.parse()?, parse_checked(value)?),
                None => return Err(MovieSearchError::UnknownField(other.to_string())),
            },
        };
        Ok(edit)
    }

    pub fn field_name(&self) -> String {
        match self {
            FilterEdit::Title(_) => "title".into(),
            FilterEdit::Director(_) => "director".into(),
            FilterEdit::ProductionStatus(_) => "productionStatus".into(),
            FilterEdit::Genre(_) => "genre".into(),
            FilterEdit::MovieType(_) => "type".into(),
            FilterEdit::ProductionYearStart(_) => "productionYearStart".into(),
            FilterEdit::ProductionYearEnd(_) => "productionYearEnd".into(),
            FilterEdit::ReleaseDateStart(_) => "releaseDateStart".into(),
            FilterEdit::ReleaseDateEnd(_) => "releaseDateEnd".into(),
            FilterEdit::TitleIndex(_) => "titleIndex".into(),
            FilterEdit::Classification(flag, _) => format!("classification.{}", flag),
            FilterEdit::Rating(_) => "rating".into(),
            FilterEdit::ScreeningType(_) => "screeningType".into(),
            FilterEdit::Nationality(_) => "nationality".into(),
            FilterEdit::RepresentativeNationality(_) => "representativeNationality".into(),
        }
    }

    /// True for fields the search never looks at.
    pub fn is_inert(&self) -> bool {
        matches!(
            self,
            FilterEdit::Classification(..)
                | FilterEdit::Rating(_)
                | FilterEdit::ScreeningType(_)
                | FilterEdit::Nationality(_)
                | FilterEdit::RepresentativeNationality(_)
        )
    }
}

fn parse_optional_date(value: &str) -> Result<Option<NaiveDate>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_release_date(value).map(Some)
}

fn parse_checked(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" | "" => Ok(false),
        other => Err(MovieSearchError::InvalidInput(format!(
            "Expected true/false, got: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_place_no_constraints() {
        let state = FilterState::default();
        assert_eq!(state.production_year_start, ALL);
        assert_eq!(state.year_start(), None);
        assert_eq!(state.year_end(), None);
        assert_eq!(state.title_index(), None);
        assert!(!state.release_dates().is_active());
    }

    #[test]
    fn year_bounds_parse_safely() {
        assert_eq!(parse_year_bound("2023"), Some(2023));
        assert_eq!(parse_year_bound(" 2021 "), Some(2021));
        assert_eq!(parse_year_bound("전체"), None);
        assert_eq!(parse_year_bound("all"), None);
        assert_eq!(parse_year_bound("twenty"), None);
        assert_eq!(parse_year_bound(""), None);
    }

    #[test]
    fn from_field_maps_form_names() {
        assert_eq!(
            FilterEdit::from_field("title", "아바타").unwrap(),
            FilterEdit::Title("아바타".into())
        );
        assert_eq!(
            FilterEdit::from_field("type", "단편").unwrap(),
            FilterEdit::MovieType("단편".into())
        );
        assert_eq!(
            FilterEdit::from_field("productionYearEnd", "nope").unwrap(),
            FilterEdit::ProductionYearEnd("nope".into())
        );
        assert_eq!(
            FilterEdit::from_field("classification.independent", "true").unwrap(),
            FilterEdit::Classification(ClassificationFlag::Independent, true)
        );
    }

    #[test]
    fn from_field_parses_and_clears_dates() {
        let edit = FilterEdit::from_field("releaseDateStart", "2024-01-01").unwrap();
        assert_eq!(
            edit,
            FilterEdit::ReleaseDateStart(NaiveDate::from_ymd_opt(2024, 1, 1))
        );
        assert_eq!(
            FilterEdit::from_field("releaseDateEnd", "").unwrap(),
            FilterEdit::ReleaseDateEnd(None)
        );
        assert!(FilterEdit::from_field("releaseDateEnd", "2024-02-30").is_err());
    }

    #[test]
    fn from_field_rejects_unknown_names() {
        assert!(matches!(
            FilterEdit::from_field("budget", "1"),
            Err(MovieSearchError::UnknownField(_))
        ));
        assert!(FilterEdit::from_field("classification.cult", "true").is_err());
    }

    #[test]
    fn every_listed_field_name_is_accepted() {
        for name in FIELD_NAMES {
            let value = if name.starts_with("releaseDate") {
                "2024-01-01"
            } else if name.starts_with("classification.") {
                "true"
            } else {
                "x"
            };
            let edit = FilterEdit::from_field(name, value).unwrap();
            assert_eq!(edit.field_name(), *name);
        }
    }

    #[test]
    fn inert_fields_are_flagged() {
        assert!(FilterEdit::Rating("12".into()).is_inert());
        assert!(FilterEdit::Classification(ClassificationFlag::Art, true).is_inert());
        assert!(!FilterEdit::Genre("드라마".into()).is_inert());
    }
}
