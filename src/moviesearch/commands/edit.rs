use crate::commands::{CmdMessage, CmdResult};
use crate::filters::{FilterEdit, FilterState};

/// Applies one form edit to the filter state. Never filters.
pub fn run(state: &mut FilterState, edit: FilterEdit) -> CmdResult {
    let mut result = CmdResult::default();
    let field = edit.field_name();
    let touches_dates = matches!(
        edit,
        FilterEdit::ReleaseDateStart(_) | FilterEdit::ReleaseDateEnd(_)
    );

    if edit.is_inert() {
        log::debug!("{} recorded; it does not take part in searches", field);
        result.add_message(CmdMessage::info(format!(
            "{} is recorded but does not narrow results",
            field
        )));
    }

    match edit {
        FilterEdit::Title(v) => state.title = v,
        FilterEdit::Director(v) => state.director = v,
        FilterEdit::ProductionStatus(v) => state.production_status = v,
        FilterEdit::Genre(v) => state.genre = v,
        FilterEdit::MovieType(v) => state.movie_type = v,
        FilterEdit::ProductionYearStart(v) => state.production_year_start = v,
        FilterEdit::ProductionYearEnd(v) => state.production_year_end = v,
        FilterEdit::ReleaseDateStart(v) => state.release_date_start = v,
        FilterEdit::ReleaseDateEnd(v) => state.release_date_end = v,
        FilterEdit::TitleIndex(v) => state.title_index = v,
        FilterEdit::Classification(flag, checked) => state.classification.set(flag, checked),
        FilterEdit::Rating(v) => state.rating = v,
        FilterEdit::ScreeningType(v) => state.screening_type = v,
        FilterEdit::Nationality(v) => state.nationality = v,
        FilterEdit::RepresentativeNationality(v) => state.representative_nationality = v,
    }

    if touches_dates && state.release_dates().is_inverted() {
        result.add_message(CmdMessage::warning(
            "Release end date is before the start date; no release dates can match",
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::ClassificationFlag;
    use chrono::NaiveDate;

    #[test]
    fn sets_the_named_field_only() {
        let mut state = FilterState::default();
        run(&mut state, FilterEdit::Title("파묘".into()));

        let expected = FilterState {
            title: "파묘".into(),
            ..FilterState::default()
        };
        assert_eq!(state, expected);
    }

    #[test]
    fn classification_edits_keep_sibling_flags() {
        let mut state = FilterState::default();
        run(
            &mut state,
            FilterEdit::Classification(ClassificationFlag::Art, true),
        );
        run(
            &mut state,
            FilterEdit::Classification(ClassificationFlag::Independent, true),
        );
        run(
            &mut state,
            FilterEdit::Classification(ClassificationFlag::Art, false),
        );

        assert!(!state.classification.art);
        assert!(state.classification.independent);
        assert!(!state.classification.general);
    }

    #[test]
    fn malformed_values_are_stored_as_is() {
        let mut state = FilterState::default();
        let result = run(&mut state, FilterEdit::ProductionYearStart("20x3".into()));
        assert_eq!(state.production_year_start, "20x3");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn inert_fields_report_that_they_do_not_filter() {
        let mut state = FilterState::default();
        let result = run(&mut state, FilterEdit::Rating("15세이상관람가".into()));
        assert_eq!(state.rating, "15세이상관람가");
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("rating"));
    }

    #[test]
    fn inverted_date_range_is_accepted_with_a_warning() {
        let mut state = FilterState::default();
        run(
            &mut state,
            FilterEdit::ReleaseDateStart(NaiveDate::from_ymd_opt(2025, 1, 1)),
        );
        let result = run(
            &mut state,
            FilterEdit::ReleaseDateEnd(NaiveDate::from_ymd_opt(2024, 1, 1)),
        );

        assert_eq!(state.release_date_end, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == crate::commands::MessageLevel::Warning));
    }
}
