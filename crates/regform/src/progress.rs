// File: src/progress.rs
// Purpose: Form completion percentage

use crate::rules::fields;
use crate::value::FieldSource;

/// Fields tracked by the registration progress bar
pub const REGISTRATION_PROGRESS_FIELDS: [&str; 6] = [
    fields::FIRST_NAME,
    fields::LAST_NAME,
    fields::EMAIL,
    fields::PASSWORD,
    fields::AGE,
    fields::TERMS,
];

/// Percentage of `field_ids` that are filled in or checked, rounded to the nearest integer
///
/// Fields missing from the source count as incomplete. An empty list yields 0.
pub fn completion_progress<S>(source: &S, field_ids: &[&str]) -> u8
where
    S: FieldSource + ?Sized,
{
    if field_ids.is_empty() {
        return 0;
    }

    let completed = field_ids
        .iter()
        .filter(|id| source.value(id).is_some_and(|value| value.is_filled()))
        .count();

    ((completed as f64 / field_ids.len() as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FormValues;

    fn blank_form() -> FormValues {
        FormValues::new()
            .with(fields::FIRST_NAME, "")
            .with(fields::LAST_NAME, "")
            .with(fields::EMAIL, "")
            .with(fields::PASSWORD, "")
            .with(fields::AGE, "")
            .with(fields::TERMS, false)
    }

    #[test]
    fn test_one_of_six_rounds_to_17() {
        let form = blank_form().with(fields::FIRST_NAME, "A");
        assert_eq!(completion_progress(&form, &REGISTRATION_PROGRESS_FIELDS), 17);
    }

    #[test]
    fn test_empty_and_full() {
        assert_eq!(completion_progress(&blank_form(), &REGISTRATION_PROGRESS_FIELDS), 0);

        let full = FormValues::new()
            .with(fields::FIRST_NAME, "Ada")
            .with(fields::LAST_NAME, "Lovelace")
            .with(fields::EMAIL, "ada@example.com")
            .with(fields::PASSWORD, "x")
            .with(fields::AGE, 36)
            .with(fields::TERMS, true);
        assert_eq!(completion_progress(&full, &REGISTRATION_PROGRESS_FIELDS), 100);
    }

    #[test]
    fn test_whitespace_does_not_count() {
        let form = blank_form().with(fields::EMAIL, "   ");
        assert_eq!(completion_progress(&form, &REGISTRATION_PROGRESS_FIELDS), 0);
    }

    #[test]
    fn test_checked_box_counts() {
        let form = blank_form()
            .with(fields::TERMS, true)
            .with(fields::AGE, "20")
            .with(fields::EMAIL, "x");
        assert_eq!(completion_progress(&form, &REGISTRATION_PROGRESS_FIELDS), 50);
    }

    #[test]
    fn test_missing_fields_are_incomplete() {
        let form = FormValues::new().with(fields::FIRST_NAME, "Ada").with(fields::LAST_NAME, "L");
        assert_eq!(completion_progress(&form, &REGISTRATION_PROGRESS_FIELDS), 33);
    }

    #[test]
    fn test_empty_field_list() {
        assert_eq!(completion_progress(&blank_form(), &[]), 0);
    }
}
