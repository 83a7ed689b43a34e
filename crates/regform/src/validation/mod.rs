// File: src/validation/mod.rs
// Purpose: Validation verdicts for single fields and whole forms

use serde::Serialize;

pub mod engine;
pub mod patterns;

pub use engine::{check_rule, validate_field, validate_form, REQUIRED_MESSAGE};

/// Verdict for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// Empty when valid
    pub message: String,
}

impl ValidationResult {
    /// A passing verdict with no message
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing verdict carrying the message to display
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    /// Convert from a primitive validator's result
    pub fn from_result(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(message) => Self::invalid(message),
        }
    }
}

/// One field's verdict inside a form report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldVerdict {
    pub field: String,
    #[serde(flatten)]
    pub result: ValidationResult,
}

/// Verdicts for every field of a form, in registry order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormValidationResult {
    /// AND of every field verdict
    pub valid: bool,
    pub fields: Vec<FieldVerdict>,
}

impl FormValidationResult {
    pub fn from_verdicts(fields: Vec<FieldVerdict>) -> Self {
        let valid = fields.iter().all(|v| v.result.valid);
        Self { valid, fields }
    }

    /// Verdict for a specific field
    pub fn get(&self, field: &str) -> Option<&ValidationResult> {
        self.fields
            .iter()
            .find(|v| v.field == field)
            .map(|v| &v.result)
    }

    /// Message for a specific field, if it failed
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.get(field)
            .filter(|r| !r.valid)
            .map(|r| r.message.as_str())
    }

    /// Failing fields in registry order
    pub fn errors(&self) -> impl Iterator<Item = &FieldVerdict> {
        self.fields.iter().filter(|v| !v.result.valid)
    }

    /// The field a form should scroll to and focus
    pub fn first_invalid(&self) -> Option<&FieldVerdict> {
        self.errors().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(field: &str, result: ValidationResult) -> FieldVerdict {
        FieldVerdict {
            field: field.to_string(),
            result,
        }
    }

    #[test]
    fn test_from_result() {
        assert_eq!(ValidationResult::from_result(Ok(())), ValidationResult::valid());
        assert_eq!(
            ValidationResult::from_result(Err("bad".into())),
            ValidationResult::invalid("bad")
        );
    }

    #[test]
    fn test_form_result_accessors() {
        let report = FormValidationResult::from_verdicts(vec![
            verdict("a", ValidationResult::valid()),
            verdict("b", ValidationResult::invalid("B is wrong")),
            verdict("c", ValidationResult::invalid("C is wrong")),
        ]);

        assert!(!report.valid);
        assert_eq!(report.get_error("a"), None);
        assert_eq!(report.get_error("b"), Some("B is wrong"));
        assert_eq!(report.first_invalid().map(|v| v.field.as_str()), Some("b"));
        assert_eq!(report.errors().count(), 2);
        assert!(report.get("z").is_none());
    }

    #[test]
    fn test_empty_form_is_valid() {
        assert!(FormValidationResult::from_verdicts(Vec::new()).valid);
    }

    #[test]
    fn test_serializes_flat() {
        let report = FormValidationResult::from_verdicts(vec![verdict(
            "terms",
            ValidationResult::invalid("Accept"),
        )]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "valid": false,
                "fields": [{"field": "terms", "valid": false, "message": "Accept"}]
            })
        );
    }
}
