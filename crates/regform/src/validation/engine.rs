// File: src/validation/engine.rs
// Purpose: Evaluates field rules against current values

use super::{FieldVerdict, FormValidationResult, ValidationResult};
use crate::rules::{FieldRule, RuleRegistry};
use crate::value::{FieldSource, FieldValue};
use regform_validation::{
    validate_max_length, validate_max_value, validate_min_length, validate_min_value,
};

pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Validates one field by id
///
/// Ids without a rule pass with an empty message.
pub fn validate_field(registry: &RuleRegistry, field_id: &str, value: &FieldValue) -> ValidationResult {
    match registry.get_rule(field_id) {
        Some(rule) => {
            let result = check_rule(rule, value);
            tracing::trace!(field = field_id, valid = result.valid, "field validated");
            result
        }
        None => {
            tracing::debug!(field = field_id, "no rule for field, passing");
            ValidationResult::valid()
        }
    }
}

/// Validates every registry field against the source
///
/// All fields are evaluated so each one gets a message. Fields the source
/// does not have are reported valid.
pub fn validate_form<S>(registry: &RuleRegistry, source: &S) -> FormValidationResult
where
    S: FieldSource + ?Sized,
{
    let verdicts = registry
        .iter()
        .map(|(field_id, rule)| {
            let result = match source.value(field_id) {
                Some(value) => check_rule(rule, value),
                None => {
                    tracing::debug!(field = field_id, "field missing from form, passing");
                    ValidationResult::valid()
                }
            };
            FieldVerdict {
                field: field_id.to_string(),
                result,
            }
        })
        .collect();

    let report = FormValidationResult::from_verdicts(verdicts);
    tracing::debug!(
        valid = report.valid,
        errors = report.errors().count(),
        "form validated"
    );
    report
}

/// Applies a rule to a value
///
/// A checkbox rule is judged on the checked state alone. A value of the
/// wrong kind fails with the rule's message. Otherwise constraints are
/// checked in order and the first failure wins.
pub fn check_rule(rule: &FieldRule, value: &FieldValue) -> ValidationResult {
    match (rule.checkbox, value) {
        (true, FieldValue::Checkbox(true)) => ValidationResult::valid(),
        (true, _) | (false, FieldValue::Checkbox(_)) => {
            ValidationResult::invalid(rule.error_message.clone())
        }
        (false, _) => ValidationResult::from_result(check_constraints(rule, value)),
    }
}

fn check_constraints(rule: &FieldRule, value: &FieldValue) -> Result<(), String> {
    if rule.required && !value.is_filled() {
        return Err(REQUIRED_MESSAGE.to_string());
    }

    let text = value.as_text();

    if let Some(min) = rule.min_length {
        validate_min_length(&text, min)?;
    }

    if let Some(max) = rule.max_length {
        validate_max_length(&text, max)?;
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(&text) {
            return Err(rule.error_message.clone());
        }
    }

    if rule.is_numeric() && value.is_filled() {
        let number = value
            .as_number()
            .ok_or_else(|| rule.error_message.clone())?;

        if let Some(min) = rule.min {
            validate_min_value(number, min)?;
        }

        if let Some(max) = rule.max {
            validate_max_value(number, max)?;
        }
    }

    Ok(())
}
