//! Submission boundary for validated forms
//!
//! A [`Submitter`] stands in for the remote call a real deployment would make.
//! [`SimulatedSubmitter`] fakes latency and occasional network failures so
//! success and error paths can be exercised without a server.

use crate::rules::{fields, RuleRegistry};
use crate::validation::{validate_form, FieldVerdict, FormValidationResult, ValidationResult};
use crate::value::{FieldSource, FieldValue};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub mod simulated;

pub use simulated::SimulatedSubmitter;

/// Payload key holding the capture time; no form field may use it
pub const TIMESTAMP_KEY: &str = "timestamp";

pub const RESERVED_FIELD_MESSAGE: &str = "This field name is reserved";

/// Field values captured for submission, stamped with their creation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
    pub timestamp: DateTime<Utc>,
}

impl SubmissionPayload {
    /// Validate the source and snapshot it if every field passes
    ///
    /// A source carrying a `timestamp` field is refused with an extra
    /// failing verdict, since the key would clash in the flattened payload.
    pub fn from_validated<S>(registry: &RuleRegistry, source: &S) -> Result<Self, FormValidationResult>
    where
        S: FieldSource + ?Sized,
    {
        let report = validate_form(registry, source);
        if !report.valid {
            return Err(report);
        }

        if source.value(TIMESTAMP_KEY).is_some() {
            tracing::debug!("form uses the reserved `{}` field", TIMESTAMP_KEY);
            let mut verdicts = report.fields;
            verdicts.push(FieldVerdict {
                field: TIMESTAMP_KEY.to_string(),
                result: ValidationResult::invalid(RESERVED_FIELD_MESSAGE),
            });
            return Err(FormValidationResult::from_verdicts(verdicts));
        }

        let fields = source
            .entries()
            .map(|(id, value)| (id.to_string(), value.clone()))
            .collect();

        Ok(Self {
            fields,
            timestamp: Utc::now(),
        })
    }

    pub fn get(&self, field_id: &str) -> Option<&FieldValue> {
        self.fields.get(field_id)
    }
}

/// What the receiving end answered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub success: bool,
    pub message: String,
    pub payload: SubmissionPayload,
}

impl SubmissionReceipt {
    /// Confirmation shown once registration went through
    pub fn welcome_message(&self) -> String {
        let first_name = self
            .payload
            .get(fields::FIRST_NAME)
            .map(|v| v.as_text().into_owned())
            .unwrap_or_default();
        welcome_message(&first_name)
    }
}

pub fn welcome_message(first_name: &str) -> String {
    format!(
        "Thank you {} for registering! We've sent a confirmation email to your address.",
        first_name
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Submission rejected: {0}")]
    Rejected(String),
}

/// Anything that can deliver a payload
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver the payload and report the outcome
    async fn submit(&self, payload: SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError>;

    /// Submitter name for logs
    fn name(&self) -> &'static str;
}

/// End state of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid(FormValidationResult),
    Submitted(SubmissionReceipt),
    Failed(SubmissionError),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(receipt) if receipt.success)
    }
}

/// Validate the whole form and, if it passes, hand it to the submitter
///
/// Callers keep the trigger disabled until this resolves; concurrent
/// submissions are not deduplicated.
pub async fn submit_form<S, T>(registry: &RuleRegistry, source: &S, submitter: &T) -> SubmitOutcome
where
    S: FieldSource + ?Sized,
    T: Submitter + ?Sized,
{
    let payload = match SubmissionPayload::from_validated(registry, source) {
        Ok(payload) => payload,
        Err(report) => return SubmitOutcome::Invalid(report),
    };

    tracing::debug!(submitter = submitter.name(), fields = payload.fields.len(), "submitting form");

    match submitter.submit(payload).await {
        Ok(receipt) => {
            tracing::info!(submitter = submitter.name(), "form submitted: {}", receipt.message);
            SubmitOutcome::Submitted(receipt)
        }
        Err(e) => {
            tracing::warn!(submitter = submitter.name(), "form submission failed: {}", e);
            SubmitOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FormValues;

    fn valid_form() -> FormValues {
        FormValues::new()
            .with(fields::FIRST_NAME, "Ada")
            .with(fields::LAST_NAME, "Lovelace")
            .with(fields::EMAIL, "ada@example.com")
            .with(fields::PASSWORD, "Abcdef1!")
            .with(fields::AGE, 36)
            .with(fields::TERMS, true)
            .with(fields::BIO, "Analyst")
    }

    #[test]
    fn test_payload_requires_valid_form() {
        let form = valid_form().with(fields::AGE, 9);
        let report = SubmissionPayload::from_validated(RuleRegistry::registration(), &form).unwrap_err();
        assert_eq!(report.get_error(fields::AGE), Some("Minimum value is 13"));
    }

    #[test]
    fn test_payload_includes_every_field() {
        let payload = SubmissionPayload::from_validated(RuleRegistry::registration(), &valid_form()).unwrap();

        assert_eq!(payload.fields.len(), 7);
        assert_eq!(payload.get(fields::BIO), Some(&FieldValue::from("Analyst")));
    }

    #[test]
    fn test_payload_json_is_flat() {
        let payload = SubmissionPayload::from_validated(RuleRegistry::registration(), &valid_form()).unwrap();

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["terms"], true);
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_timestamp_field_is_refused() {
        let form = valid_form().with(TIMESTAMP_KEY, "2024-01-01");
        let report = SubmissionPayload::from_validated(RuleRegistry::registration(), &form).unwrap_err();

        assert!(!report.valid);
        assert_eq!(report.errors().count(), 1);
        assert_eq!(report.get_error(TIMESTAMP_KEY), Some(RESERVED_FIELD_MESSAGE));
    }

    #[test]
    fn test_welcome_message() {
        assert_eq!(
            welcome_message("Ada"),
            "Thank you Ada for registering! We've sent a confirmation email to your address."
        );
    }
}
