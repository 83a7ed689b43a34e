/// Submitting the registration form end to end
///
/// Uses a recording submitter so the payload handed across the boundary can
/// be inspected, and the simulated endpoint pinned to one outcome.

use async_trait::async_trait;
use regform::{
    fields, submit_form, FieldValue, FormValues, RuleRegistry, SimulatedSubmitter,
    SubmissionError, SubmissionPayload, SubmissionReceipt, SubmitOutcome, Submitter, TIMESTAMP_KEY,
};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
struct RecordingSubmitter {
    received: Mutex<Vec<SubmissionPayload>>,
}

#[async_trait]
impl Submitter for RecordingSubmitter {
    async fn submit(&self, payload: SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError> {
        self.received.lock().unwrap().push(payload.clone());
        Ok(SubmissionReceipt {
            success: true,
            message: "Stored".to_string(),
            payload,
        })
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

struct RejectingSubmitter;

#[async_trait]
impl Submitter for RejectingSubmitter {
    async fn submit(&self, _payload: SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError> {
        Err(SubmissionError::Rejected("email already registered".to_string()))
    }

    fn name(&self) -> &'static str {
        "rejecting"
    }
}

fn form() -> FormValues {
    FormValues::new()
        .with(fields::FIRST_NAME, "Ada")
        .with(fields::LAST_NAME, "Lovelace")
        .with(fields::EMAIL, "ada@example.com")
        .with(fields::PASSWORD, "Engine1!")
        .with(fields::AGE, 36)
        .with(fields::TERMS, true)
}

fn instant(failure_rate: f64) -> SimulatedSubmitter {
    SimulatedSubmitter::new()
        .with_latency(Duration::ZERO)
        .with_failure_rate(failure_rate)
}

#[tokio::test]
async fn test_invalid_form_is_never_sent() {
    let submitter = RecordingSubmitter::default();
    let invalid = form().with(fields::TERMS, false);

    let outcome = submit_form(RuleRegistry::registration(), &invalid, &submitter).await;

    match outcome {
        SubmitOutcome::Invalid(report) => {
            assert_eq!(
                report.get_error(fields::TERMS),
                Some("You must accept the terms and conditions")
            );
        }
        other => panic!("expected Invalid, got {:?}", other),
    }
    assert!(submitter.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_text_terms_are_never_sent() {
    let submitter = RecordingSubmitter::default();
    let form = form().with(fields::TERMS, "no");

    let outcome = submit_form(RuleRegistry::registration(), &form, &submitter).await;

    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert!(submitter.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_timestamp_field_is_never_sent() {
    let submitter = RecordingSubmitter::default();
    let form = form().with(TIMESTAMP_KEY, "yesterday");

    let outcome = submit_form(RuleRegistry::registration(), &form, &submitter).await;

    let SubmitOutcome::Invalid(report) = outcome else {
        panic!("expected Invalid");
    };
    assert_eq!(report.first_invalid().map(|v| v.field.as_str()), Some(TIMESTAMP_KEY));
    assert!(submitter.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_valid_form_reaches_submitter() {
    let submitter = RecordingSubmitter::default();

    let outcome = submit_form(RuleRegistry::registration(), &form(), &submitter).await;
    assert!(outcome.is_success());

    let received = submitter.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].get(fields::AGE), Some(&FieldValue::Numeric(36.0)));
}

#[tokio::test]
async fn test_simulated_success_carries_payload() {
    let outcome = submit_form(RuleRegistry::registration(), &form(), &instant(0.0)).await;

    let SubmitOutcome::Submitted(receipt) = outcome else {
        panic!("expected a receipt");
    };
    assert!(receipt.success);
    assert_eq!(receipt.message, "Registration successful");
    assert_eq!(receipt.payload.get(fields::FIRST_NAME), Some(&FieldValue::from("Ada")));
    assert_eq!(
        receipt.welcome_message(),
        "Thank you Ada for registering! We've sent a confirmation email to your address."
    );
}

#[tokio::test]
async fn test_simulated_network_failure() {
    let outcome = submit_form(RuleRegistry::registration(), &form(), &instant(1.0)).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed(SubmissionError::Network("Network error".to_string()))
    );
    assert!(!outcome.is_success());
}

#[tokio::test]
async fn test_engine_is_ready_after_failure() {
    let registry = RuleRegistry::registration();

    let first = submit_form(registry, &form(), &RejectingSubmitter).await;
    assert!(matches!(first, SubmitOutcome::Failed(SubmissionError::Rejected(_))));

    let second = submit_form(registry, &form(), &instant(0.0)).await;
    assert!(second.is_success());
}

#[tokio::test]
async fn test_dyn_submitter() {
    let submitter: Box<dyn Submitter> = Box::new(instant(0.0));
    let outcome = submit_form(RuleRegistry::registration(), &form(), submitter.as_ref()).await;
    assert!(outcome.is_success());
}
