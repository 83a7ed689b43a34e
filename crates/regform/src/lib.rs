// regform - registration form validation
// Declarative field rules, a pure validation engine and a pluggable submission boundary

pub mod attachment;
pub mod config;
pub mod feedback;
pub mod progress;
pub mod rules;
pub mod strength;
pub mod submission;
pub mod validation;
pub mod value;

// Re-export core types
pub use rules::{fields, FieldPattern, FieldRule, RuleError, RuleRegistry, RuleRegistryBuilder};
pub use validation::{
    check_rule, validate_field, validate_form, FieldVerdict, FormValidationResult,
    ValidationResult, REQUIRED_MESSAGE,
};
pub use value::{FieldSource, FieldValue, FormValues};

// Re-export derived feedback
pub use feedback::{field_border, field_indicator, progress_tone, strength_tone, CharCount, CharCounter, Tone};
pub use progress::{completion_progress, REGISTRATION_PROGRESS_FIELDS};
pub use strength::{password_strength, PasswordStrength, StrengthLabel};

// Re-export boundaries
pub use attachment::{validate_attachment, Attachment, AttachmentLimits, AttachmentRejection};
pub use config::RegformConfig;
pub use submission::{
    submit_form, welcome_message, SimulatedSubmitter, SubmissionError, SubmissionPayload,
    SubmissionReceipt, SubmitOutcome, Submitter, TIMESTAMP_KEY,
};
