// File: src/rules.rs
// Purpose: Declarative field rules and the registry that holds them

use crate::validation::patterns::{EMAIL_REGEX, NAME_REGEX, PASSWORD_REGEXES};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Field ids of the registration form
pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const AGE: &str = "age";
    pub const TERMS: &str = "terms";
    pub const BIO: &str = "bio";
}

/// Pattern constraint kept as data so rules stay inspectable
#[derive(Debug, Clone)]
pub enum FieldPattern {
    /// A single expression that must match
    Regex(Regex),
    /// Every expression must match somewhere in the value
    AllOf(Vec<Regex>),
}

impl FieldPattern {
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        Ok(FieldPattern::Regex(Regex::new(pattern)?))
    }

    pub fn all_of(patterns: &[&str]) -> Result<Self, RuleError> {
        let regexes = patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FieldPattern::AllOf(regexes))
    }

    pub fn is_match(&self, value: &str) -> bool {
        match self {
            FieldPattern::Regex(regex) => regex.is_match(value),
            FieldPattern::AllOf(regexes) => regexes.iter().all(|r| r.is_match(value)),
        }
    }
}

/// Constraint set and display message for one field
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<FieldPattern>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Only a ticked checkbox satisfies the rule
    pub checkbox: bool,
    /// Shown when the pattern fails, a number is unreadable, or a checkbox is left unchecked
    pub error_message: String,
}

impl FieldRule {
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            min: None,
            max: None,
            checkbox: false,
            error_message: error_message.into(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn length(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    pub fn pattern(mut self, pattern: FieldPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn range(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    pub fn checkbox(mut self) -> Self {
        self.checkbox = true;
        self
    }

    /// True when the rule constrains a number rather than text
    pub fn is_numeric(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    fn has_text_constraints(&self) -> bool {
        self.pattern.is_some() || self.min_length.is_some() || self.max_length.is_some()
    }

    /// Checks the rule's own invariants
    pub fn check(&self, field: &str) -> Result<(), RuleError> {
        if !self.required && !self.checkbox && !self.is_numeric() && !self.has_text_constraints() {
            return Err(RuleError::Unconstrained { field: field.to_string() });
        }
        if self.checkbox && (self.is_numeric() || self.has_text_constraints()) {
            return Err(RuleError::MixedKinds { field: field.to_string() });
        }
        if self.is_numeric() && self.has_text_constraints() {
            return Err(RuleError::MixedKinds { field: field.to_string() });
        }
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(RuleError::InvertedLength { field: field.to_string(), min, max });
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(RuleError::InvertedRange { field: field.to_string(), min, max });
            }
        }
        Ok(())
    }
}

/// Rejected rule definitions
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("field `{field}` is optional but has no constraints")]
    Unconstrained { field: String },

    #[error("field `{field}` mixes constraints of different value kinds")]
    MixedKinds { field: String },

    #[error("field `{field}` has min length {min} above max length {max}")]
    InvertedLength { field: String, min: usize, max: usize },

    #[error("field `{field}` has min {min} above max {max}")]
    InvertedRange { field: String, min: f64, max: f64 },

    #[error("field `{field}` is defined twice")]
    DuplicateField { field: String },

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Immutable mapping from field id to rule, in declaration order
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<(String, FieldRule)>,
}

static REGISTRATION: Lazy<RuleRegistry> = Lazy::new(|| {
    registration_builder()
        .build()
        .expect("registration rules satisfy rule invariants")
});

fn registration_builder() -> RuleRegistryBuilder {
    RuleRegistry::builder()
        .rule(
            fields::FIRST_NAME,
            FieldRule::new("Please enter a valid first name (letters and spaces only)")
                .required()
                .length(2, 50)
                .pattern(FieldPattern::Regex(Regex::clone(&NAME_REGEX))),
        )
        .rule(
            fields::LAST_NAME,
            FieldRule::new("Please enter a valid last name (letters and spaces only)")
                .required()
                .length(2, 50)
                .pattern(FieldPattern::Regex(Regex::clone(&NAME_REGEX))),
        )
        .rule(
            fields::EMAIL,
            FieldRule::new("Please enter a valid email address")
                .required()
                .pattern(FieldPattern::Regex(Regex::clone(&EMAIL_REGEX))),
        )
        .rule(
            fields::PASSWORD,
            FieldRule::new(
                "Password must contain at least 8 characters, one uppercase, one lowercase, one number and one special character",
            )
            .required()
            .min_length(regform_validation::PASSWORD_MIN_LENGTH)
            .pattern(FieldPattern::AllOf(PASSWORD_REGEXES.to_vec())),
        )
        .rule(
            fields::AGE,
            FieldRule::new("Age must be between 13 and 125")
                .required()
                .range(13.0, 125.0),
        )
        .rule(
            fields::TERMS,
            FieldRule::new("You must accept the terms and conditions")
                .required()
                .checkbox(),
        )
}

impl RuleRegistry {
    pub fn builder() -> RuleRegistryBuilder {
        RuleRegistryBuilder::default()
    }

    /// The registration form's rules, built once per process
    pub fn registration() -> &'static RuleRegistry {
        &REGISTRATION
    }

    pub fn get_rule(&self, field_id: &str) -> Option<&FieldRule> {
        self.rules
            .iter()
            .find(|(id, _)| id == field_id)
            .map(|(_, rule)| rule)
    }

    /// Field ids in declaration order
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.rules.iter().map(|(id, rule)| (id.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Collects rules and checks them on [`build`](RuleRegistryBuilder::build)
#[derive(Debug, Default)]
pub struct RuleRegistryBuilder {
    rules: Vec<(String, FieldRule)>,
}

impl RuleRegistryBuilder {
    pub fn rule(mut self, field_id: impl Into<String>, rule: FieldRule) -> Self {
        self.rules.push((field_id.into(), rule));
        self
    }

    pub fn build(self) -> Result<RuleRegistry, RuleError> {
        for (index, (id, rule)) in self.rules.iter().enumerate() {
            rule.check(id)?;
            if self.rules[..index].iter().any(|(seen, _)| seen == id) {
                return Err(RuleError::DuplicateField { field: id.clone() });
            }
        }
        Ok(RuleRegistry { rules: self.rules })
    }
}
