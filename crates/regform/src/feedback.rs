// File: src/feedback.rs
// Purpose: Colour states for live form feedback

use crate::strength::StrengthLabel;
use crate::validation::ValidationResult;
use crate::value::FieldValue;
use regform_validation::char_len;
use serde::Serialize;

/// Colour state a renderer maps onto its palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Neutral,
    Success,
    Warning,
    Error,
}

/// Progress bar colour: red below 30%, amber below 70%, green from there
pub fn progress_tone(percent: u8) -> Tone {
    match percent {
        0..=29 => Tone::Error,
        30..=69 => Tone::Warning,
        _ => Tone::Success,
    }
}

/// Validation icon next to a field
///
/// Checkboxes always show their verdict; other fields stay neutral until
/// something is typed.
pub fn field_indicator(value: &FieldValue, result: &ValidationResult) -> Tone {
    if value.is_checkbox() || value.is_filled() {
        verdict_tone(result)
    } else {
        Tone::Neutral
    }
}

/// Border of a text-like field; checkboxes have none
///
/// Unlike the icon, a blank field that failed is still outlined in red.
pub fn field_border(value: &FieldValue, result: &ValidationResult) -> Option<Tone> {
    if value.is_checkbox() {
        return None;
    }
    Some(match (result.valid, value.is_filled()) {
        (false, _) => Tone::Error,
        (true, true) => Tone::Success,
        (true, false) => Tone::Neutral,
    })
}

pub fn strength_tone(label: StrengthLabel) -> Tone {
    match label {
        StrengthLabel::VeryWeak | StrengthLabel::Weak => Tone::Error,
        StrengthLabel::Medium => Tone::Warning,
        StrengthLabel::Strong | StrengthLabel::VeryStrong => Tone::Success,
    }
}

fn verdict_tone(result: &ValidationResult) -> Tone {
    if result.valid {
        Tone::Success
    } else {
        Tone::Error
    }
}

/// Live character counter for a free-text field such as the bio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    pub limit: usize,
    pub warn_above: usize,
    pub error_above: usize,
}

impl Default for CharCounter {
    fn default() -> Self {
        Self {
            limit: 500,
            warn_above: 400,
            error_above: 450,
        }
    }
}

/// Counter reading for the current text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharCount {
    pub count: usize,
    pub limit: usize,
    pub tone: Tone,
}

impl CharCount {
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.count)
    }

    pub fn is_over_limit(&self) -> bool {
        self.count > self.limit
    }
}

impl CharCounter {
    pub fn count(&self, text: &str) -> CharCount {
        let count = char_len(text);
        let tone = if count > self.error_above {
            Tone::Error
        } else if count > self.warn_above {
            Tone::Warning
        } else {
            Tone::Neutral
        };

        CharCount {
            count,
            limit: self.limit,
            tone,
        }
    }
}
