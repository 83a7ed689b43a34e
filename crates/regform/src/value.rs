// File: src/value.rs
// Purpose: Field values supplied by the presentation layer

use regform_validation::{format_number, is_blank, parse_leading_int};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// Current value of one form field, tagged with the field's declared input type
///
/// Deserializes untagged, so `"Ada"`, `42` and `true` map to text, number and
/// checkbox values respectively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Checkbox(bool),
    Numeric(f64),
    Text(String),
}

impl FieldValue {
    /// The value as an input box would hold it
    ///
    /// Checked boxes read as `"on"`, unchecked ones as empty.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
            FieldValue::Numeric(n) => Cow::Owned(format_number(*n)),
            FieldValue::Checkbox(true) => Cow::Borrowed("on"),
            FieldValue::Checkbox(false) => Cow::Borrowed(""),
        }
    }

    /// Integer reading of the value, truncating fractions
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Numeric(n) if n.is_finite() => Some(n.trunc()),
            FieldValue::Numeric(_) => None,
            FieldValue::Text(s) => parse_leading_int(s),
            FieldValue::Checkbox(_) => None,
        }
    }

    /// Non-blank text or a checked box
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Checkbox(checked) => *checked,
            other => !is_blank(&other.as_text()),
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self, FieldValue::Checkbox(_))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Checkbox(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Numeric(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Numeric(n as f64)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// Read access to the current value of each field
///
/// The engine only ever reads through this trait; whoever renders the form
/// owns the values.
pub trait FieldSource {
    /// Current value of a field, if the form has it
    fn value(&self, field_id: &str) -> Option<&FieldValue>;

    /// All fields with their values
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &FieldValue)> + '_>;
}

/// Snapshot of a form's values keyed by field id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: BTreeMap<String, FieldValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field_id: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(field_id, value);
        self
    }

    pub fn set(&mut self, field_id: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(field_id.into(), value.into());
    }

    pub fn remove(&mut self, field_id: &str) -> Option<FieldValue> {
        self.values.remove(field_id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FieldSource for FormValues {
    fn value(&self, field_id: &str) -> Option<&FieldValue> {
        self.values.get(field_id)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &FieldValue)> + '_> {
        Box::new(self.values.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

impl FieldSource for HashMap<String, FieldValue> {
    fn value(&self, field_id: &str) -> Option<&FieldValue> {
        self.get(field_id)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, &FieldValue)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
