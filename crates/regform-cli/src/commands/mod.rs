pub mod attach;
pub mod check;
pub mod strength;
pub mod submit;

use anyhow::{Context, Result};
use regform::FormValues;
use std::fs;
use std::path::Path;

/// Reads a JSON object of field values
pub fn load_values(path: &Path) -> Result<FormValues> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read values file: {:?}", path))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse values file: {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regform::{FieldSource, FieldValue};
    use std::io::Write;

    #[test]
    fn test_load_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"firstName": "Ada", "age": 36, "terms": false}}"#).unwrap();

        let values = load_values(file.path()).unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values.value("terms"), Some(&FieldValue::Checkbox(false)));
    }

    #[test]
    fn test_load_values_rejects_non_object() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();

        let err = load_values(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse values file"));
    }
}
