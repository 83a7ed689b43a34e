//! String validation functions

use alloc::format;
use alloc::string::String;

/// Number of characters as a user perceives them in an input box
///
/// Counts Unicode scalar values, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// True when the value is empty or whitespace only
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Validates minimum length in characters
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if char_len(s) >= min {
        Ok(())
    } else {
        Err(format!("Minimum {} characters required", min))
    }
}

/// Validates maximum length in characters
pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if char_len(s) <= max {
        Ok(())
    } else {
        Err(format!("Maximum {} characters allowed", max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_scalars() {
        assert_eq!(char_len(""), 0);
        assert_eq!(char_len("abc"), 3);
        assert_eq!(char_len("Zoë"), 3);
    }

    #[test]
    fn test_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_length_validators() {
        assert!(validate_min_length("Al", 2).is_ok());
        assert_eq!(
            validate_min_length("A", 2).unwrap_err(),
            "Minimum 2 characters required"
        );

        assert!(validate_max_length("hello", 5).is_ok());
        assert_eq!(
            validate_max_length("hello!", 5).unwrap_err(),
            "Maximum 5 characters allowed"
        );
    }

    #[test]
    fn test_length_is_not_trimmed() {
        // Only the required check trims; length checks see the raw value
        assert!(validate_min_length("  ", 2).is_ok());
    }
}
