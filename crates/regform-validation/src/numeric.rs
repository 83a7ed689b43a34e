//! Numeric parsing and formatting for number inputs

use alloc::format;
use alloc::string::{String, ToString};

/// Parses the leading integer of a number input the way browsers read `parseInt(value, 10)`
///
/// Leading whitespace and one sign are accepted, then decimal digits up to the
/// first non-digit. Returns `None` when no digit is found.
///
/// ```
/// use regform_validation::parse_leading_int;
/// assert_eq!(parse_leading_int(" 42"), Some(42.0));
/// assert_eq!(parse_leading_int("13.9"), Some(13.0));
/// assert_eq!(parse_leading_int("-7 years"), Some(-7.0));
/// assert_eq!(parse_leading_int("abc"), None);
/// ```
pub fn parse_leading_int(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value = 0.0_f64;
    let mut seen = false;
    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) => {
                value = value * 10.0 + f64::from(d);
                seen = true;
            }
            None => break,
        }
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Formats a bound for display, dropping the fraction of whole numbers
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n == (n as i64) as f64 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Validates a lower bound
pub fn validate_min_value(value: f64, min: f64) -> Result<(), String> {
    if value < min {
        Err(format!("Minimum value is {}", format_number(min)))
    } else {
        Ok(())
    }
}

/// Validates an upper bound
pub fn validate_max_value(value: f64, max: f64) -> Result<(), String> {
    if value > max {
        Err(format!("Maximum value is {}", format_number(max)))
    } else {
        Ok(())
    }
}
