// File: src/validation/patterns.rs
// Purpose: Compiled patterns behind the registration rules

use once_cell::sync::Lazy;
use regex::Regex;

/// Letters and spaces only
pub static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z\s]+$").unwrap()
});

/// `local@domain.tld` shape, no whitespace and a single `@` on each side
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// Each entry must match somewhere in the password.
///
/// The last one pins the first character to the accepted alphabet.
pub static PASSWORD_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"[a-z]",
        r"[A-Z]",
        r"\d",
        r"[@$!%*?&]",
        r"^[A-Za-z\d@$!%*?&]",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});
