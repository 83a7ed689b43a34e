//! Password character-class checks

/// Special characters accepted by the registration password rule
pub const PASSWORD_SPECIALS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

/// Minimum password length counted by rule and meter alike
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Contains an ASCII lowercase letter
pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// Contains an ASCII uppercase letter
pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// Contains one of [`PASSWORD_SPECIALS`]
pub fn has_special(password: &str) -> bool {
    password.chars().any(is_password_special)
}

pub fn is_password_special(c: char) -> bool {
    PASSWORD_SPECIALS.contains(&c)
}

/// Meets the minimum length, counted in characters
pub fn is_long_enough(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LENGTH
}
