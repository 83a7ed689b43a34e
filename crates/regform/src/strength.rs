// File: src/strength.rs
// Purpose: Additive password strength meter

use regform_validation::{has_lowercase, has_special, has_uppercase, is_long_enough};
use serde::Serialize;
use std::fmt;

/// Points awarded per satisfied check
const POINTS_PER_CHECK: u8 = 25;

/// Display label for a strength score
///
/// `Weak` belongs to the label scale, but no score maps to it: labels only
/// escalate at 50, 75 and 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            100..=u8::MAX => StrengthLabel::VeryStrong,
            75..=99 => StrengthLabel::Strong,
            50..=74 => StrengthLabel::Medium,
            _ => StrengthLabel::VeryWeak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Meter reading for a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    /// 0, 25, 50, 75 or 100
    pub score: u8,
    pub label: StrengthLabel,
}

/// Scores a password on length, lowercase, uppercase and special characters
///
/// Digits are not scored.
pub fn password_strength(password: &str) -> PasswordStrength {
    let checks = [
        is_long_enough(password),
        has_lowercase(password),
        has_uppercase(password),
        has_special(password),
    ];
    let score = checks.iter().filter(|passed| **passed).count() as u8 * POINTS_PER_CHECK;

    PasswordStrength {
        score,
        label: StrengthLabel::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0, StrengthLabel::VeryWeak)]
    #[case("abc", 25, StrengthLabel::VeryWeak)]
    #[case("abcdefgh", 50, StrengthLabel::Medium)]
    #[case("abcdefg1", 50, StrengthLabel::Medium)]
    #[case("Abcdefg1", 75, StrengthLabel::Strong)]
    #[case("Abc!", 75, StrengthLabel::Strong)]
    #[case("Abcdef1!", 100, StrengthLabel::VeryStrong)]
    #[case("12345678", 25, StrengthLabel::VeryWeak)]
    fn test_password_strength(#[case] password: &str, #[case] score: u8, #[case] label: StrengthLabel) {
        assert_eq!(password_strength(password), PasswordStrength { score, label });
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(StrengthLabel::from_score(25), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(49), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(50), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(74), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(75), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(99), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(100), StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(StrengthLabel::VeryWeak.to_string(), "Very Weak");
        assert_eq!(StrengthLabel::VeryStrong.to_string(), "Very Strong");
    }
}
