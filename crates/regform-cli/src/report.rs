use colored::{ColoredString, Colorize};
use regform::{
    field_indicator, password_strength, progress_tone, strength_tone, CharCount,
    FieldSource, FormValidationResult, PasswordStrength, Tone,
};

/// Colours text by feedback tone
pub fn paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Neutral => text.dimmed(),
        Tone::Success => text.green(),
        Tone::Warning => text.yellow(),
        Tone::Error => text.red(),
    }
}

fn mark(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "·",
        Tone::Success => "✓",
        Tone::Warning => "!",
        Tone::Error => "✗",
    }
}

/// One line per field, in registry order
pub fn print_fields<S: FieldSource + ?Sized>(report: &FormValidationResult, values: &S) {
    for verdict in &report.fields {
        let tone = match values.value(&verdict.field) {
            Some(value) => field_indicator(value, &verdict.result),
            None => Tone::Neutral,
        };

        if verdict.result.message.is_empty() {
            println!("  {} {}", paint(mark(tone), tone), verdict.field);
        } else {
            println!(
                "  {} {} {}",
                paint(mark(tone), tone),
                verdict.field,
                paint(&verdict.result.message, tone)
            );
        }
    }
}

pub fn print_progress(percent: u8) {
    let filled = usize::from(percent) / 5;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled));
    println!(
        "Progress: {} {}",
        paint(&bar, progress_tone(percent)),
        paint(&format!("{}%", percent), progress_tone(percent))
    );
}

pub fn print_strength(strength: &PasswordStrength) {
    let tone = strength_tone(strength.label);
    println!(
        "Password strength: {} ({})",
        paint(strength.label.as_str(), tone),
        strength.score
    );
}

pub fn print_password_strength(password: &str) {
    print_strength(&password_strength(password));
}

pub fn print_char_count(label: &str, count: &CharCount) {
    println!(
        "{}: {}",
        label,
        paint(&format!("{}/{}", count.count, count.limit), count.tone)
    );
}
