use crate::commands::load_values;
use crate::report;
use anyhow::Result;
use colored::Colorize;
use regform::{
    completion_progress, fields, password_strength, validate_form, CharCounter, FieldSource,
    RegformConfig, RuleRegistry, REGISTRATION_PROGRESS_FIELDS,
};
use std::path::Path;

pub fn execute(file: &Path, config_path: &Path, json: bool) -> Result<()> {
    let config = RegformConfig::load(config_path)?;
    let values = load_values(file)?;

    let report = validate_form(RuleRegistry::registration(), &values);
    let progress = completion_progress(&values, &REGISTRATION_PROGRESS_FIELDS);
    let password = values.value(fields::PASSWORD).map(|v| v.as_text().into_owned());
    let bio = values
        .value(fields::BIO)
        .map(|v| CharCounter::from(&config.bio).count(&v.as_text()));

    if json {
        let output = serde_json::json!({
            "report": report,
            "progress": progress,
            "passwordStrength": password.as_deref().map(password_strength),
            "bio": bio,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", "Registration form".green().bold());
        println!();
        report::print_fields(&report, &values);
        println!();
        report::print_progress(progress);
        if let Some(password) = &password {
            report::print_password_strength(password);
        }
        if let Some(bio) = &bio {
            report::print_char_count("Bio", bio);
        }
        println!();
    }

    if !report.valid {
        anyhow::bail!("{} field(s) need attention", report.errors().count());
    }

    if !json {
        println!("{}", "All fields valid".green().bold());
    }
    Ok(())
}
