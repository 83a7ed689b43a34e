use crate::commands::load_values;
use crate::report;
use anyhow::Result;
use colored::Colorize;
use regform::{submit_form, RegformConfig, RuleRegistry, SimulatedSubmitter, SubmitOutcome};
use std::path::Path;

pub async fn execute(file: &Path, config_path: &Path) -> Result<()> {
    let config = RegformConfig::load(config_path)?;
    let values = load_values(file)?;
    let submitter = SimulatedSubmitter::from_config(&config.submission);

    println!("{}", "Submitting registration...".green().bold());
    println!();

    match submit_form(RuleRegistry::registration(), &values, &submitter).await {
        SubmitOutcome::Invalid(report) => {
            report::print_fields(&report, &values);
            println!();
            if let Some(first) = report.first_invalid() {
                println!("Fix {} first", first.field.cyan());
            }
            anyhow::bail!("{} field(s) need attention", report.errors().count());
        }
        SubmitOutcome::Submitted(receipt) => {
            println!("{}", receipt.message.green().bold());
            println!("{}", receipt.welcome_message());
            println!();
            println!("{}", serde_json::to_string_pretty(&receipt.payload)?);
        }
        SubmitOutcome::Failed(e) => {
            println!(
                "{}",
                "There was an error submitting the form. Please try again.".red()
            );
            return Err(e.into());
        }
    }

    Ok(())
}
