mod commands;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "regform")]
#[command(version, about = "regform - check and submit registration forms", long_about = None)]
struct Cli {
    /// Config file (defaults apply when it does not exist)
    #[arg(short, long, global = true, default_value = "regform.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON file of field values
    Check {
        /// JSON object mapping field ids to values
        file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a password on the strength meter
    Strength {
        password: String,
    },

    /// Validate, then send through the simulated endpoint
    Submit {
        /// JSON object mapping field ids to values
        file: PathBuf,
    },

    /// Check a profile picture
    Attach {
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    tracing::debug!(config = %cli.config.display(), "regform starting");

    // Execute command
    match cli.command {
        Commands::Check { file, json } => {
            commands::check::execute(&file, &cli.config, json)?;
        }
        Commands::Strength { password } => {
            commands::strength::execute(&password);
        }
        Commands::Submit { file } => {
            commands::submit::execute(&file, &cli.config).await?;
        }
        Commands::Attach { file } => {
            commands::attach::execute(&file, &cli.config)?;
        }
    }

    Ok(())
}
