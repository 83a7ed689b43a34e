// File: src/config.rs
// Purpose: Configuration parsing from regform.toml

use crate::attachment::{AttachmentLimits, MAX_ATTACHMENT_BYTES};
use crate::feedback::CharCounter;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RegformConfig {
    #[serde(default)]
    pub submission: SubmissionConfig,

    #[serde(default)]
    pub attachment: AttachmentConfig,

    #[serde(default)]
    pub bio: BioConfig,
}

/// Simulated endpoint behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionConfig {
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Share of submissions that fail, between 0 and 1
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,
}

/// Profile picture limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttachmentConfig {
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
}

/// Bio character counter thresholds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BioConfig {
    #[serde(default = "default_bio_limit")]
    pub limit: usize,

    #[serde(default = "default_warn_above")]
    pub warn_above: usize,

    #[serde(default = "default_error_above")]
    pub error_above: usize,
}

// Default values
fn default_latency_ms() -> u64 {
    1500
}

fn default_failure_rate() -> f64 {
    0.1
}

fn default_max_bytes() -> u64 {
    MAX_ATTACHMENT_BYTES
}

fn default_bio_limit() -> usize {
    500
}

fn default_warn_above() -> usize {
    400
}

fn default_error_above() -> usize {
    450
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            failure_rate: default_failure_rate(),
        }
    }
}

impl Default for AttachmentConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
        }
    }
}

impl Default for BioConfig {
    fn default() -> Self {
        Self {
            limit: default_bio_limit(),
            warn_above: default_warn_above(),
            error_above: default_error_above(),
        }
    }
}

impl From<&AttachmentConfig> for AttachmentLimits {
    fn from(config: &AttachmentConfig) -> Self {
        Self {
            max_bytes: config.max_bytes,
        }
    }
}

impl From<&BioConfig> for CharCounter {
    fn from(config: &BioConfig) -> Self {
        Self {
            limit: config.limit,
            warn_above: config.warn_above,
            error_above: config.error_above,
        }
    }
}

impl RegformConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: RegformConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config
            .check()
            .with_context(|| format!("Invalid config file: {:?}", path))?;

        Ok(config)
    }

    fn check(&self) -> Result<()> {
        let rate = self.submission.failure_rate;
        if !(0.0..=1.0).contains(&rate) {
            anyhow::bail!("submission.failure_rate must be between 0 and 1, got {}", rate);
        }
        if self.bio.warn_above > self.bio.error_above {
            anyhow::bail!(
                "bio.warn_above ({}) must not exceed bio.error_above ({})",
                self.bio.warn_above,
                self.bio.error_above
            );
        }
        Ok(())
    }
}
