//! Simulated remote submission

use super::{SubmissionError, SubmissionPayload, SubmissionReceipt, Submitter};
use crate::config::SubmissionConfig;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Default round-trip delay of the fake endpoint
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Default share of submissions that fail
pub const DEFAULT_FAILURE_RATE: f64 = 0.1;

/// Fake endpoint that waits, then succeeds or reports a network error at random
///
/// Only meant for demos and UI testing; production code plugs in a real
/// [`Submitter`].
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    latency: Duration,
    failure_rate: f64,
}

impl SimulatedSubmitter {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            failure_rate: DEFAULT_FAILURE_RATE,
        }
    }

    pub fn from_config(config: &SubmissionConfig) -> Self {
        Self::new()
            .with_latency(Duration::from_millis(config.latency_ms))
            .with_failure_rate(config.failure_rate)
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Probability of failure, clamped to `0.0..=1.0`
    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = if failure_rate.is_nan() {
            0.0
        } else {
            failure_rate.clamp(0.0, 1.0)
        };
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, payload: SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError> {
        tokio::time::sleep(self.latency).await;

        let failed = rand::thread_rng().gen_bool(self.failure_rate);
        if failed {
            return Err(SubmissionError::Network("Network error".to_string()));
        }

        Ok(SubmissionReceipt {
            success: true,
            message: "Registration successful".to_string(),
            payload,
        })
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
