//! Trait abstraction for delivering a submitted form, plus the simulated
//! transport used by the app

use super::error::SubmitError;
use crate::state::FormValues;
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated latency
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

/// Delivers form values to a destination, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// Deliver the values; resolves once the destination has accepted them
    async fn submit(&self, destination: &str, values: &FormValues) -> Result<(), SubmitError>;
}

/// Transport that waits a fixed latency and then reports success, or
/// failure when configured to fail
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    latency: Duration,
    fail: bool,
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            fail: false,
        }
    }

    /// Make every submission fail after the latency elapses
    pub fn failing(mut self, fail: bool) -> Self {
        self.fail = fail;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl SubmitTransport for SimulatedTransport {
    async fn submit(&self, destination: &str, values: &FormValues) -> Result<(), SubmitError> {
        tracing::debug!(
            destination,
            latency_ms = self.latency.as_millis() as u64,
            sender = %values.name,
            "Simulating form delivery"
        );
        tokio::time::sleep(self.latency).await;

        if self.fail {
            Err(SubmitError::Transport(
                "simulated delivery failure".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}
