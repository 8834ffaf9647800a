//! Submission lifecycle: Idle -> Pending -> Resolved
//!
//! `submit` returns immediately; the transport call runs on the tokio
//! runtime and reports back over a channel. The owner drains completed
//! attempts with [`SubmissionController::poll_resolution`] (event loop) or
//! [`SubmissionController::wait_resolution`] (shutdown, tests).

use super::error::SubmitError;
use super::outcome::{SubmissionOutcome, SubmissionState};
use super::transport::SubmitTransport;
use crate::state::FormValues;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Identifies one call to [`SubmissionController::submit`]
pub type AttemptId = Uuid;

/// Completed attempt sent back by the background task
#[derive(Debug)]
struct Resolution {
    attempt: AttemptId,
    outcome: SubmissionOutcome,
    resolved_at: DateTime<Utc>,
}

/// Owns the submission state of one form.
///
/// At most one attempt is in flight; `submit` while pending is rejected.
pub struct SubmissionController {
    transport: Arc<dyn SubmitTransport>,
    state: SubmissionState,
    current_attempt: Option<AttemptId>,
    tx: mpsc::UnboundedSender<Resolution>,
    rx: mpsc::UnboundedReceiver<Resolution>,
}

impl SubmissionController {
    pub fn new(transport: Arc<dyn SubmitTransport>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            transport,
            state: SubmissionState::default(),
            current_attempt: None,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending
    }

    /// Outcome of the last resolved attempt, kept until the next submit
    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        self.state.outcome.as_ref()
    }

    /// Forget the last outcome once it has been shown. No-op while pending.
    pub fn clear_outcome(&mut self) {
        if !self.state.is_pending {
            self.state.outcome = None;
            self.state.resolved_at = None;
        }
    }

    /// Start submitting already-validated values.
    ///
    /// The state is Pending when this returns. Must be called from within a
    /// tokio runtime.
    pub fn submit(
        &mut self,
        destination: &str,
        values: &FormValues,
    ) -> Result<AttemptId, SubmitError> {
        if self.state.is_pending {
            tracing::warn!("Rejected submit while a submission is pending");
            return Err(SubmitError::AlreadyPending);
        }

        let attempt = Uuid::new_v4();
        self.current_attempt = Some(attempt);
        self.state.is_pending = true;
        self.state.outcome = None;
        self.state.resolved_at = None;

        tracing::info!(%attempt, destination, "Submitting contact form");

        let transport = Arc::clone(&self.transport);
        let tx = self.tx.clone();
        let destination = destination.to_string();
        let values = values.clone();

        tokio::spawn(async move {
            let success = SubmissionOutcome::success_for(&values);
            // Separate task so a panicking transport still resolves the attempt
            let call =
                tokio::spawn(async move { transport.submit(&destination, &values).await }).await;

            let result = match call {
                Ok(result) => result,
                Err(err) => Err(SubmitError::TaskFailed(err.to_string())),
            };
            let outcome = match result {
                Ok(()) => success,
                Err(err) => {
                    tracing::warn!(%attempt, error = %err, "Submission failed");
                    SubmissionOutcome::failure()
                }
            };

            // Receiver gone means the controller was dropped; nothing to report to
            let _ = tx.send(Resolution {
                attempt,
                outcome,
                resolved_at: Utc::now(),
            });
        });

        Ok(attempt)
    }

    /// Apply any finished attempt without blocking.
    ///
    /// Returns the outcome when this call resolved the pending attempt.
    pub fn poll_resolution(&mut self) -> Option<SubmissionOutcome> {
        while let Ok(resolution) = self.rx.try_recv() {
            if let Some(outcome) = self.apply(resolution) {
                return Some(outcome);
            }
        }
        None
    }

    /// Wait for the pending attempt to resolve.
    ///
    /// Returns `None` immediately when nothing is pending.
    pub async fn wait_resolution(&mut self) -> Option<SubmissionOutcome> {
        while self.state.is_pending {
            let resolution = self.rx.recv().await?;
            if let Some(outcome) = self.apply(resolution) {
                return Some(outcome);
            }
        }
        None
    }

    fn apply(&mut self, resolution: Resolution) -> Option<SubmissionOutcome> {
        if self.current_attempt != Some(resolution.attempt) {
            tracing::debug!(attempt = %resolution.attempt, "Discarding stale resolution");
            return None;
        }

        tracing::info!(
            attempt = %resolution.attempt,
            success = resolution.outcome.is_success(),
            "Submission resolved"
        );
        self.current_attempt = None;
        self.state.is_pending = false;
        self.state.outcome = Some(resolution.outcome.clone());
        self.state.resolved_at = Some(resolution.resolved_at);
        Some(resolution.outcome)
    }
}
