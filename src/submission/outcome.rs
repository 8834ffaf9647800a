//! Submission outcome and controller state

use crate::state::FormValues;
use chrono::{DateTime, Utc};

/// Message shown when a submission fails for any reason
pub const FAILURE_MESSAGE: &str = "Something went wrong, please try again later!";

/// Terminal result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { message: String },
    Failure { message: String },
}

impl SubmissionOutcome {
    /// Success outcome thanking the sender by name
    pub fn success_for(values: &FormValues) -> Self {
        Self::Success {
            message: format!("Thanks {}! Your form has been submitted!", values.name),
        }
    }

    pub fn failure() -> Self {
        Self::Failure {
            message: FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Failure { message } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Observable state of a submission controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub is_pending: bool,
    pub outcome: Option<SubmissionOutcome>,
    /// When the current outcome was produced
    pub resolved_at: Option<DateTime<Utc>>,
}

impl SubmissionState {
    pub fn is_idle(&self) -> bool {
        !self.is_pending && self.outcome.is_none()
    }
}
