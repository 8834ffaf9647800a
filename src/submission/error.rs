//! Submission errors

use thiserror::Error;

/// Errors raised while starting or running a submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A previous attempt has not resolved yet
    #[error("a submission is already in progress")]
    AlreadyPending,

    /// The transport could not deliver the form
    #[error("transport failed: {0}")]
    Transport(String),

    /// The task running the transport panicked or was cancelled
    #[error("submission task failed: {0}")]
    TaskFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SubmitError::AlreadyPending.to_string(),
            "a submission is already in progress"
        );
        assert_eq!(
            SubmitError::Transport("timeout".to_string()).to_string(),
            "transport failed: timeout"
        );
        assert_eq!(
            SubmitError::TaskFailed("panicked".to_string()).to_string(),
            "submission task failed: panicked"
        );
    }
}
