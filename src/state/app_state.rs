//! Application state definitions

use super::forms::ContactForm;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Window in which a second Ctrl+C quits
pub const DOUBLE_CTRL_C_WINDOW: Duration = Duration::from_millis(1000);

/// Severity of an alert dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

impl AlertKind {
    pub fn title(&self) -> &'static str {
        match self {
            AlertKind::Success => "All good!",
            AlertKind::Error => "Oops!",
        }
    }
}

/// Modal notification shown over the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: ContactForm,

    // Notifications
    alerts: VecDeque<Alert>,
    pub status_message: Option<String>,

    // Double-tap quit detection
    pub last_ctrl_c: Option<Instant>,
}

impl AppState {
    /// Queue an alert for display
    pub fn push_alert(&mut self, kind: AlertKind, message: impl Into<String>) {
        self.alerts.push_back(Alert {
            kind,
            message: message.into(),
        });
    }

    pub fn has_alert(&self) -> bool {
        !self.alerts.is_empty()
    }

    /// Alert currently on screen (oldest first)
    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    /// Dismiss the alert currently on screen
    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    /// Record a Ctrl+C press; returns true when it completes a double tap
    pub fn register_ctrl_c(&mut self, now: Instant) -> bool {
        let is_double = self
            .last_ctrl_c
            .is_some_and(|last| now.duration_since(last) <= DOUBLE_CTRL_C_WINDOW);
        self.last_ctrl_c = if is_double { None } else { Some(now) };
        is_double
    }
}
