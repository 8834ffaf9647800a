//! Application state and core logic

use crate::config::FormConfig;
use crate::state::{AlertKind, AppState};
use crate::submission::{
    SimulatedTransport, SubmissionController, SubmissionOutcome, SubmitError, SubmitTransport,
};
use crate::validation;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Submission lifecycle for the contact form
    pub submission: SubmissionController,
    /// Where submissions are addressed
    destination: String,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create an App backed by the simulated transport described by `config`
    pub fn new(config: &FormConfig) -> Self {
        let transport =
            SimulatedTransport::new(config.submit_delay()).failing(config.simulate_failure());
        tracing::debug!(
            latency_ms = transport.latency().as_millis() as u64,
            fail = config.simulate_failure(),
            "Using simulated transport"
        );
        Self::with_transport(Arc::new(transport), config.destination())
    }

    /// Create an App with an explicit transport
    pub fn with_transport(transport: Arc<dyn SubmitTransport>, destination: &str) -> Self {
        Self {
            state: AppState::default(),
            submission: SubmissionController::new(transport),
            destination: destination.to_string(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Ctrl+C twice quits, even over an alert
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if self.state.register_ctrl_c(Instant::now()) {
                self.quit = true;
            } else {
                self.state.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
            return Ok(());
        }

        // Handle alert dismissal first (modal)
        if self.state.has_alert() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_alert();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let on_submit_button = self.state.form.is_submit_button_active();
        let form = &mut self.state.form;

        match key.code {
            // Ctrl+S everywhere, Cmd+S as well on macOS
            KeyCode::Char('s')
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | crate::platform::SUBMIT_MODIFIER) =>
            {
                self.try_submit();
            }
            KeyCode::Tab => form.focus_next(),
            KeyCode::BackTab => form.focus_prev(),
            KeyCode::Enter if on_submit_button => self.try_submit(),
            KeyCode::Enter => {
                // Enter in the message field adds a newline, elsewhere it advances
                if form.active_field_name().is_some_and(|f| f.is_multiline()) {
                    form.input_char('\n');
                } else {
                    form.focus_next();
                }
            }
            KeyCode::Esc => {
                form.reset();
                self.submission.clear_outcome();
                self.state.status_message = Some("Form cleared".to_string());
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                form.input_char(ch);
            }
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and, when valid, start a submission
    pub fn try_submit(&mut self) {
        let form = &mut self.state.form;
        form.touch_all();
        let values = form.values();

        if !validation::is_valid(&values) {
            let errors = form.errors();
            let count = errors.len();
            if let Some(first) = errors.first_invalid() {
                form.focus(first);
            }
            tracing::debug!(invalid_fields = count, "Submit suppressed by validation");
            self.state.status_message = Some(format!(
                "Please fix {count} field{}",
                if count == 1 { "" } else { "s" }
            ));
            return;
        }

        match self.submission.submit(&self.destination, &values) {
            Ok(attempt) => {
                tracing::debug!(%attempt, "Submission started");
                self.state.status_message = Some("Submitting...".to_string());
            }
            Err(SubmitError::AlreadyPending) => {
                self.state.status_message =
                    Some("A submission is already in progress".to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, "Could not start submission");
                self.state
                    .push_alert(AlertKind::Error, SubmissionOutcome::failure().message());
            }
        }
    }

    /// Apply a finished submission, if any. Called once per event-loop tick.
    pub fn poll_submission(&mut self) {
        if let Some(outcome) = self.submission.poll_resolution() {
            self.observe_outcome(outcome);
        }
    }

    /// React to a resolved submission: success resets the form, failure
    /// keeps the values so the user can retry
    fn observe_outcome(&mut self, outcome: SubmissionOutcome) {
        self.state.status_message = None;
        match outcome {
            SubmissionOutcome::Success { message } => {
                self.state.form.reset();
                self.state.push_alert(AlertKind::Success, message);
            }
            SubmissionOutcome::Failure { message } => {
                self.state.push_alert(AlertKind::Error, message);
            }
        }
    }
}
