//! Layout components (content area, status bar)

use crate::app::App;
use crate::submission::{SubmissionOutcome, SubmissionState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form is allowed to grow
const MAX_FORM_WIDTH: u16 = 80;

/// Create the main layout: centered content column above a status bar
pub fn create_layout(area: Rect) -> Rect {
    // Reserve bottom line for status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = chunks[0];
    let width = content.width.min(MAX_FORM_WIDTH);
    Rect {
        x: content.x + (content.width - width) / 2,
        width,
        ..content
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![submission_indicator(app.submission.state())];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    } else if let (Some(outcome), Some(at)) =
        (app.submission.outcome(), app.submission.state().resolved_at)
    {
        let verb = if outcome.is_success() { "sent" } else { "failed" };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("last submission {verb} at {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Dot + label describing where the submission lifecycle is
fn submission_indicator(state: &SubmissionState) -> Span<'static> {
    if state.is_idle() {
        return Span::styled(" ○ ready ", Style::default().fg(Color::Gray));
    }
    if state.is_pending {
        return Span::styled(" ◌ sending ", Style::default().fg(Color::Yellow));
    }
    match &state.outcome {
        Some(SubmissionOutcome::Success { .. }) => {
            Span::styled(" ● sent ", Style::default().fg(Color::Green))
        }
        _ => Span::styled(" ● failed ", Style::default().fg(Color::Red)),
    }
}
