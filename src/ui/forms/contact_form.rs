//! Contact form rendering

use super::field_renderer::{draw_field, draw_help_text, ERROR_LINE_HEIGHT};
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Single-line field box plus its error line
const FIELD_HEIGHT: u16 = 3 + ERROR_LINE_HEIGHT;

/// Draw the contact form: six fields, submit button, help line
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" Submission Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // Name
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Length(FIELD_HEIGHT), // Phone
            Constraint::Length(FIELD_HEIGHT), // Address
            Constraint::Length(FIELD_HEIGHT), // Password
            Constraint::Min(4),               // Comment
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),            // Help text
        ])
        .margin(1)
        .split(area);

    let active = form.active_field_name();
    for (index, name) in FieldName::ALL.into_iter().enumerate() {
        draw_field(
            frame,
            chunks[index],
            form.field(name),
            active == Some(name),
            form.visible_error(name),
        );
    }

    let is_pending = app.submission.is_pending();
    let label = if is_pending { "Submitting..." } else { "Submit" };
    render_action_button(
        frame,
        chunks[6],
        label,
        form.is_submit_button_active(),
        !is_pending,
        Some(Color::Magenta),
    );

    draw_help_text(
        frame,
        chunks[7],
        &[
            ("Tab", "next field"),
            (crate::platform::SUBMIT_SHORTCUT, "submit"),
            ("Esc", "clear"),
        ],
    );
}
