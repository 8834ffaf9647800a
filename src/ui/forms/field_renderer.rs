//! Field rendering utilities for forms

use crate::state::FormField;
use crate::validation::FieldError;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by the inline error line under a field
pub const ERROR_LINE_HEIGHT: u16 = 1;

/// Draw a form field with its inline error line.
///
/// `error` is whatever the form decided to show (already gated on touched).
/// The last row of `area` is reserved for the error message.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&FieldError>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(ERROR_LINE_HEIGHT)])
        .split(area);

    let border_color = match (is_active, error.is_some()) {
        (_, true) => Color::Red,
        (true, false) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let cursor = if is_active { "▌" } else { "" };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::styled(l.to_string(), text_style))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, text_style),
            cursor_span,
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    if let Some(error) = error {
        let message = Paragraph::new(Line::from(Span::styled(
            format!(" {}", error.message),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(message, chunks[1]);
    }
}

/// Draw a one-line keyboard help text
pub fn draw_help_text(frame: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (key, action) in entries {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;
    use crate::validation::validate_field;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(field: &FormField, is_active: bool, error: Option<&FieldError>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 4)).unwrap();
        terminal
            .draw(|frame| draw_field(frame, frame.area(), field, is_active, error))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_label_and_value_are_drawn() {
        let field = FormField::with_value(FieldName::Email, "a@b.com");
        let text = render(&field, false, None);
        assert!(text.contains("Email Address"));
        assert!(text.contains("a@b.com"));
    }

    #[test]
    fn test_error_line_is_drawn() {
        let field = FormField::with_value(FieldName::Phone, "123");
        let error = validate_field(FieldName::Phone, "123");
        let text = render(&field, false, error.as_ref());
        assert!(text.contains("Invalid phone!"));
    }

    #[test]
    fn test_password_is_masked() {
        let field = FormField::with_value(FieldName::Password, "Abcdef1!");
        let text = render(&field, true, None);
        assert!(!text.contains("Abcdef1!"));
        assert!(text.contains("••••••••"));
    }

    #[test]
    fn test_help_text() {
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|frame| draw_help_text(frame, frame.area(), &[("Tab", "next")]))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Tab: next"));
    }
}
