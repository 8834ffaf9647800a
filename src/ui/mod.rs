//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    forms::draw_contact_form(frame, main_area, app);

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Alerts are drawn last so they sit on top of the form
    if let Some(alert) = app.state.current_alert() {
        components::render_alert_dialog(frame, alert);
    }
}
