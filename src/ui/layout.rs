//! Screen layout and status bar

use super::forms::Palette;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

fn key_hints() -> String {
    format!("Tab/↓:next  Shift+Tab/↑:prev  ←/→:choose  Enter:return  {SUBMIT_SHORTCUT}:submit  Esc:quit")
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = Palette::from(&app.form.config().appearance);
    let mut spans = vec![Span::raw(format!(" {} ", key_hints()))];

    if let Some(message) = &app.status_message {
        let color = if message.starts_with("Submitted") {
            palette.success
        } else {
            palette.error
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(message, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
