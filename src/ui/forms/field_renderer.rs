//! Field rendering utilities for forms

use super::Palette;
use formwork::{FieldKind, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by the input box of a field
pub fn input_height(field: &FormField) -> u16 {
    if field.multiline {
        6
    } else {
        3
    }
}

/// Rows taken by a field including its error line
pub fn field_height(field: &FormField) -> u16 {
    input_height(field) + 1
}

/// Draw a form field with its error line underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    blank_error: bool,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(input_height(field)), Constraint::Length(1)])
        .split(area);

    let has_error = field.error_message().is_some() || blank_error;
    let border_style = if is_active {
        Style::default().fg(palette.focus)
    } else if has_error {
        Style::default().fg(palette.error)
    } else {
        Style::default().fg(palette.border)
    };

    let label = field.label.as_deref().unwrap_or("");
    let display_value = field.display_value();
    let cursor = if is_active && !field.is_picker() {
        "▌"
    } else {
        ""
    };

    let value_span = if display_value.is_empty() && field.kind == FieldKind::Plain {
        // Plain fields use their label as placeholder
        Span::styled(
            label.to_string(),
            Style::default()
                .fg(palette.label)
                .add_modifier(Modifier::ITALIC),
        )
    } else if field.is_picker() {
        Span::styled(
            format!("◀ {display_value} ▶"),
            Style::default().fg(palette.text),
        )
    } else {
        Span::styled(display_value.clone(), Style::default().fg(palette.text))
    };

    let content = if field.multiline && !display_value.is_empty() {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(palette.text))))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(palette.focus)));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            value_span,
            Span::styled(cursor, Style::default().fg(palette.focus)),
        ]))
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    if field.kind == FieldKind::Labeled {
        block = block.title(Span::styled(
            format!(" {label} "),
            Style::default().fg(palette.label),
        ));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    if let Some(message) = field.error_message() {
        let error = Paragraph::new(Span::styled(
            format!(" {message}"),
            Style::default().fg(palette.error),
        ));
        frame.render_widget(error, chunks[1]);
    }
}
