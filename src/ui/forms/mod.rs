//! Form rendering

mod field_renderer;

use crate::app::App;
use field_renderer::{draw_field, field_height};
use formwork::{Appearance, Axis, FieldGroup, FormEntry};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Terminal colors resolved from an [`Appearance`]
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub label: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
    pub focus: Color,
}

fn parse_color(name: &str, fallback: Color) -> Color {
    name.parse().unwrap_or(fallback)
}

impl From<&Appearance> for Palette {
    fn from(appearance: &Appearance) -> Self {
        Self {
            text: parse_color(&appearance.text_color, Color::White),
            label: parse_color(&appearance.label_color, Color::Gray),
            error: parse_color(&appearance.error_color, Color::Red),
            success: parse_color(&appearance.success_color, Color::Green),
            border: parse_color(&appearance.border_color, Color::DarkGray),
            focus: parse_color(&appearance.focus_color, Color::Cyan),
        }
    }
}

fn entry_height(entry: &FormEntry) -> u16 {
    match entry {
        FormEntry::Field(field) => field_height(field),
        FormEntry::Group(group) => {
            let heights = group.fields.iter().map(field_height);
            match group.axis {
                Axis::Horizontal => heights.max().unwrap_or(0),
                Axis::Vertical => heights.sum(),
            }
        }
    }
}

/// Draw the whole form inside a titled block
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let palette = Palette::from(&form.config().appearance);

    let block = Block::default()
        .title(format!(" {} ", form.title.as_deref().unwrap_or("Form")))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = form
        .entries()
        .iter()
        .map(|entry| Constraint::Length(entry_height(entry)))
        .collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut index = 0;
    for (entry, row) in form.entries().iter().zip(rows.iter()) {
        match entry {
            FormEntry::Field(field) => {
                let is_active = form.focused() == Some(index);
                let blank = app.blank_errors.contains(&index);
                draw_field(frame, *row, field, is_active, blank, &palette);
                index += 1;
            }
            FormEntry::Group(group) => {
                draw_group(frame, *row, group, index, app, &palette);
                index += group.len();
            }
        }
    }
}

fn draw_group(
    frame: &mut Frame,
    area: Rect,
    group: &FieldGroup,
    first_index: usize,
    app: &App,
    palette: &Palette,
) {
    if group.is_empty() {
        return;
    }

    let (direction, constraints): (Direction, Vec<Constraint>) = match group.axis {
        Axis::Horizontal => (
            Direction::Horizontal,
            group
                .fields
                .iter()
                .map(|_| Constraint::Ratio(1, group.len() as u32))
                .collect(),
        ),
        Axis::Vertical => (
            Direction::Vertical,
            group
                .fields
                .iter()
                .map(|f| Constraint::Length(field_height(f)))
                .collect(),
        ),
    };
    let cells = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);

    for (offset, (field, cell)) in group.fields.iter().zip(cells.iter()).enumerate() {
        let index = first_index + offset;
        let is_active = app.form.focused() == Some(index);
        let blank = app.blank_errors.contains(&index);
        draw_field(frame, *cell, field, is_active, blank, palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork::FormField;

    #[test]
    fn test_palette_from_default_appearance() {
        let palette = Palette::from(&Appearance::default());
        assert_eq!(palette.error, Color::Red);
        assert_eq!(palette.focus, Color::Cyan);
    }

    #[test]
    fn test_palette_falls_back_on_unknown_color() {
        let appearance = Appearance {
            error_color: "not-a-color".to_string(),
            ..Default::default()
        };
        assert_eq!(Palette::from(&appearance).error, Color::Red);
    }

    #[test]
    fn test_horizontal_group_height_is_tallest_field() {
        let group = FieldGroup::horizontal(vec![
            FormField::builder().build(),
            FormField::builder().multiline(true).build(),
        ]);
        assert_eq!(entry_height(&FormEntry::Group(group)), 7);
    }

    #[test]
    fn test_vertical_group_height_is_sum() {
        let group = FieldGroup::vertical(vec![FormField::builder().build(); 2]);
        assert_eq!(entry_height(&FormEntry::Group(group)), 8);
    }
}
