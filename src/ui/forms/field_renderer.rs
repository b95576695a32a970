//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs, borders included
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline() {
        5
    } else {
        3
    }
}

/// Build a field widget so it can be drawn to any buffer.
/// `choice_cursor` highlights one box of a focused checkbox group.
pub fn field_widget(field: &FormField, is_active: bool, choice_cursor: usize) -> Paragraph<'static> {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active && field.accepts_typing() { "▌" } else { "" };

    let content = match &field.kind {
        FieldKind::Text { multiline: true } => {
            let mut lines: Vec<Line> = field
                .as_text()
                .split('\n')
                .map(|l| Line::from(Span::styled(l.to_string(), style)))
                .collect();
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
            Paragraph::new(lines)
        }
        FieldKind::Choices { options } => {
            let spans: Vec<Span> = options
                .iter()
                .enumerate()
                .flat_map(|(i, option)| {
                    let mark = if field.is_checked(i) { "x" } else { " " };
                    let item_style = if is_active && i == choice_cursor {
                        style.add_modifier(Modifier::REVERSED)
                    } else {
                        style
                    };
                    [
                        Span::styled(format!("[{mark}] {option}"), item_style),
                        Span::raw("  "),
                    ]
                })
                .collect();
            Paragraph::new(Line::from(spans))
        }
        FieldKind::Select { .. } => {
            let arrows = if is_active { " ◂▸" } else { "" };
            Paragraph::new(Line::from(vec![
                Span::styled(field.display_value(), style),
                Span::styled(arrows, Style::default().fg(Color::DarkGray)),
            ]))
        }
        _ => {
            let display_value = field.display_value();
            let display_str = if display_value.is_empty() && !is_active {
                "(empty)".to_string()
            } else {
                display_value
            };
            Paragraph::new(Line::from(vec![
                Span::styled(display_str, style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ]))
        }
    };

    let marker = if field.required { " *" } else { "" };
    let mut block = Block::default()
        .title(format!(" {}{} ", field.label, marker))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = &field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    content.wrap(Wrap { trim: false }).block(block)
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    choice_cursor: usize,
) {
    frame.render_widget(field_widget(field, is_active, choice_cursor), area);
}
