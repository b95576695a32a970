//! Contact page rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::Form;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the contact form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.contact;

    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = (0..form.field_count())
        .filter_map(|idx| form.get_field(idx))
        .map(|field| Constraint::Length(field_height(field)))
        .collect();
    constraints.push(Constraint::Min(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for idx in 0..form.field_count() {
        if let Some(field) = form.get_field(idx) {
            let is_active = form.active_field() == idx;
            draw_field(frame, chunks[idx], field, is_active, 0);
        }
    }

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(": subject  "),
        Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": send  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": menu"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[form.field_count()]);
}
