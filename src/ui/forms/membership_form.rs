//! Membership wizard rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::platform::{NEXT_STEP_SHORTCUT, PREV_STEP_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Form, FormWizard, ProgressMark};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the membership application page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.state.wizard;
    if wizard.is_submitted() {
        draw_success(frame, area);
        return;
    }

    let step_label = wizard
        .current_step()
        .map(|n| format!(" Step {n} of {} ", wizard.step_count()))
        .unwrap_or_default();
    let block = Block::default()
        .title(" Membership Application ")
        .title_top(Line::from(step_label).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(step) = wizard.current() else {
        return;
    };

    let mut constraints = vec![
        Constraint::Length(1), // Progress
        Constraint::Length(1), // Spacer
    ];
    constraints.extend(
        step.fields
            .iter()
            .map(|field| Constraint::Length(field_height(field))),
    );
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Step buttons
    constraints.push(Constraint::Min(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    frame.render_widget(Paragraph::new(progress_line(wizard)), chunks[0]);

    for (idx, field) in step.fields.iter().enumerate() {
        let is_active = wizard.active_field() == idx;
        draw_field(frame, chunks[idx + 2], field, is_active, app.state.choice_cursor);
    }

    let buttons_area = chunks[step.fields.len() + 2];
    draw_step_buttons(frame, buttons_area, wizard);

    let help_area = chunks[step.fields.len() + 3];
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Space", Style::default().fg(Color::Cyan)),
        Span::raw(": toggle  "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(": choose  "),
        Span::styled(NEXT_STEP_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": next step  "),
        Span::styled(PREV_STEP_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": back  "),
        Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": submit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

/// One marker per step: completed, active or pending
fn progress_line(wizard: &FormWizard) -> Line<'static> {
    let Some(marks) = wizard.progress() else {
        return Line::default();
    };
    let mut spans = Vec::new();
    for (idx, mark) in marks.iter().enumerate() {
        let number = idx + 1;
        let title = wizard
            .step(number)
            .map(|s| s.title.clone())
            .unwrap_or_default();
        let (text, style) = match mark {
            ProgressMark::Completed => (format!("✓ {title}"), Style::default().fg(Color::Green)),
            ProgressMark::Active => (
                format!("{number} {title}"),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            ProgressMark::Pending => (format!("{number} {title}"), Style::default().fg(Color::DarkGray)),
        };
        let style = if wizard.is_step_active(number) {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        };
        if idx > 0 {
            spans.push(Span::styled(" ─── ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(text, style));
    }
    Line::from(spans)
}

fn draw_step_buttons(frame: &mut Frame, area: Rect, wizard: &FormWizard) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(0),
            Constraint::Length(14),
        ])
        .split(area);

    let has_previous = wizard.current_step().is_some_and(|n| n > 1);
    render_button(frame, chunks[0], "Previous", false, has_previous);

    let forward = if wizard.is_final_step() { "Submit" } else { "Next" };
    render_button(frame, chunks[2], forward, true, true);
}

fn draw_success(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Membership Application ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "✓ Application received",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from("Thank you for applying. A chapter volunteer will contact you soon."),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to return home",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}
