//! Home page: hero tabs over a scrolling document
//!
//! The whole document is rendered into an offscreen buffer, then the rows
//! under the current scroll offset are copied into the frame.

use super::components::{button_widget, BUTTON_HEIGHT};
use super::forms::field_widget;
use super::layout::ROW_PX;
use crate::app::App;
use crate::state::content::{
    self, Section, HERO_ROWS, HOME_DOCUMENT_ROWS, IMPACT_STATS, INITIATIVE_CARDS,
};
use crate::state::viewport::{LazyImage, RevealTarget};
use crate::state::{HomeFocus, TabRotator};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Frame,
};

const CARD_COUNT: usize = 3;

/// Hero region in document coordinates
pub fn hero_area(width: u16) -> Rect {
    Rect::new(0, 0, width, HERO_ROWS as u16)
}

/// Tab buttons in document coordinates, one per tab across the hero
pub fn tab_button_areas(width: u16, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let row = Rect {
        x: 1,
        y: 1,
        width: width.saturating_sub(2),
        height: BUTTON_HEIGHT,
    };
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count as u32)))
        .split(row)
        .to_vec()
}

/// Tab whose button covers a document position
pub fn tab_at(width: u16, count: usize, column: u16, row: u16) -> Option<usize> {
    tab_button_areas(width, count)
        .iter()
        .position(|rect| rect.contains(Position::new(column, row)))
}

/// Draw the visible window of the home document into `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let document = render_document(area.width, app);
    let offset = (app.state.nav.scroll_offset() / ROW_PX) as u16;

    let out = frame.buffer_mut();
    for y in 0..area.height {
        let doc_y = offset.saturating_add(y);
        if doc_y >= document.area.height {
            break;
        }
        for x in 0..area.width {
            if let (Some(src), Some(dst)) = (
                document.cell((x, doc_y)),
                out.cell_mut((area.x + x, area.y + y)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

/// Render a widget clipped to the buffer
fn render_clipped<W: Widget>(buf: &mut Buffer, widget: W, rect: Rect) {
    let rect = rect.intersection(buf.area);
    if rect.is_empty() {
        return;
    }
    widget.render(rect, buf);
}

fn render_document(width: u16, app: &App) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, HOME_DOCUMENT_ROWS as u16));

    if let Some(hero) = &app.state.hero {
        render_hero(&mut buf, width, hero, app.state.hovering_hero, app.state.home_focus);
    }

    for section in content::home_sections() {
        render_section(&mut buf, width, &section, app);
    }

    buf
}

fn render_hero(
    buf: &mut Buffer,
    width: u16,
    hero: &TabRotator,
    hovering: bool,
    focus: HomeFocus,
) {
    let area = hero_area(width);
    let (border_color, mode) = if hovering {
        (Color::Yellow, "‖ hover")
    } else if !hero.is_auto_enabled() {
        (Color::Yellow, "‖ paused")
    } else if hero.is_rotating() {
        (Color::Cyan, "● auto")
    } else {
        (Color::DarkGray, "○ idle")
    };
    let status = format!(
        " {}/{} {mode} ",
        hero.current_index() + 1,
        hero.tabs().len()
    );

    let block = Block::default()
        .title(" Welcome ")
        .title_top(Line::from(status).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    render_clipped(buf, block, area);

    for (idx, rect) in tab_button_areas(width, hero.tabs().len()).into_iter().enumerate() {
        let tab = &hero.tabs()[idx];
        let selected = hero.is_active(idx);
        let focused = focus == HomeFocus::HeroTabs && hero.focused_index() == idx;
        let label = if focused {
            format!("{} {}", idx + 1, tab.label)
        } else {
            tab.label.clone()
        };
        render_clipped(buf, button_widget(&label, selected, true), rect);
    }

    let content_area = Rect {
        x: inner.x + 1,
        y: inner.y + BUTTON_HEIGHT + 1,
        width: inner.width.saturating_sub(2),
        height: inner.height.saturating_sub(BUTTON_HEIGHT + 1),
    };
    let panel = &hero.current_tab().content;
    let mut lines = vec![
        Line::from(Span::styled(
            panel.heading.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(panel.body.clone()),
    ];
    if let Some(cta) = &panel.call_to_action {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("→ {cta}"),
            Style::default().fg(Color::Green),
        )));
    }
    render_clipped(
        buf,
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        content_area,
    );
}

fn section_rect(width: u16, section: &Section) -> Rect {
    Rect::new(0, section.bounds.top as u16, width, section.bounds.height as u16)
}

/// Content band of a section, below its title rule
fn section_band(width: u16, section: &Section) -> Rect {
    let area = section_rect(width, section);
    Rect {
        x: area.x + 1,
        y: area.y + 2,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Newsletter email input and subscribe button, in document coordinates
pub fn newsletter_areas(width: u16) -> Option<(Rect, Rect)> {
    let section = content::home_sections()
        .into_iter()
        .find(|s| s.id == "newsletter")?;
    let band = section_band(width, &section);
    let field = Rect {
        x: band.x,
        y: band.y + 2,
        width: band.width.min(50),
        height: 3,
    };
    let button = Rect {
        x: field.x + field.width + 1,
        width: 14,
        ..field
    };
    Some((field, button))
}

fn thirds(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); CARD_COUNT])
        .split(area)
        .to_vec()
}

fn render_section(buf: &mut Buffer, width: u16, section: &Section, app: &App) {
    let area = section_rect(width, section);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", section.title),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    render_clipped(buf, block, area);

    let band = section_band(width, section);

    match section.id {
        "initiatives" => {
            let cards = INITIATIVE_CARDS
                .iter()
                .map(|(title, text)| (title.to_string(), text.to_string()));
            render_cards(buf, band, cards, app.state.reveals.get(..CARD_COUNT));
        }
        "events" => render_images(buf, band, &app.state.images),
        "impact" => {
            let cards = IMPACT_STATS
                .iter()
                .map(|(figure, label)| (figure.to_string(), label.to_string()));
            render_cards(
                buf,
                band,
                cards,
                app.state.reveals.get(CARD_COUNT..CARD_COUNT * 2),
            );
        }
        "newsletter" => render_newsletter(buf, band, app),
        _ => {}
    }
}

/// Cards stay dim until their reveal target has been seen
fn render_cards(
    buf: &mut Buffer,
    band: Rect,
    cards: impl Iterator<Item = (String, String)>,
    reveals: Option<&[RevealTarget]>,
) {
    for (idx, ((title, text), rect)) in cards.zip(thirds(band)).enumerate() {
        let revealed = reveals
            .and_then(|r| r.get(idx))
            .is_some_and(RevealTarget::is_revealed);
        let (border, body) = if revealed {
            (Style::default().fg(Color::Cyan), Style::default())
        } else {
            (
                Style::default().fg(Color::Black),
                Style::default().fg(Color::DarkGray),
            )
        };
        let block = Block::default()
            .title(Span::styled(format!(" {title} "), border.add_modifier(Modifier::BOLD)))
            .borders(Borders::ALL)
            .border_style(border);
        let paragraph = Paragraph::new(text)
            .style(body)
            .wrap(Wrap { trim: true })
            .block(block);
        render_clipped(buf, paragraph, rect);
    }
}

fn render_images(buf: &mut Buffer, band: Rect, images: &[LazyImage]) {
    for (image, rect) in images.iter().zip(thirds(band)) {
        let lines = if image.is_loaded() {
            vec![
                Line::from(Span::styled("▣ photo", Style::default().fg(Color::Magenta))),
                Line::from(Span::styled(
                    image.src.clone().unwrap_or_default(),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        } else {
            vec![Line::from(Span::styled(
                "loading…",
                Style::default().fg(Color::DarkGray),
            ))]
        };
        let block = Block::default()
            .title(format!(" {} ", image.alt))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        render_clipped(
            buf,
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
            rect,
        );
    }
}

fn render_newsletter(buf: &mut Buffer, band: Rect, app: &App) {
    let is_active = app.state.home_focus == HomeFocus::Newsletter;
    let intro = Paragraph::new("Chapter news and event invites, once a month.")
        .style(Style::default().fg(Color::Gray));
    render_clipped(buf, intro, Rect { height: 1, ..band });

    let Some((field_rect, button_rect)) = newsletter_areas(buf.area.width) else {
        return;
    };
    render_clipped(
        buf,
        field_widget(&app.state.newsletter.email, is_active, 0),
        field_rect,
    );
    render_clipped(buf, button_widget("Subscribe", is_active, true), button_rect);
}
