//! Layout components (header, menu, back-to-top control, status bar)
//!
//! Area functions here are shared with mouse handling in `app`, so a click
//! lands on exactly what was drawn.

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::BACK_TO_TOP_SHORTCUT;
use crate::state::content::{SITE_TAGLINE, SITE_TITLE};
use crate::state::navigation::is_link_active;
use crate::state::{HomeFocus, Page};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Pixels per terminal row, used to express scroll offsets in page units
pub const ROW_PX: u32 = 16;
/// Pixels per terminal column, used for the mobile breakpoint
pub const COL_PX: u32 = 8;
/// Header height in rows
pub const HEADER_HEIGHT: u16 = 3;

const MENU_ICON_WIDTH: u16 = 5;
const MENU_WIDTH: u16 = 26;
const BACK_TO_TOP_WIDTH: u16 = 5;

/// Screen regions of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAreas {
    pub header: Rect,
    pub main: Rect,
    pub status: Rect,
}

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> PageAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    PageAreas {
        header: chunks[0],
        main: chunks[1],
        status: chunks[2],
    }
}

/// Header height in page pixels, used as the anchor scroll offset
pub fn header_height_px() -> u32 {
    u32::from(HEADER_HEIGHT) * ROW_PX
}

/// Viewport width in page pixels
pub fn viewport_width_px(columns: u16) -> u32 {
    u32::from(columns) * COL_PX
}

/// Menu toggle button at the right end of the header
pub fn menu_icon_area(header: Rect) -> Rect {
    let width = MENU_ICON_WIDTH.min(header.width);
    Rect {
        x: header.x + header.width - width,
        y: header.y,
        width,
        height: BUTTON_HEIGHT.min(header.height),
    }
}

/// Dropdown menu below the header, right aligned
pub fn menu_area(areas: &PageAreas, item_count: usize) -> Rect {
    let width = MENU_WIDTH.min(areas.main.width);
    let height = (item_count as u16 + 2).min(areas.main.height);
    Rect {
        x: areas.main.x + areas.main.width - width,
        y: areas.main.y,
        width,
        height,
    }
}

/// Menu entry under a screen position
pub fn menu_item_at(menu: Rect, item_count: usize, column: u16, row: u16) -> Option<usize> {
    if !menu.contains(Position::new(column, row)) || row <= menu.y {
        return None;
    }
    let index = usize::from(row - menu.y - 1);
    (index < item_count).then_some(index)
}

/// Back-to-top control in the bottom right corner of the content area
pub fn back_to_top_area(main: Rect) -> Rect {
    let width = BACK_TO_TOP_WIDTH.min(main.width);
    let height = BUTTON_HEIGHT.min(main.height);
    Rect {
        x: main.x + main.width - width,
        y: main.y + main.height - height,
        width,
        height,
    }
}

/// Draw the site header with inline links and the menu toggle
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let nav = &app.state.nav;
    let scrolled = nav.is_header_scrolled();

    // Compact style once the page has scrolled
    let (border_style, title_line) = if scrolled {
        (
            Style::default().fg(Color::Cyan),
            Line::from(Span::styled(
                SITE_TITLE,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Line::from(vec![
                Span::styled(SITE_TITLE, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {SITE_TAGLINE}"), Style::default().fg(Color::DarkGray)),
            ]),
        )
    };

    let current_path = app.state.current_page.path();
    let mut links: Vec<Span> = Vec::new();
    for page in Page::NAV {
        let style = if is_link_active(current_path, page.link_path()) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        links.push(Span::styled(page.label(), style));
        links.push(Span::raw("  "));
    }
    let links_width: u16 = links.iter().map(|s| s.width() as u16).sum();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(links_width),
            Constraint::Length(MENU_ICON_WIDTH),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(title_line), chunks[0]);
    frame.render_widget(Paragraph::new(Line::from(links)), chunks[1]);

    render_button(frame, menu_icon_area(area), nav.menu_icon(), nav.is_menu_open(), true);
}

/// Draw the dropdown menu when it is open
pub fn draw_menu(frame: &mut Frame, areas: &PageAreas, app: &App) {
    if !app.state.nav.is_menu_open() {
        return;
    }
    let items = app.state.menu_items();
    let area = menu_area(areas, items.len());

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let style = if idx == app.state.menu_selection {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!(" {} ", item.label()), style))
        })
        .collect();

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the back-to-top control when the page is scrolled far enough
pub fn draw_back_to_top(frame: &mut Frame, main: Rect, app: &App) {
    if !app.state.nav.is_back_to_top_visible() {
        return;
    }
    let area = back_to_top_area(main);
    frame.render_widget(Clear, area);
    render_button(frame, area, "↑", false, true);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_page_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if app.state.nav.is_back_to_top_visible() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{BACK_TO_TOP_SHORTCUT}:top"),
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Location and quit hint on the right
    let right = format!(" {}  ^C:quit ", app.state.current_page.path());
    let width = (right.len() as u16).min(area.width);
    let right_area = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: 1,
    };
    let right_widget =
        Paragraph::new(right).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(right_widget, right_area);
}

/// Get keyboard hints for the current page
fn get_page_hints(app: &App) -> String {
    if app.state.nav.is_menu_open() {
        return "↑/↓:select  Enter:go  Esc:close".to_string();
    }
    match app.state.current_page {
        Page::Home => match app.state.home_focus {
            HomeFocus::HeroTabs => {
                "←/→:tab  Enter:open  1-9:jump  Tab:newsletter  PgUp/PgDn:scroll  Esc:menu"
                    .to_string()
            }
            HomeFocus::Newsletter => "Type email  Enter:subscribe  Tab:tabs  Esc:menu".to_string(),
        },
        Page::Membership if app.state.wizard.is_submitted() => {
            "Enter:home  Esc:menu".to_string()
        }
        Page::Membership | Page::Contact => "Tab:next field  Esc:menu".to_string(),
    }
}
