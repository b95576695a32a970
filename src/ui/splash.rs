//! Startup banner rendering

use crate::state::content::SITE_TAGLINE;
use crate::state::{SplashPhase, SplashState};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Banner width in columns
const LOGO_WIDTH: u16 = 34;

/// Build the HURF lettering with a tagline underneath
fn build_banner_text() -> Vec<Line<'static>> {
    let style = Style::default().fg(Color::Cyan);
    vec![
        Line::from(Span::styled(
            " ██╗  ██╗██╗   ██╗██████╗ ███████╗",
            style,
        )),
        Line::from(Span::styled(
            " ██║  ██║██║   ██║██╔══██╗██╔════╝",
            style,
        )),
        Line::from(Span::styled(
            " ███████║██║   ██║██████╔╝█████╗  ",
            style,
        )),
        Line::from(Span::styled(
            " ██╔══██║██║   ██║██╔══██╗██╔══╝  ",
            style,
        )),
        Line::from(Span::styled(
            " ██║  ██║╚██████╔╝██║  ██║██║     ",
            style,
        )),
        Line::from(Span::styled(
            " ╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═╝╚═╝     ",
            style,
        )),
        Line::default(),
        Line::from(Span::styled(SITE_TAGLINE, Style::default().fg(Color::Gray))),
    ]
}

/// Draw the startup banner
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let lines = build_banner_text();

    let logo_height = lines.len() as u16;
    let logo_width = LOGO_WIDTH.max(SITE_TAGLINE.len() as u16);

    // Center position with scroll offset (can go above the screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - splash_state.offset_rows(area.height) as i32;
    let x = area.x + (area.width.saturating_sub(logo_width)) / 2;

    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if y_pos < 0 { area.y } else { y_pos as u16 };

    let logo_area = Rect {
        x,
        y: render_y,
        width: logo_width.min(area.width),
        height: visible_height.min(area.height.saturating_sub(render_y - area.y)),
    };
    frame.render_widget(Paragraph::new(visible_lines), logo_area);

    if splash_state.phase() == SplashPhase::Holding && area.height >= 2 {
        let hint = "Press any key to skip";
        let hint_area = Rect {
            x: area.x + (area.width.saturating_sub(hint.len() as u16)) / 2,
            y: area.y + area.height - 2,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        let hint_line = Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        frame.render_widget(Paragraph::new(hint_line), hint_area);
    }
}
