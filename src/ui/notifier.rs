//! Floating notices drawn over the page

use crate::state::notifier::Notice;
use crate::state::NoticeKind;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

const NOTICE_HEIGHT: u16 = 3;
const MAX_NOTICE_WIDTH: u16 = 48;

fn kind_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Error => Color::Red,
        NoticeKind::Info => Color::Blue,
    }
}

/// Area for the notice at `index` in the stack, slid right by `progress`
fn notice_area(area: Rect, index: usize, message: &str, progress: f32) -> Option<Rect> {
    let y = area.y + index as u16 * NOTICE_HEIGHT;
    if y + NOTICE_HEIGHT > area.y + area.height {
        return None;
    }
    let width = (message.chars().count() as u16 + 4)
        .min(MAX_NOTICE_WIDTH)
        .min(area.width);
    let slide = (progress * f32::from(width)) as u16;
    let x = area.x + area.width - width + slide;
    let visible = width.saturating_sub(slide);
    (visible > 0).then_some(Rect {
        x,
        y,
        width: visible,
        height: NOTICE_HEIGHT,
    })
}

/// Draw every live notice, newest at the bottom, in the top right of `area`
pub fn draw(frame: &mut Frame, area: Rect, notices: &[Notice], now: Instant) {
    for (idx, notice) in notices.iter().enumerate() {
        let progress = notice.exit_progress(now);
        let Some(rect) = notice_area(area, idx, &notice.message, progress) else {
            continue;
        };

        // Fade to gray while leaving
        let color = if progress > 0.5 {
            Color::DarkGray
        } else {
            kind_color(notice.kind)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let paragraph = Paragraph::new(notice.message.as_str())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(Clear, rect);
        frame.render_widget(paragraph, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notices_stack_downward() {
        let area = Rect::new(0, 3, 80, 20);
        let first = notice_area(area, 0, "hello", 0.0).unwrap();
        let second = notice_area(area, 1, "hello", 0.0).unwrap();
        assert_eq!(first.y, 3);
        assert_eq!(second.y, 3 + NOTICE_HEIGHT);
        assert_eq!(first.x + first.width, 80);
    }

    #[test]
    fn test_exit_slides_right() {
        let area = Rect::new(0, 0, 80, 20);
        let still = notice_area(area, 0, "hello", 0.0).unwrap();
        let moving = notice_area(area, 0, "hello", 0.5).unwrap();
        assert!(moving.x > still.x);
        assert!(notice_area(area, 0, "hello", 1.0).is_none());
    }

    #[test]
    fn test_overflowing_notices_are_skipped() {
        let area = Rect::new(0, 0, 80, 4);
        assert!(notice_area(area, 1, "hello", 0.0).is_none());
    }
}
