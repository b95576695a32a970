//! Global navigation chrome: mobile menu, scroll effects and anchor scrolling

use std::time::{Duration, Instant};

/// Scroll offset past which the header switches to its compact style
pub const HEADER_SCROLL_THRESHOLD: u32 = 50;
/// Scroll offset past which the back-to-top control appears
pub const BACK_TO_TOP_THRESHOLD: u32 = 300;
/// Viewport width at or below which nav link clicks collapse the menu
pub const MOBILE_BREAKPOINT: u32 = 768;
/// Header height used when the real one is unknown
pub const DEFAULT_HEADER_HEIGHT: u32 = 80;
/// Duration of a smooth scroll
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(400);

const MENU_ICON_CLOSED: &str = "☰";
const MENU_ICON_OPEN: &str = "✕";

/// Threshold settings for the chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeThresholds {
    pub header_scrolled: u32,
    pub back_to_top: u32,
    pub mobile_breakpoint: u32,
}

impl Default for ChromeThresholds {
    fn default() -> Self {
        Self {
            header_scrolled: HEADER_SCROLL_THRESHOLD,
            back_to_top: BACK_TO_TOP_THRESHOLD,
            mobile_breakpoint: MOBILE_BREAKPOINT,
        }
    }
}

/// In-page anchor and its offset from the top of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub id: String,
    pub top: u32,
}

/// Eased scroll from one offset to another
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollAnimation {
    from: u32,
    to: u32,
    started: Instant,
}

impl ScrollAnimation {
    fn offset_at(&self, now: Instant) -> (u32, bool) {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= SMOOTH_SCROLL_DURATION {
            return (self.to, true);
        }
        let progress = elapsed.as_secs_f32() / SMOOTH_SCROLL_DURATION.as_secs_f32();
        let eased = simple_easing::cubic_out(progress);
        let from = self.from as f32;
        let offset = from + (self.to as f32 - from) * eased;
        (offset.round().max(0.0) as u32, false)
    }
}

/// Menu, header and scroll state shared by every page
#[derive(Debug, Clone, Default)]
pub struct NavigationChrome {
    menu_open: bool,
    header_scrolled: bool,
    back_to_top_visible: bool,
    scroll_offset: u32,
    animation: Option<ScrollAnimation>,
    thresholds: ChromeThresholds,
}

impl NavigationChrome {
    pub fn new(thresholds: ChromeThresholds) -> Self {
        Self {
            thresholds,
            ..Self::default()
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Toggle icon matching the menu state
    pub fn menu_icon(&self) -> &'static str {
        if self.menu_open {
            MENU_ICON_OPEN
        } else {
            MENU_ICON_CLOSED
        }
    }

    /// Accessibility expanded attribute matching the menu state
    pub fn aria_expanded(&self) -> &'static str {
        if self.menu_open {
            "true"
        } else {
            "false"
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Any click on the page. Clicks outside the menu and its toggle close it.
    pub fn document_click(&mut self, inside_menu: bool) {
        if !inside_menu && self.menu_open {
            self.close_menu();
        }
    }

    /// A nav link was followed. Collapses the menu on narrow viewports only.
    pub fn nav_link_clicked(&mut self, viewport_width: u32) {
        if viewport_width <= self.thresholds.mobile_breakpoint {
            self.close_menu();
        }
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    pub fn is_header_scrolled(&self) -> bool {
        self.header_scrolled
    }

    pub fn is_back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }

    /// Record a new scroll position and refresh scroll-driven state
    pub fn on_scroll(&mut self, offset: u32) {
        self.scroll_offset = offset;
        self.header_scrolled = offset > self.thresholds.header_scrolled;
        self.back_to_top_visible = offset > self.thresholds.back_to_top;
    }

    /// User scrolled directly. Cancels any smooth scroll in flight.
    pub fn scroll_by(&mut self, delta: i64, max_offset: u32) {
        self.animation = None;
        let next = (self.scroll_offset as i64 + delta).clamp(0, max_offset as i64);
        self.on_scroll(next as u32);
    }

    /// Start a smooth scroll to `target`
    pub fn smooth_scroll_to(&mut self, target: u32, now: Instant) {
        self.animation = Some(ScrollAnimation {
            from: self.scroll_offset,
            to: target,
            started: now,
        });
    }

    /// Back-to-top control was activated
    pub fn back_to_top(&mut self, now: Instant) {
        self.smooth_scroll_to(0, now);
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Advance a smooth scroll. Returns the new offset if it moved.
    pub fn tick(&mut self, now: Instant) -> Option<u32> {
        let animation = self.animation?;
        let (offset, done) = animation.offset_at(now);
        if done {
            self.animation = None;
        }
        if offset == self.scroll_offset {
            return None;
        }
        self.on_scroll(offset);
        Some(offset)
    }
}

/// Scroll position for an in-page link.
///
/// Returns None for a bare `#` or an unknown anchor, in which case the
/// link behaves normally. Otherwise the anchor's top minus the header
/// height, so the target isn't hidden under the header.
pub fn anchor_target(href: &str, anchors: &[Anchor], header_height: Option<u32>) -> Option<u32> {
    if href == "#" {
        return None;
    }
    let id = href.strip_prefix('#')?;
    let anchor = anchors.iter().find(|a| a.id == id)?;
    let header = header_height.unwrap_or(DEFAULT_HEADER_HEIGHT);
    Some(anchor.top.saturating_sub(header))
}

/// Whether a nav link points at the current page.
///
/// A directory path such as `/` matches links to `index.html`.
pub fn is_link_active(current_path: &str, link_path: &str) -> bool {
    current_path == link_path || (current_path.ends_with('/') && link_path.ends_with("index.html"))
}
