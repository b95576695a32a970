//! Hero section tab carousel with timed auto-rotation
//!
//! The rotator owns at most one rotation interval. Starting always
//! replaces the previous interval, so duplicate rotations cannot stack.
//! Manual clicks pause rotation and arm a resume timer; every click arms
//! its own timer and earlier ones are not cancelled.

use super::timer::{Interval, Timeout};
use std::time::{Duration, Instant};

/// Time between automatic advances
pub const AUTO_ROTATE_DELAY: Duration = Duration::from_millis(8000);
/// Quiet period after a manual click before rotation resumes
pub const RESUME_AFTER_CLICK: Duration = Duration::from_millis(30_000);

/// Body of a tab pane. Opaque to the rotator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabContent {
    pub heading: String,
    pub body: String,
    pub call_to_action: Option<String>,
}

/// One named tab and its pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub name: String,
    pub label: String,
    pub content: TabContent,
}

/// Rotation timing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationTimings {
    pub interval: Duration,
    pub resume_after: Duration,
}

impl Default for RotationTimings {
    fn default() -> Self {
        Self {
            interval: AUTO_ROTATE_DELAY,
            resume_after: RESUME_AFTER_CLICK,
        }
    }
}

/// Tab-list keyboard navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKey {
    /// Left or Up arrow, wraps to the last tab
    Previous,
    /// Right or Down arrow, wraps to the first tab
    Next,
    /// Home
    First,
    /// End
    Last,
}

/// Tab set plus rotation state
#[derive(Debug, Clone)]
pub struct TabRotator {
    tabs: Vec<Tab>,
    current: usize,
    /// Tab holding keyboard focus
    focused: usize,
    auto_enabled: bool,
    hidden: bool,
    rotation: Option<Interval>,
    pending_resumes: Vec<Timeout>,
    timings: RotationTimings,
}

impl TabRotator {
    /// Create a rotator showing the first tab, with rotation enabled but not
    /// yet started. Returns None when there are no tabs.
    pub fn new(tabs: Vec<Tab>, timings: RotationTimings) -> Option<Self> {
        if tabs.is_empty() {
            return None;
        }
        Some(Self {
            tabs,
            current: 0,
            focused: 0,
            auto_enabled: true,
            hidden: false,
            rotation: None,
            pending_resumes: Vec::new(),
            timings,
        })
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_tab(&self) -> &Tab {
        &self.tabs[self.current]
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    pub fn is_auto_enabled(&self) -> bool {
        self.auto_enabled
    }

    /// Whether a rotation interval is live
    pub fn is_rotating(&self) -> bool {
        self.rotation.is_some()
    }

    #[cfg(test)]
    pub fn pending_resume_count(&self) -> usize {
        self.pending_resumes.len()
    }

    #[cfg(test)]
    pub fn timings(&self) -> RotationTimings {
        self.timings
    }

    /// Show the tab called `name`. Unknown names are logged and ignored.
    pub fn switch_to(&mut self, name: &str) -> bool {
        match self.tabs.iter().position(|t| t.name == name) {
            Some(index) => {
                self.current = index;
                true
            }
            None => {
                tracing::debug!(tab = name, "No such hero tab");
                false
            }
        }
    }

    /// Show the next tab, wrapping to the first
    pub fn advance(&mut self) {
        let next = (self.current + 1) % self.tabs.len();
        let name = self.tabs[next].name.clone();
        self.switch_to(&name);
    }

    /// Install the rotation interval, replacing any live one.
    ///
    /// Does nothing while rotation is paused or the page is hidden.
    pub fn start_automation(&mut self, now: Instant) {
        if !self.auto_enabled || self.hidden {
            return;
        }
        self.rotation = Some(Interval::every(now, self.timings.interval));
    }

    /// Cancel the live rotation interval, if any
    pub fn stop_automation(&mut self) {
        self.rotation = None;
    }

    /// Disable rotation until resumed
    pub fn pause(&mut self) {
        self.auto_enabled = false;
        self.stop_automation();
    }

    /// Re-enable rotation and restart the interval
    pub fn resume(&mut self, now: Instant) {
        self.auto_enabled = true;
        self.stop_automation();
        self.start_automation(now);
    }

    /// User clicked a tab: show it, pause, and arm a resume timer
    pub fn click(&mut self, name: &str, now: Instant) {
        if let Some(index) = self.tabs.iter().position(|t| t.name == name) {
            self.focused = index;
        }
        self.switch_to(name);
        self.pause();
        self.pending_resumes
            .push(Timeout::after(now, self.timings.resume_after));
    }

    /// Pointer entered the hero region
    pub fn pointer_enter(&mut self) {
        self.stop_automation();
    }

    /// Pointer left the hero region. Does not override an explicit pause.
    pub fn pointer_leave(&mut self, now: Instant) {
        if self.auto_enabled {
            self.start_automation(now);
        }
    }

    /// Page visibility changed
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        self.hidden = !visible;
        if self.hidden {
            self.stop_automation();
        } else if self.auto_enabled {
            self.start_automation(now);
        }
    }

    /// Keyboard navigation from the focused tab.
    ///
    /// Moves focus, shows the target tab and pauses rotation. Returns true
    /// if the focus moved.
    pub fn key(&mut self, key: TabKey) -> bool {
        let count = self.tabs.len();
        let from = self.focused;
        let target = match key {
            TabKey::Previous => (from + count - 1) % count,
            TabKey::Next => (from + 1) % count,
            TabKey::First => 0,
            TabKey::Last => count - 1,
        };
        if target == from {
            return false;
        }
        self.focused = target;
        let name = self.tabs[target].name.clone();
        self.switch_to(&name);
        self.pause();
        true
    }

    /// Fire due timers. Returns true if the carousel advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self.pending_resumes.iter().filter(|t| t.is_due(now)).count();
        if due > 0 {
            self.pending_resumes.retain(|t| !t.is_due(now));
            for _ in 0..due {
                tracing::debug!("Resuming hero tab rotation");
                self.resume(now);
            }
        }

        let fired = self
            .rotation
            .as_mut()
            .is_some_and(|interval| interval.poll(now));
        if fired {
            self.advance();
        }
        fired
    }
}
