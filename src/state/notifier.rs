//! Transient notices that dismiss themselves

use super::timer::Timeout;
use std::time::{Duration, Instant};

/// Visible time of a standard notice
pub const NOTICE_DURATION: Duration = Duration::from_millis(4000);
/// Fade-out before a standard notice is removed
pub const NOTICE_EXIT: Duration = Duration::from_millis(300);
/// Visible time of a success banner above a form
pub const BANNER_DURATION: Duration = Duration::from_millis(5000);

/// Colour family of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    Success,
    Error,
    #[default]
    Info,
}

/// Lifecycle phase of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    Visible,
    /// Exit animation running; carries when it started
    Exiting(Instant),
}

/// Display and exit timings for one notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTimings {
    pub visible: Duration,
    /// None removes the notice without an exit phase
    pub exit: Option<Duration>,
}

impl NoticeTimings {
    /// Floating notice: 4s then a 300ms fade
    pub const STANDARD: Self = Self {
        visible: NOTICE_DURATION,
        exit: Some(NOTICE_EXIT),
    };

    /// Success banner: 5s then removed
    pub const BANNER: Self = Self {
        visible: BANNER_DURATION,
        exit: None,
    };
}

/// One message on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub phase: NoticePhase,
    timings: NoticeTimings,
    timer: Timeout,
}

impl Notice {
    /// Exit animation progress in 0.0..=1.0, or 0.0 while fully visible
    pub fn exit_progress(&self, now: Instant) -> f32 {
        match (self.phase, self.timings.exit) {
            (NoticePhase::Exiting(started), Some(exit)) if !exit.is_zero() => {
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / exit.as_secs_f32()).min(1.0)
            }
            _ => 0.0,
        }
    }
}

/// Stack of transient notices. Notices stack; nothing is deduplicated.
#[derive(Debug, Clone, Default)]
pub struct TransientNotifier {
    notices: Vec<Notice>,
}

impl TransientNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice with the given lifetime
    pub fn show(
        &mut self,
        message: impl Into<String>,
        kind: NoticeKind,
        timings: NoticeTimings,
        now: Instant,
    ) {
        self.notices.push(Notice {
            message: message.into(),
            kind,
            phase: NoticePhase::Visible,
            timings,
            timer: Timeout::after(now, timings.visible),
        });
    }

    /// Advance lifecycles and drop finished notices
    pub fn tick(&mut self, now: Instant) {
        for notice in &mut self.notices {
            if notice.phase != NoticePhase::Visible || !notice.timer.is_due(now) {
                continue;
            }
            if let Some(exit) = notice.timings.exit {
                notice.phase = NoticePhase::Exiting(now);
                notice.timer = Timeout::after(now, exit);
            }
        }
        self.notices.retain(|n| match (n.phase, n.timings.exit) {
            (NoticePhase::Visible, Some(_)) => true,
            (NoticePhase::Visible, None) => !n.timer.is_due(now),
            (NoticePhase::Exiting(_), _) => !n.timer.is_due(now),
        });
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_default_kind_is_info() {
        assert_eq!(NoticeKind::default(), NoticeKind::Info);
    }

    #[test]
    fn test_standard_notice_lifecycle() {
        let t0 = Instant::now();
        let mut n = TransientNotifier::new();
        n.show("Saved", NoticeKind::Success, NoticeTimings::STANDARD, t0);

        n.tick(t0 + ms(3999));
        assert_eq!(n.notices()[0].phase, NoticePhase::Visible);

        n.tick(t0 + ms(4000));
        assert_eq!(n.notices()[0].phase, NoticePhase::Exiting(t0 + ms(4000)));

        n.tick(t0 + ms(4299));
        assert_eq!(n.notices().len(), 1);

        n.tick(t0 + ms(4300));
        assert!(n.is_empty());
    }

    #[test]
    fn test_banner_removed_without_exit() {
        let t0 = Instant::now();
        let mut n = TransientNotifier::new();
        n.show("Thanks", NoticeKind::Success, NoticeTimings::BANNER, t0);

        n.tick(t0 + ms(4999));
        assert_eq!(n.notices().len(), 1);
        n.tick(t0 + ms(5000));
        assert!(n.is_empty());
    }

    #[test]
    fn test_notices_stack() {
        let t0 = Instant::now();
        let mut n = TransientNotifier::new();
        n.show("one", NoticeKind::Info, NoticeTimings::STANDARD, t0);
        n.show("one", NoticeKind::Info, NoticeTimings::STANDARD, t0 + ms(1000));
        assert_eq!(n.notices().len(), 2);

        n.tick(t0 + ms(4300));
        n.tick(t0 + ms(4600));
        assert_eq!(n.notices().len(), 1);
        assert_eq!(n.notices()[0].message, "one");
    }

    #[test]
    fn test_exit_progress() {
        let t0 = Instant::now();
        let mut n = TransientNotifier::new();
        n.show("bye", NoticeKind::Error, NoticeTimings::STANDARD, t0);
        assert_eq!(n.notices()[0].exit_progress(t0), 0.0);

        n.tick(t0 + ms(4000));
        let progress = n.notices()[0].exit_progress(t0 + ms(4150));
        assert!((progress - 0.5).abs() < 0.01);
    }
}
