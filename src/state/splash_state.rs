//! Startup banner timeline

use std::time::{Duration, Instant};

/// How long the banner holds still
pub const SPLASH_HOLD: Duration = Duration::from_millis(1300);
/// How long the banner takes to scroll off
pub const SPLASH_SCROLL: Duration = Duration::from_millis(800);

/// Hold and scroll-out durations of the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashTimings {
    pub hold: Duration,
    pub scroll: Duration,
}

impl Default for SplashTimings {
    fn default() -> Self {
        Self {
            hold: SPLASH_HOLD,
            scroll: SPLASH_SCROLL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplashPhase {
    Holding,
    /// Scrolling off, with eased progress in `0.0..1.0`
    Leaving(f32),
    Done,
}

/// Banner shown before the home page
#[derive(Debug)]
pub struct SplashState {
    shown_at: Instant,
    timings: SplashTimings,
    phase: SplashPhase,
}

impl SplashState {
    pub fn new(now: Instant, timings: SplashTimings) -> Self {
        Self {
            shown_at: now,
            timings,
            phase: SplashPhase::Holding,
        }
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    /// Recompute the phase for `now`. A finished banner stays finished.
    pub fn update(&mut self, now: Instant) {
        if self.is_complete() {
            return;
        }
        let elapsed = now.saturating_duration_since(self.shown_at);
        self.phase = match elapsed.checked_sub(self.timings.hold) {
            None => SplashPhase::Holding,
            Some(leaving) if leaving < self.timings.scroll => {
                let progress = leaving.as_secs_f32() / self.timings.scroll.as_secs_f32();
                SplashPhase::Leaving(simple_easing::cubic_out(progress))
            }
            Some(_) => SplashPhase::Done,
        };
    }

    /// Rows the banner has moved up on a screen `height` rows tall
    pub fn offset_rows(&self, height: u16) -> f32 {
        match self.phase {
            SplashPhase::Holding => 0.0,
            SplashPhase::Leaving(progress) => progress * f32::from(height),
            SplashPhase::Done => f32::from(height),
        }
    }

    /// Any key or click dismisses the banner
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Done;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_holds_before_leaving() {
        let t0 = Instant::now();
        let mut splash = SplashState::new(t0, SplashTimings::default());
        splash.update(t0 + ms(1000));
        assert_eq!(splash.phase(), SplashPhase::Holding);
        assert_eq!(splash.offset_rows(24), 0.0);
    }

    #[test]
    fn test_leaves_then_finishes() {
        let t0 = Instant::now();
        let mut splash = SplashState::new(t0, SplashTimings::default());

        splash.update(t0 + ms(1700));
        assert!(matches!(splash.phase(), SplashPhase::Leaving(_)));
        let offset = splash.offset_rows(24);
        assert!(offset > 0.0 && offset < 24.0);

        splash.update(t0 + ms(2100));
        assert!(splash.is_complete());
    }

    #[test]
    fn test_custom_timings_shift_the_timeline() {
        let t0 = Instant::now();
        let timings = SplashTimings {
            hold: ms(100),
            scroll: ms(100),
        };
        let mut splash = SplashState::new(t0, timings);
        splash.update(t0 + ms(150));
        assert!(matches!(splash.phase(), SplashPhase::Leaving(_)));
        splash.update(t0 + ms(200));
        assert!(splash.is_complete());
    }

    #[test]
    fn test_zero_scroll_finishes_after_hold() {
        let t0 = Instant::now();
        let timings = SplashTimings {
            hold: ms(100),
            scroll: Duration::ZERO,
        };
        let mut splash = SplashState::new(t0, timings);
        splash.update(t0 + ms(100));
        assert!(splash.is_complete());
    }

    #[test]
    fn test_skip_is_final() {
        let t0 = Instant::now();
        let mut splash = SplashState::new(t0, SplashTimings::default());
        splash.skip();
        splash.update(t0);
        assert!(splash.is_complete());
    }
}
