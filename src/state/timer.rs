//! Deadline timers polled by the event loop
//!
//! Components own their timers as plain values. Cancelling a timer is
//! dropping it, so a component holding `Option<Interval>` can never have
//! more than one live rotation.

use std::time::{Duration, Instant};

/// Single-shot timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout {
    due: Instant,
}

impl Timeout {
    /// Arm a timer that fires `delay` after `now`
    pub fn after(now: Instant, delay: Duration) -> Self {
        Self { due: now + delay }
    }

    /// True once the deadline has passed
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    #[cfg(test)]
    pub fn due(&self) -> Instant {
        self.due
    }
}

/// Recurring timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    next_due: Instant,
    period: Duration,
}

impl Interval {
    /// Arm a timer that first fires one `period` after `now`
    pub fn every(now: Instant, period: Duration) -> Self {
        Self {
            next_due: now + period,
            period,
        }
    }

    /// Returns true when the interval fired.
    ///
    /// Fires at most once per poll. If the poll is late by more than one
    /// period the next deadline is realigned to `now + period` instead of
    /// catching up with a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        let next = self.next_due + self.period;
        self.next_due = if next <= now { now + self.period } else { next };
        true
    }

    #[cfg(test)]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[cfg(test)]
    pub fn next_due(&self) -> Instant {
        self.next_due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    mod timeout {
        use super::*;

        #[test]
        fn test_not_due_before_delay() {
            let t0 = Instant::now();
            let timeout = Timeout::after(t0, SECOND);
            assert!(!timeout.is_due(t0));
            assert!(!timeout.is_due(t0 + Duration::from_millis(999)));
        }

        #[test]
        fn test_due_at_and_after_delay() {
            let t0 = Instant::now();
            let timeout = Timeout::after(t0, SECOND);
            assert!(timeout.is_due(t0 + SECOND));
            assert!(timeout.is_due(t0 + 5 * SECOND));
        }
    }

    mod interval {
        use super::*;

        #[test]
        fn test_fires_once_per_period() {
            let t0 = Instant::now();
            let mut interval = Interval::every(t0, SECOND);
            assert!(!interval.poll(t0 + Duration::from_millis(500)));
            assert!(interval.poll(t0 + SECOND));
            assert!(!interval.poll(t0 + Duration::from_millis(1500)));
            assert!(interval.poll(t0 + 2 * SECOND));
        }

        #[test]
        fn test_late_poll_fires_once_and_realigns() {
            let t0 = Instant::now();
            let mut interval = Interval::every(t0, SECOND);
            let late = t0 + Duration::from_millis(3500);
            assert!(interval.poll(late));
            assert!(!interval.poll(late));
            assert_eq!(interval.next_due(), late + SECOND);
        }

        #[test]
        fn test_slightly_late_poll_keeps_cadence() {
            let t0 = Instant::now();
            let mut interval = Interval::every(t0, SECOND);
            assert!(interval.poll(t0 + Duration::from_millis(1100)));
            assert_eq!(interval.next_due(), t0 + 2 * SECOND);
        }
    }
}
