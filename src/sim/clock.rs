//! Round countdown clock
//!
//! Wall-time anchored: the clock accumulates elapsed real seconds rather
//! than counting ticks, so it stays correct under a variable tick rate.
//! Pause gating happens in the orchestrator, which simply stops calling
//! `advance`; partial seconds survive a pause untouched.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundClock {
    /// Seconds remaining, fractional
    remaining: f32,
}

impl RoundClock {
    pub fn new(total_seconds: f32) -> Self {
        Self {
            remaining: total_seconds,
        }
    }

    /// Consume `dt` seconds of round time. Negative dt (host stall
    /// artifacts) is clamped to zero effect.
    pub fn advance(&mut self, dt: f32) {
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
    }

    /// The countdown has hit zero
    #[inline]
    pub fn expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Whole seconds left, rounded up so a started second still displays
    /// (90.0 -> 90, 89.4 -> 90, 0.0 -> 0)
    pub fn time_left_seconds(&self) -> u32 {
        self.remaining.ceil() as u32
    }

    /// HUD-style "m:ss" rendering of the time left
    pub fn format_clock(&self) -> String {
        let secs = self.time_left_seconds();
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ROUND_SECONDS, SIM_DT};
    use proptest::prelude::*;

    #[test]
    fn test_counts_down_to_zero_and_stops() {
        let mut clock = RoundClock::new(2.0);
        clock.advance(0.5);
        assert_eq!(clock.time_left_seconds(), 2);
        clock.advance(0.5);
        assert_eq!(clock.time_left_seconds(), 1);
        assert!(!clock.expired());
        clock.advance(5.0);
        assert!(clock.expired());
        assert_eq!(clock.time_left_seconds(), 0);
        // Already expired: further time changes nothing
        clock.advance(1.0);
        assert_eq!(clock.time_left_seconds(), 0);
    }

    #[test]
    fn test_partial_seconds_accumulate() {
        let mut clock = RoundClock::new(ROUND_SECONDS);
        // 1.5 seconds of 60 Hz ticks
        for _ in 0..90 {
            clock.advance(SIM_DT);
        }
        assert_eq!(clock.time_left_seconds(), 89);
    }

    #[test]
    fn test_negative_dt_clamped() {
        let mut clock = RoundClock::new(10.0);
        clock.advance(-3.0);
        assert_eq!(clock, RoundClock::new(10.0));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(RoundClock::new(90.0).format_clock(), "1:30");
        assert_eq!(RoundClock::new(65.0).format_clock(), "1:05");
        assert_eq!(RoundClock::new(9.0).format_clock(), "0:09");
        assert_eq!(RoundClock::new(0.0).format_clock(), "0:00");
    }

    proptest! {
        /// The displayed countdown never increases, whatever dt sequence the
        /// host delivers (including stalls reported as negative time).
        #[test]
        fn prop_display_monotonic_non_increasing(
            dts in prop::collection::vec(-0.1f32..0.5, 1..200)
        ) {
            let mut clock = RoundClock::new(ROUND_SECONDS);
            let mut last = clock.time_left_seconds();
            for dt in dts {
                clock.advance(dt);
                let now = clock.time_left_seconds();
                prop_assert!(now <= last);
                last = now;
            }
        }
    }
}
