//! Hook state machine
//!
//! The player's single probe: Idle at the water surface, Dropping toward a
//! cast depth, then Returning to the surface. Travel is wall-time-anchored
//! linear interpolation so the animated position is correct at every tick
//! regardless of tick rate; the collision resolver samples it mid-flight.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lerp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HookPhase {
    /// Resting at the water surface, waiting for a cast
    Idle,
    /// Descending toward the cast target depth
    Dropping,
    /// Ascending back to the surface
    Returning,
}

/// The cast hook. x is pinned to the hole for the whole traversal; only y
/// animates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hook {
    pub x: f32,
    pub y: f32,
    phase: HookPhase,
    /// Cast depth for the current traversal
    target_y: f32,
    /// y where the current phase started interpolating from
    phase_from_y: f32,
    /// Wall-clock seconds elapsed in the current phase
    phase_elapsed: f32,
}

impl Default for Hook {
    fn default() -> Self {
        Self::new()
    }
}

impl Hook {
    pub fn new() -> Self {
        Self {
            x: HOLE_X,
            y: ICE_HEIGHT,
            phase: HookPhase::Idle,
            target_y: ICE_HEIGHT,
            phase_from_y: ICE_HEIGHT,
            phase_elapsed: 0.0,
        }
    }

    #[inline]
    pub fn phase(&self) -> HookPhase {
        self.phase
    }

    /// Whether a traversal is in flight (the only time catches can happen)
    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase != HookPhase::Idle
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Begin a cast toward `target_y`. Only accepted while Idle; a cast
    /// during Dropping/Returning is rejected and leaves the hook untouched.
    /// Returns whether the cast was accepted.
    pub fn cast(&mut self, target_y: f32) -> bool {
        if self.phase != HookPhase::Idle {
            return false;
        }
        self.x = HOLE_X;
        self.target_y = target_y;
        self.phase_from_y = self.y;
        self.phase_elapsed = 0.0;
        self.phase = HookPhase::Dropping;
        true
    }

    /// Advance the traversal by `dt` seconds. Negative dt (host stall
    /// artifacts) is clamped to zero effect. Leftover time past a phase
    /// boundary carries into the next phase so the two timers never drift.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        match self.phase {
            HookPhase::Idle => {}
            HookPhase::Dropping => {
                self.phase_elapsed += dt;
                let t = self.phase_elapsed / HOOK_DROP_SECS;
                self.y = lerp(self.phase_from_y, self.target_y, t);
                if t >= 1.0 {
                    let leftover = self.phase_elapsed - HOOK_DROP_SECS;
                    self.phase = HookPhase::Returning;
                    self.phase_from_y = self.target_y;
                    self.phase_elapsed = 0.0;
                    // Re-enter with the remainder so a large dt can't stall
                    // the hook at the turnaround
                    self.advance(leftover);
                }
            }
            HookPhase::Returning => {
                self.phase_elapsed += dt;
                let t = self.phase_elapsed / HOOK_RETURN_SECS;
                self.y = lerp(self.phase_from_y, ICE_HEIGHT, t);
                if t >= 1.0 {
                    self.phase = HookPhase::Idle;
                    self.y = ICE_HEIGHT;
                    self.phase_elapsed = 0.0;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = SIM_DT;

    #[test]
    fn test_cast_only_from_idle() {
        let mut hook = Hook::new();
        assert!(hook.cast(1500.0));
        assert_eq!(hook.phase(), HookPhase::Dropping);

        // Second cast mid-drop is a no-op: phase and position unchanged
        hook.advance(STEP);
        let before = hook;
        assert!(!hook.cast(900.0));
        assert_eq!(hook, before);
    }

    #[test]
    fn test_drop_then_return_then_idle() {
        let mut hook = Hook::new();
        hook.cast(1500.0);

        // Half the drop duration: halfway down
        hook.advance(HOOK_DROP_SECS / 2.0);
        assert_eq!(hook.phase(), HookPhase::Dropping);
        let expected = ICE_HEIGHT + (1500.0 - ICE_HEIGHT) / 2.0;
        assert!((hook.y - expected).abs() < 0.01);

        // Remainder of the drop: turnaround at target depth
        hook.advance(HOOK_DROP_SECS / 2.0);
        assert_eq!(hook.phase(), HookPhase::Returning);
        assert!((hook.y - 1500.0).abs() < 0.01);

        // Full return duration: resting at the surface again
        hook.advance(HOOK_RETURN_SECS);
        assert_eq!(hook.phase(), HookPhase::Idle);
        assert_eq!(hook.y, ICE_HEIGHT);
    }

    #[test]
    fn test_x_pinned_for_whole_cast() {
        let mut hook = Hook::new();
        hook.cast(1200.0);
        let mut elapsed = 0.0;
        while hook.is_active() {
            hook.advance(STEP);
            elapsed += STEP;
            assert_eq!(hook.x, HOLE_X);
            assert!(elapsed < 2.0, "hook never came back");
        }
    }

    #[test]
    fn test_traversal_duration_matches_constants() {
        let mut hook = Hook::new();
        hook.cast(1500.0);
        let mut ticks = 0u32;
        while hook.is_active() {
            hook.advance(STEP);
            ticks += 1;
        }
        let expected = ((HOOK_DROP_SECS + HOOK_RETURN_SECS) / STEP).ceil() as u32;
        // A couple ticks of slack for float accumulation at phase boundaries
        assert!(ticks.abs_diff(expected) <= 2, "{ticks} vs {expected}");
    }

    #[test]
    fn test_big_dt_carries_across_turnaround() {
        let mut hook = Hook::new();
        hook.cast(1500.0);
        // One oversized step past the drop duration lands inside Returning,
        // partway back up
        hook.advance(HOOK_DROP_SECS + HOOK_RETURN_SECS / 2.0);
        assert_eq!(hook.phase(), HookPhase::Returning);
        let expected = 1500.0 + (ICE_HEIGHT - 1500.0) / 2.0;
        assert!((hook.y - expected).abs() < 0.01);
    }

    #[test]
    fn test_negative_dt_clamped() {
        let mut hook = Hook::new();
        hook.cast(1500.0);
        hook.advance(STEP);
        let before = hook;
        hook.advance(-1.0);
        assert_eq!(hook, before);
    }
}
