//! Round orchestration
//!
//! One cooperative tick path drives everything: entity motion, the hook
//! traversal, catch resolution, and the countdown. The host invokes
//! [`GameRound::tick`] at a steady cadence (nominally 60 Hz) with measured
//! wall-clock dt; pause and a terminal outcome both gate the whole path.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::catch;
use super::motion;
use super::state::{GameRound, Outcome};
use crate::is_in_water;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Tap point for a cast request (field coordinates)
    pub cast: Option<Vec2>,
    /// Pause toggle
    pub pause: bool,
}

/// The single result a round emits, consumed by progression/navigation glue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub level_index: usize,
    pub caught_fish: u32,
    pub passed: bool,
}

impl GameRound {
    /// Advance the round by one tick of `dt` wall-clock seconds.
    ///
    /// Returns the round result exactly once, on the tick the outcome turns
    /// terminal. While paused or after the outcome is terminal the gameplay
    /// state does not advance at all.
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Option<RoundResult> {
        if input.pause {
            self.toggle_pause();
        }
        if let Some(point) = input.cast {
            self.request_cast(point);
        }

        if self.round.outcome.is_terminal() || self.round.is_paused {
            return None;
        }

        let dt = dt.max(0.0);
        self.time_ticks += 1;

        motion::advance_fish(&mut self.fish, dt);
        motion::advance_snowflakes(&mut self.snowflakes, dt);
        self.hook.advance(dt);
        catch::resolve(self);

        // The catch resolver latches Passed the instant the target is met
        if self.round.outcome.is_terminal() {
            return self.emit_result();
        }

        self.clock.advance(dt);
        if self.clock.expired() {
            self.round.outcome = if self.target_met() {
                Outcome::Passed
            } else {
                Outcome::Failed
            };
            log::info!(
                "time up: {:?} with {}/{} fish",
                self.round.outcome,
                self.round.caught_fish,
                self.level.target_catch
            );
            return self.emit_result();
        }

        None
    }

    /// Request a cast at a tap point. Silently ignored unless the point is
    /// in the water, the hook is idle, and the round is running unpaused;
    /// rejected casts are expected, frequent, benign input.
    pub fn request_cast(&mut self, point: Vec2) {
        if self.round.outcome.is_terminal() || self.round.is_paused {
            return;
        }
        if !is_in_water(point.y) {
            return;
        }
        if self.hook.cast(point.y) {
            log::debug!("cast to depth {:.0}", point.y);
        }
    }

    /// Flip the pause gate. No-op once the outcome is terminal.
    pub fn toggle_pause(&mut self) {
        if self.round.outcome.is_terminal() {
            return;
        }
        self.round.is_paused = !self.round.is_paused;
        log::debug!("paused: {}", self.round.is_paused);
    }

    /// Player-initiated exit before the clock runs out. Latches the outcome
    /// from the catches made so far; an early exit still passes when the
    /// target was already met.
    pub fn end_round_early(&mut self) -> RoundResult {
        if !self.round.outcome.is_terminal() {
            self.round.outcome = if self.target_met() {
                Outcome::Passed
            } else {
                Outcome::Failed
            };
            log::info!(
                "early exit: {:?} with {}/{} fish",
                self.round.outcome,
                self.round.caught_fish,
                self.level.target_catch
            );
        }
        self.result_emitted = true;
        self.result()
    }

    /// Snapshot of the result implied by the current terminal state
    fn result(&self) -> RoundResult {
        RoundResult {
            level_index: self.level_index,
            caught_fish: self.round.caught_fish,
            passed: self.round.outcome == Outcome::Passed,
        }
    }

    fn emit_result(&mut self) -> Option<RoundResult> {
        if self.result_emitted {
            return None;
        }
        self.result_emitted = true;
        Some(self.result())
    }
}
