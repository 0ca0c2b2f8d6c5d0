//! Round state and entity types
//!
//! Everything one level attempt owns lives here: the fish and snowflake
//! entities, the per-round counters, and the `GameRound` aggregate the
//! orchestrator drives. A new attempt always constructs fresh instances;
//! nothing is shared across rounds.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::RoundClock;
use super::hook::Hook;
use super::levels::{LevelDef, level_at};
use crate::consts::*;

/// Fish body colors (0xRRGGBB), picked at random on every spawn
pub const FISH_PALETTE: [u32; 7] = [
    0xFF6B6B, 0x4ECDC4, 0xFFE66D, 0x95E1D3, 0xF38181, 0xAA96DA, 0xFCBAD3,
];

/// A swimming fish
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fish {
    pub pos: Vec2,
    /// Swim speed in units/sec (level base speed with per-fish jitter baked in)
    pub speed: f32,
    /// Body length, also widens the catch window
    pub size: f32,
    /// Horizontal heading, +1.0 (rightward) or -1.0 (leftward)
    pub direction: f32,
    /// Palette color (0xRRGGBB)
    pub color: u32,
}

impl Fish {
    /// Spawn a fish entering from an off-screen edge with fresh random
    /// attributes. Used both at round start and on respawn after a catch.
    pub fn spawn(rng: &mut Pcg32, base_speed: f32) -> Self {
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let start_x = if direction > 0.0 {
            -SPAWN_EDGE_X
        } else {
            FIELD_WIDTH + SPAWN_EDGE_X
        };
        let y = rng.random_range(
            ICE_HEIGHT + FISH_SPAWN_PAD..FIELD_HEIGHT - FISH_SPAWN_PAD,
        );
        Self {
            pos: Vec2::new(start_x, y),
            speed: base_speed
                * rng.random_range(FISH_JITTER_MIN..FISH_JITTER_MAX)
                * MOTION_SCALE,
            size: rng.random_range(FISH_SIZE_MIN..FISH_SIZE_MAX),
            direction,
            color: FISH_PALETTE[rng.random_range(0..FISH_PALETTE.len())],
        }
    }
}

/// An ambient snowflake falling over the ice layer (decorative only)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snowflake {
    pub pos: Vec2,
    pub size: f32,
    /// Fall speed in units/sec
    pub speed: f32,
    pub alpha: f32,
}

impl Snowflake {
    pub fn spawn(rng: &mut Pcg32) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..FIELD_WIDTH),
                rng.random_range(0.0..ICE_HEIGHT),
            ),
            size: rng.random_range(2.0..6.0),
            speed: rng.random_range(1.0..3.0) * MOTION_SCALE,
            alpha: rng.random_range(0.3..0.8),
        }
    }
}

/// Terminal status of a round. One-way: once `Passed` or `Failed` is set it
/// never changes again within the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Passed,
    Failed,
}

impl Outcome {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::InProgress
    }
}

/// Per-round counters and flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Catches so far; only ever increments
    pub caught_fish: u32,
    pub is_paused: bool,
    pub outcome: Outcome,
}

impl RoundState {
    fn new() -> Self {
        Self {
            caught_fish: 0,
            is_paused: false,
            outcome: Outcome::InProgress,
        }
    }
}

/// One level attempt: the orchestrator's exclusively-owned state.
///
/// Construct with [`GameRound::new`], then drive it with
/// [`GameRound::tick`](crate::sim::tick) at a steady cadence.
#[derive(Debug, Clone)]
pub struct GameRound {
    pub level_index: usize,
    pub level: &'static LevelDef,
    /// Seed for reproducibility; a seed plus an input sequence fully
    /// determines a round
    pub seed: u64,
    pub fish: Vec<Fish>,
    pub snowflakes: Vec<Snowflake>,
    pub hook: Hook,
    pub round: RoundState,
    pub clock: RoundClock,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Guards the one-shot result emission
    pub(crate) result_emitted: bool,
    pub(crate) rng: Pcg32,
}

impl GameRound {
    /// Start a fresh attempt at `level_index` (zero-based, must be in range).
    pub fn new(level_index: usize, seed: u64) -> Self {
        let level = level_at(level_index);
        let mut rng = Pcg32::seed_from_u64(seed);

        let fish = (0..level.fish_count)
            .map(|_| Fish::spawn(&mut rng, level.fish_speed))
            .collect();
        let snowflakes = (0..level.snowflakes)
            .map(|_| Snowflake::spawn(&mut rng))
            .collect();

        log::info!(
            "round start: level {} (target {}, {} fish), seed {seed}",
            level.level,
            level.target_catch,
            level.fish_count
        );

        Self {
            level_index,
            level,
            seed,
            fish,
            snowflakes,
            hook: Hook::new(),
            round: RoundState::new(),
            clock: RoundClock::new(ROUND_SECONDS),
            time_ticks: 0,
            result_emitted: false,
            rng,
        }
    }

    /// Whole seconds left on the countdown
    pub fn time_left_seconds(&self) -> u32 {
        self.clock.time_left_seconds()
    }

    /// Whether the target has been met (the pass condition, independent of
    /// whether the outcome latch has fired yet)
    pub fn target_met(&self) -> bool {
        self.round.caught_fish >= self.level.target_catch
    }
}
