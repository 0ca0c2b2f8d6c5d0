//! Ice Fisher - a tap-to-fish arcade game
//!
//! Core modules:
//! - `sim`: Deterministic round simulation (fish motion, hook, catches, clock)
//! - `progression`: Per-level best scores and unlock state, persisted as JSON

pub mod progression;
pub mod sim;

pub use progression::Progression;
pub use sim::{GameRound, RoundResult, TickInput};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz nominal tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical play field (portrait, reference units)
    pub const FIELD_WIDTH: f32 = 1080.0;
    pub const FIELD_HEIGHT: f32 = 1920.0;
    /// Everything above this y is sky/ice; water starts here
    pub const ICE_HEIGHT: f32 = FIELD_HEIGHT * 0.35;

    /// Off-screen band fish may occupy before wrapping to the far side
    pub const WRAP_MARGIN: f32 = 150.0;
    /// How far off-screen a freshly spawned fish starts
    pub const SPAWN_EDGE_X: f32 = 100.0;
    /// Vertical padding of the band fish spawn into
    pub const FISH_SPAWN_PAD: f32 = 50.0;

    /// Fish body size range (units)
    pub const FISH_SIZE_MIN: f32 = 40.0;
    pub const FISH_SIZE_MAX: f32 = 70.0;
    /// Per-fish speed jitter applied to the level's base speed
    pub const FISH_JITTER_MIN: f32 = 0.75;
    pub const FISH_JITTER_MAX: f32 = 1.25;

    /// The ice hole the hook is cast through (fixed horizontal position)
    pub const HOLE_X: f32 = FIELD_WIDTH / 2.0;
    /// Catch radius around the hook tip
    pub const HOOK_REACH: f32 = 40.0;
    /// Hook travel durations (seconds)
    pub const HOOK_DROP_SECS: f32 = 0.5;
    pub const HOOK_RETURN_SECS: f32 = 0.3;

    /// Round length (seconds)
    pub const ROUND_SECONDS: f32 = 90.0;

    /// Legacy speeds were tuned in units-per-frame at 60 fps; spawn code
    /// multiplies by this so motion integrates by wall-clock dt instead
    pub const MOTION_SCALE: f32 = 60.0;
}

/// Linear interpolation from `a` to `b` at `t` clamped to [0, 1]
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// True when a y coordinate lies in the water region (below the ice line)
#[inline]
pub fn is_in_water(y: f32) -> bool {
    y > consts::ICE_HEIGHT
}
