//! Deterministic round simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One cooperative tick path, no internal timers or threads
//! - Seeded RNG only
//! - Stable fish iteration order (list order breaks catch ties)
//! - No rendering or platform dependencies

pub mod catch;
pub mod clock;
pub mod hook;
pub mod levels;
pub mod motion;
pub mod state;
pub mod tick;

pub use clock::RoundClock;
pub use hook::{Hook, HookPhase};
pub use levels::{LEVEL_COUNT, LEVELS, LevelDef, level_at};
pub use state::{FISH_PALETTE, Fish, GameRound, Outcome, RoundState, Snowflake};
pub use tick::{RoundResult, TickInput};
