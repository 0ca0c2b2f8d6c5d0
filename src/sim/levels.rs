//! Static level catalog
//!
//! Five fixed difficulty tiers. Colors are cosmetic data passed through to
//! whatever presentation layer hosts the sim; only the counts and speeds
//! affect gameplay.

use serde::{Deserialize, Serialize};

/// Number of levels in the catalog
pub const LEVEL_COUNT: usize = 5;

/// Immutable definition of one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    /// 1-based display number
    pub level: u32,
    /// Cosmetic theme colors (0xRRGGBB)
    pub sky_color: u32,
    pub water_color: u32,
    pub ice_color: u32,
    /// Fish swimming at once
    pub fish_count: usize,
    /// Base swim speed (units per frame at the reference 60 fps)
    pub fish_speed: f32,
    /// Catches required to pass the round
    pub target_catch: u32,
    /// Ambient snowflake count
    pub snowflakes: usize,
}

/// The fixed five-level table, easiest first
pub static LEVELS: [LevelDef; LEVEL_COUNT] = [
    LevelDef {
        level: 1,
        sky_color: 0x87CEEB,
        water_color: 0x01579B,
        ice_color: 0xE8F4F8,
        fish_count: 3,
        fish_speed: 1.5,
        target_catch: 8,
        snowflakes: 20,
    },
    LevelDef {
        level: 2,
        sky_color: 0x6CB4EE,
        water_color: 0x1565C0,
        ice_color: 0xD4E8EE,
        fish_count: 4,
        fish_speed: 2.0,
        target_catch: 12,
        snowflakes: 30,
    },
    LevelDef {
        level: 3,
        sky_color: 0xFF7F50,
        water_color: 0x0D47A1,
        ice_color: 0xFFE4C4,
        fish_count: 5,
        fish_speed: 2.5,
        target_catch: 15,
        snowflakes: 25,
    },
    LevelDef {
        level: 4,
        sky_color: 0x4B0082,
        water_color: 0x0D1B2A,
        ice_color: 0xE6E6FA,
        fish_count: 6,
        fish_speed: 3.0,
        target_catch: 18,
        snowflakes: 40,
    },
    LevelDef {
        level: 5,
        sky_color: 0x1A1A2E,
        water_color: 0x0A0A1A,
        ice_color: 0xB3E5FC,
        fish_count: 8,
        fish_speed: 3.5,
        target_catch: 20,
        snowflakes: 50,
    },
];

/// Look up a level by zero-based index.
///
/// Out-of-range indices are a caller bug, not a runtime condition.
pub fn level_at(index: usize) -> &'static LevelDef {
    assert!(index < LEVEL_COUNT, "level index out of range: {index}");
    &LEVELS[index]
}
