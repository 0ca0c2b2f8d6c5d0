//! Kinematic entity motion
//!
//! Fish swim horizontally and wrap across the play field; snowflakes fall
//! vertically and wrap at the ice layer. No knowledge of the hook or catch
//! logic lives here.

use super::state::{Fish, Snowflake};
use crate::consts::*;

/// Advance every fish by one step of `dt` seconds.
///
/// A fish drifting past `FIELD_WIDTH + WRAP_MARGIN` teleports to
/// `-WRAP_MARGIN` (and mirrored for leftward swimmers), so entry and exit
/// both happen off-screen. Wrapping never re-randomizes anything; only a
/// catch respawn does.
pub fn advance_fish(fish: &mut [Fish], dt: f32) {
    let dt = dt.max(0.0);
    for f in fish {
        f.pos.x += f.speed * f.direction * dt;
        if f.pos.x > FIELD_WIDTH + WRAP_MARGIN {
            f.pos.x = -WRAP_MARGIN;
        } else if f.pos.x < -WRAP_MARGIN {
            f.pos.x = FIELD_WIDTH + WRAP_MARGIN;
        }
    }
}

/// Advance every snowflake by one step of `dt` seconds (vertical fall only,
/// wrapping back to the top of the sky once past the ice layer).
pub fn advance_snowflakes(snowflakes: &mut [Snowflake], dt: f32) {
    let dt = dt.max(0.0);
    for flake in snowflakes {
        flake.pos.y += flake.speed * dt;
        if flake.pos.y > ICE_HEIGHT {
            flake.pos.y = 0.0;
        }
    }
}
