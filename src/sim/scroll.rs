//! Scroll controller
//!
//! The camera never moves the player: when the player pushes into the right
//! side of the screen the whole world slides left instead. Scrolling is
//! capped a fixed distance past the rightmost generated platform so the goal
//! can always be reached on screen.

use super::rect::Rect;
use crate::consts::SCREEN_WIDTH;
use crate::tuning::Tuning;

/// Per-tick world shift: either the fixed scroll speed or zero
pub fn scroll_amount(player: &Rect, bg_scroll: f32, world_right: f32, tuning: &Tuning) -> f32 {
    let past_threshold = player.right() > SCREEN_WIDTH - tuning.scroll_threshold;
    let below_cap = bg_scroll < world_right + tuning.scroll_overshoot;
    if past_threshold && below_cap {
        tuning.scroll_speed
    } else {
        0.0
    }
}
