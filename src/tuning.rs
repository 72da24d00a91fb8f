//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives in `Tuning`. Defaults
//! match the values in [`crate::consts`]; a JSON blob with any subset of
//! fields can override them at startup.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Vertical velocity set on jump (negative = up)
    pub jump_impulse: f32,
    /// Falling speed cap per tick
    pub terminal_velocity: f32,
    /// Horizontal speed per tick
    pub run_speed: f32,

    /// Distance from the right screen edge that triggers scrolling
    pub scroll_threshold: f32,
    /// World shift per tick while scrolling
    pub scroll_speed: f32,
    /// Scroll cap past the rightmost platform
    pub scroll_overshoot: f32,

    /// Number of platforms generated after the start platform
    pub platform_count: u32,
    pub platform_width_min: i32,
    pub platform_width_max: i32,
    pub platform_gap_min: i32,
    pub platform_gap_max: i32,
    pub platform_y_min: i32,
    pub platform_y_max: i32,

    /// Probability of a yarn ball per generated platform
    pub yarn_chance: f64,
    /// Score per collected yarn ball
    pub yarn_score: u32,

    /// Goal placement past the last platform's right edge
    pub goal_offset_x: f32,
    pub goal_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            terminal_velocity: TERMINAL_VELOCITY,
            run_speed: RUN_SPEED,
            scroll_threshold: SCROLL_THRESHOLD,
            scroll_speed: SCROLL_SPEED,
            scroll_overshoot: SCROLL_OVERSHOOT,
            platform_count: PLATFORM_COUNT,
            platform_width_min: PLATFORM_WIDTH_MIN,
            platform_width_max: PLATFORM_WIDTH_MAX,
            platform_gap_min: PLATFORM_GAP_MIN,
            platform_gap_max: PLATFORM_GAP_MAX,
            platform_y_min: PLATFORM_Y_MIN,
            platform_y_max: PLATFORM_Y_MAX,
            yarn_chance: YARN_CHANCE,
            yarn_score: YARN_SCORE,
            goal_offset_x: GOAL_OFFSET_X,
            goal_y: GOAL_Y,
        }
    }
}

impl Tuning {
    /// Parse a tuning override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
