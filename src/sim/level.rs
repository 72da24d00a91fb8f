//! World generation
//!
//! Builds the platform run, scatters yarn balls, and places the goal. Total:
//! generation cannot fail, and the same seed always produces the same level.

use rand::Rng;

use super::state::{GameState, Platform, TreatBowl, YarnBall};
use crate::consts::*;

/// Populate a fresh state's world from its session RNG
pub fn generate_level(state: &mut GameState) {
    let mut rng = state.rng_state.to_rng();
    let t = state.tuning.clone();

    state.platforms.clear();
    state.yarn_balls.clear();

    // Guaranteed footing under the spawn point
    let id = state.next_entity_id();
    state.platforms.push(Platform::new(
        id,
        START_PLATFORM_X,
        START_PLATFORM_Y,
        START_PLATFORM_WIDTH,
    ));

    let mut last_x = START_PLATFORM_X + START_PLATFORM_WIDTH;
    for _ in 0..t.platform_count {
        let width = rng.random_range(t.platform_width_min..=t.platform_width_max) as f32;
        let x = last_x + rng.random_range(t.platform_gap_min..=t.platform_gap_max) as f32;
        let y = rng.random_range(t.platform_y_min..=t.platform_y_max) as f32;

        let id = state.next_entity_id();
        state.platforms.push(Platform::new(id, x, y, width));

        // Some platforms carry a yarn ball floating above their center
        if rng.random_bool(t.yarn_chance) {
            let id = state.next_entity_id();
            state
                .yarn_balls
                .push(YarnBall::new(id, x + width / 2.0, y - YARN_OFFSET_Y));
        }

        last_x = x + width;
    }

    state.goal = TreatBowl::new(last_x + t.goal_offset_x, t.goal_y);
    state.world_right = last_x;

    log::debug!(
        "Generated level: {} platforms, {} yarn balls, goal at x={}",
        state.platforms.len(),
        state.yarn_balls.len(),
        state.goal.rect.center().x
    );
}
