//! Property tests over the simulation: generated levels stay inside their
//! layout ranges, and arbitrary input sequences never break the per-tick
//! invariants.

use proptest::prelude::*;

use cloud_jumper::sim::{tick, GamePhase, GameState, TickInput};

fn inputs() -> impl Strategy<Value = Vec<TickInput>> {
    prop::collection::vec(
        (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(left, right, jump)| TickInput {
            left,
            right,
            jump,
            confirm: false,
        }),
        0..400,
    )
}

proptest! {
    #[test]
    fn worldgen_respects_ranges(seed in any::<u64>()) {
        let state = GameState::new(seed);
        prop_assert_eq!(state.platforms.len(), 16);

        let start = &state.platforms[0];
        prop_assert_eq!(start.rect.left(), 0.0);
        prop_assert_eq!(start.rect.top(), 500.0);

        let mut last_right = start.rect.right();
        for p in &state.platforms[1..] {
            prop_assert!((80.0..=150.0).contains(&p.rect.size.x));
            prop_assert!((100.0..=200.0).contains(&(p.rect.left() - last_right)));
            prop_assert!((400.0..=550.0).contains(&p.rect.top()));
            last_right = p.rect.right();
        }

        prop_assert_eq!(state.world_right, last_right);
        prop_assert_eq!(state.goal.rect.center().x, last_right + 100.0);
    }

    #[test]
    fn tick_invariants_hold(seed in any::<u64>(), script in inputs()) {
        let mut state = GameState::new(seed);
        let platform_ids: Vec<u32> = state.platforms.iter().map(|p| p.id).collect();
        let mut yarn_ids: Vec<u32> = state.yarn_balls.iter().map(|y| y.id).collect();
        let mut prev_scroll = state.bg_scroll;
        let mut prev_score = state.score;

        for input in &script {
            if state.phase != GamePhase::Playing {
                break;
            }
            tick(&mut state, input);

            // Velocity stays inside [jump impulse, terminal]
            prop_assert!(state.player.vel_y <= state.tuning.terminal_velocity);
            prop_assert!(state.player.vel_y >= state.tuning.jump_impulse);

            // Scroll and score only ever grow
            prop_assert!(state.bg_scroll >= prev_scroll);
            prop_assert!(state.score >= prev_score);
            prop_assert_eq!(state.score % state.tuning.yarn_score, 0);

            // Platform membership is fixed for the whole session
            let now: Vec<u32> = state.platforms.iter().map(|p| p.id).collect();
            prop_assert_eq!(&now, &platform_ids);

            // Collected yarn never comes back
            let live: Vec<u32> = state.yarn_balls.iter().map(|y| y.id).collect();
            prop_assert!(live.iter().all(|id| yarn_ids.contains(id)));
            yarn_ids = live;

            prev_scroll = state.bg_scroll;
            prev_score = state.score;
        }
    }

    #[test]
    fn runs_are_deterministic(seed in any::<u64>(), script in inputs()) {
        let mut a = GameState::new(seed);
        let mut b = GameState::new(seed);
        for input in &script {
            tick(&mut a, input);
            tick(&mut b, input);
        }
        prop_assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn terminal_state_freezes_without_confirm(seed in any::<u64>(), script in inputs()) {
        let mut state = GameState::new(seed);
        state.platforms.clear();
        let idle = TickInput::default();
        for _ in 0..300 {
            if state.phase != GamePhase::Playing {
                break;
            }
            tick(&mut state, &idle);
        }
        prop_assert_eq!(state.phase, GamePhase::GameOver);

        let frozen = serde_json::to_string(&state).unwrap();
        for input in &script {
            tick(&mut state, input);
        }
        prop_assert_eq!(serde_json::to_string(&state).unwrap(), frozen);
    }
}
