//! Game state and core simulation types
//!
//! Everything the simulation mutates lives here, owned by [`GameState`] and
//! touched only inside a tick.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player fell off the bottom of the screen
    GameOver,
    /// Player reached the treat bowl
    LevelComplete,
}

impl GamePhase {
    /// Terminal phases suspend the simulation until reset
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::LevelComplete)
    }
}

/// The player-controlled cat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity, pixels per tick (positive = down)
    pub vel_y: f32,
    /// Last horizontal input: -1, 0, or 1 (used for sprite facing)
    pub direction: i8,
    /// Jump latch: held until the jump key is released
    pub jumped: bool,
    pub in_air: bool,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0.0,
            direction: 0,
            jumped: false,
            in_air: true,
        }
    }
}

/// A cloud the player can stand on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub rect: Rect,
}

impl Platform {
    /// Width is chosen at construction; height is fixed
    pub fn new(id: u32, x: f32, y: f32, width: f32) -> Self {
        Self {
            id,
            rect: Rect::new(x, y, width, PLATFORM_HEIGHT),
        }
    }
}

/// A collectible yarn ball, placed by its center point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YarnBall {
    pub id: u32,
    pub rect: Rect,
}

impl YarnBall {
    pub fn new(id: u32, cx: f32, cy: f32) -> Self {
        Self {
            id,
            rect: Rect::from_center(cx, cy, YARN_SIZE, YARN_SIZE),
        }
    }
}

/// The level goal, placed by its center point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatBowl {
    pub rect: Rect,
}

impl TreatBowl {
    pub fn new(cx: f32, cy: f32) -> Self {
        Self {
            rect: Rect::from_center(cx, cy, GOAL_SIZE, GOAL_SIZE),
        }
    }
}

/// RNG state wrapper: the layout is a pure function of the seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub phase: GamePhase,
    /// Collected-yarn score; monotonic while playing
    pub score: u32,
    /// Cumulative world scroll; monotonic while playing
    pub bg_scroll: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// Membership fixed after generation; only x positions shift
    pub platforms: Vec<Platform>,
    /// Live pickups; entries are removed exactly once, on collection
    pub yarn_balls: Vec<YarnBall>,
    pub goal: TreatBowl,
    /// Rightmost x of generated content, caps scrolling
    pub world_right: f32,
    pub tuning: Tuning,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a fresh session: spawn the player and generate the level
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng_state: RngState::new(seed),
            phase: GamePhase::Playing,
            score: 0,
            bg_scroll: 0.0,
            time_ticks: 0,
            player: Player::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            platforms: Vec::new(),
            yarn_balls: Vec::new(),
            goal: TreatBowl::new(0.0, 0.0),
            world_right: 0.0,
            tuning,
            next_id: 1,
        };
        super::level::generate_level(&mut state);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Tear down the session and start over with a new seed
    pub fn reset(&mut self, seed: u64) {
        log::info!(
            "Resetting session (score {}, seed {} -> {})",
            self.score,
            self.seed,
            seed
        );
        *self = Self::with_tuning(seed, self.tuning.clone());
    }
}
