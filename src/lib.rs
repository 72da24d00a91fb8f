//! Cloud Jumper - a side-scrolling cloud-hopping platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `assets`: Sprite placeholder catalog
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation preferences

pub mod assets;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use assets::{SpriteCatalog, SpriteKind};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Simulation rate (ticks per second); physics constants are per-tick
    pub const TICK_RATE: u32 = 60;
    /// Frame duration used by the shell's fixed-step accumulator
    pub const FRAME_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum catch-up ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity set on jump (negative = up; y grows downward)
    pub const JUMP_IMPULSE: f32 = -12.0;
    /// Falling speed cap per tick
    pub const TERMINAL_VELOCITY: f32 = 10.0;
    /// Horizontal speed per tick while a direction key is held
    pub const RUN_SPEED: f32 = 5.0;

    /// Scroll starts when the player's right edge passes this far from the
    /// right screen edge
    pub const SCROLL_THRESHOLD: f32 = 200.0;
    /// World shift per tick while scrolling
    pub const SCROLL_SPEED: f32 = 4.0;
    /// Scrolling stops this far past the rightmost generated platform
    pub const SCROLL_OVERSHOOT: f32 = 500.0;
    /// Background layers move at this fraction of the cumulative scroll
    pub const PARALLAX_FACTOR: f32 = 0.5;

    /// Player spawn point and collision box
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 300.0;
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;

    /// Level layout
    pub const PLATFORM_COUNT: u32 = 15;
    pub const PLATFORM_HEIGHT: f32 = 30.0;
    pub const START_PLATFORM_X: f32 = 0.0;
    pub const START_PLATFORM_Y: f32 = 500.0;
    pub const START_PLATFORM_WIDTH: f32 = 200.0;
    pub const PLATFORM_WIDTH_MIN: i32 = 80;
    pub const PLATFORM_WIDTH_MAX: i32 = 150;
    pub const PLATFORM_GAP_MIN: i32 = 100;
    pub const PLATFORM_GAP_MAX: i32 = 200;
    pub const PLATFORM_Y_MIN: i32 = 400;
    pub const PLATFORM_Y_MAX: i32 = 550;

    /// Pickups sit this far above their platform's top edge, centered
    pub const YARN_SIZE: f32 = 30.0;
    pub const YARN_OFFSET_Y: f32 = 30.0;
    pub const YARN_CHANCE: f64 = 0.5;
    pub const YARN_SCORE: u32 = 10;

    /// Goal placement past the last platform's right edge
    pub const GOAL_SIZE: f32 = 50.0;
    pub const GOAL_OFFSET_X: f32 = 100.0;
    pub const GOAL_Y: f32 = 450.0;
}
