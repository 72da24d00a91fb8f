//! Deterministic game simulation
//!
//! Pure state-in, state-out logic with no rendering or platform dependencies:
//! the same seed and input sequence always produce the same run. The browser
//! shell and the native harness both drive it through [`tick`].

pub mod collision;
pub mod level;
pub mod rect;
pub mod scroll;
pub mod state;
pub mod tick;

pub use collision::{resolve_axes, MoveResolution};
pub use level::generate_level;
pub use rect::Rect;
pub use scroll::scroll_amount;
pub use state::{GamePhase, GameState, Platform, Player, RngState, TreatBowl, YarnBall};
pub use tick::{tick, TickInput};
