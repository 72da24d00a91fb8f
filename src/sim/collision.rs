//! Axis-separated collision resolution
//!
//! The player's move is resolved one axis at a time against the platform set:
//! a horizontal probe that fully stops on contact, then a vertical probe that
//! clamps onto the surface it hit. Every platform is checked every tick; at
//! this scale (<= 16 platforms) the O(platforms) scan is fine, but a larger
//! world would want a spatial index here.

use super::rect::Rect;
use super::state::Platform;

/// Outcome of resolving one tick of movement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResolution {
    /// Resolved horizontal displacement
    pub dx: f32,
    /// Resolved vertical displacement
    pub dy: f32,
    /// Vertical velocity after resolution (zeroed on any vertical contact)
    pub vel_y: f32,
    /// True if the vertical probe clamped the player onto a platform top
    pub landed: bool,
}

/// Resolve a tentative move (dx, vel_y) for `rect` against the platforms.
///
/// Horizontal: any overlap cancels the whole displacement (no sliding).
/// Vertical: moving up clamps the top to the platform's bottom (head bump);
/// moving down or still clamps the bottom to the platform's top and lands.
pub fn resolve_axes(rect: &Rect, dx: f32, vel_y: f32, platforms: &[Platform]) -> MoveResolution {
    let mut dx = dx;
    let mut dy = vel_y;
    let mut vel_y = vel_y;
    let mut landed = false;

    for platform in platforms {
        if platform.rect.overlaps(&rect.offset(dx, 0.0)) {
            dx = 0.0;
        }

        if platform.rect.overlaps(&rect.offset(0.0, dy)) {
            if vel_y < 0.0 {
                dy = platform.rect.bottom() - rect.top();
                vel_y = 0.0;
            } else {
                dy = platform.rect.top() - rect.bottom();
                vel_y = 0.0;
                landed = true;
            }
        }
    }

    MoveResolution { dx, dy, vel_y, landed }
}
