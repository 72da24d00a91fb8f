//! Axis-aligned rectangle, the shared shape of every entity
//!
//! Coordinates are screen-space pixels: x grows right, y grows down. Sizes
//! are fixed after construction; only positions move.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box with a min-corner position and a size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Build a rect centered on a point
    pub fn from_center(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// A copy displaced by (dx, dy), for probing a move before committing it
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            pos: self.pos + Vec2::new(dx, dy),
            size: self.size,
        }
    }

    /// Horizontal shift in place (world scroll)
    pub fn shift_x(&mut self, dx: f32) {
        self.pos.x += dx;
    }

    /// Strict overlap test; rects that merely share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
