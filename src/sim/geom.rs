//! Shared geometry: integer rectangles, sprite bodies and movement intent

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned integer rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Strict overlap; rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Narrow the rectangle by `amount` on each side, keeping its centre
    pub fn shrink_x(&self, amount: i32) -> Rect {
        Rect::new(self.x + amount, self.y, self.w - 2 * amount, self.h)
    }
}

/// Position + size record shared by every sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
}

impl Body {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// Horizontal centre
    #[inline]
    pub fn center_x(&self) -> i32 {
        self.pos.x + self.size.x / 2
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }
}

/// Movement intent for a scrolling layer or the actor
///
/// For layers, `Right` increases the head offset: the picture slides right,
/// which is what the player sees while the actor walks left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Heading {
    Left,
    Right,
    #[default]
    Still,
}

impl Heading {
    /// Signed multiplier for a step size
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Heading::Left => -1,
            Heading::Right => 1,
            Heading::Still => 0,
        }
    }

    /// Direction the scenery must move for an actor heading this way
    pub fn opposite(self) -> Heading {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
            Heading::Still => Heading::Still,
        }
    }
}

/// Which way a sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}
