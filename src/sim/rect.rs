//! Axis-aligned rectangle geometry.
//!
//! Every collision test in the simulation is an AABB overlap: bodies,
//! melee hit-boxes, projectiles, and platforms are all rectangles.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, stored as top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rect centered on a point.
    pub fn from_center(center: DVec2, width: f64, height: f64) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Overlap test. Touching edges do not count as an intersection.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Whether a point lies inside the rect (inclusive of the left/top edge).
    pub fn contains_point(&self, point: DVec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// The same rect shifted by an offset.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Horizontal extent overlap only (used by the landing test, which
    /// handles the vertical band itself).
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.right() >= other.left() && self.left() <= other.right()
    }
}
