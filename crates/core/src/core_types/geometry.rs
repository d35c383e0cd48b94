//! 2D geometry primitives for the normalized layout coordinate system.
//!
//! All layouts use a normalized coordinate system (typically 100x100 units);
//! every component in this crate works in those units.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// 2D vector type for positions and offsets.
///
/// A simple alias for `nalgebra::Vector2<f32>`, used throughout the engine
/// for exit positions, fire points, path waypoints, and particle positions.
pub type Vec2 = Vector2<f32>;

/// Axis-aligned rectangle in layout coordinates.
///
/// Rooms and risk zones are rectangles; containment checks are inclusive on
/// all edges, matching the behavior assessment components rely on when a
/// point sits exactly on a room boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Geometric center of the rectangle.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Inclusive point-in-rectangle test.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).norm()
}
