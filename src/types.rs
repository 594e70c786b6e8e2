//! Core value types shared by the interaction core and the window layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer position on the composite surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when both coordinate deltas to `other` are within `radius`.
    #[inline]
    pub fn within_box(&self, other: Point2D, radius: i32) -> bool {
        (self.x - other.x).abs() <= radius && (self.y - other.y).abs() <= radius
    }

    #[inline]
    pub fn distance_squared(&self, other: Point2D) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        dx * dx + dy * dy
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Which of the two tiled images a position belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Pointer input after the window layer has mapped raw gestures.
///
/// `Primary` places or relocates a point (double click), `Secondary` tries
/// to pick up an existing point (right button press).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Primary(Point2D),
    Secondary(Point2D),
}

impl PointerEvent {
    pub fn position(&self) -> Point2D {
        match self {
            PointerEvent::Primary(p) | PointerEvent::Secondary(p) => *p,
        }
    }
}
