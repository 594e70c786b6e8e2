//! Window to surface coordinate conversion.
//!
//! The composite is painted at the window origin at 1:1 scale, so a window
//! position maps to the surface pixel it falls in.

use crate::types::Point2D;
use gpui::{Pixels, Point};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a window position to the surface pixel under it
    #[inline]
    pub fn window_to_surface(position: Point<Pixels>) -> Point2D {
        Point2D::new(
            f32::from(position.x).floor() as i32,
            f32::from(position.y).floor() as i32,
        )
    }
}
