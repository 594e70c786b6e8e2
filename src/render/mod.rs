//! Rendering - overlay drawing and frame presentation.
//!
//! The interaction core talks to a [`Renderer`]; it never touches pixels or
//! the window directly.
//!
//! - `raster` - Marker, line and highlight rasterization into the surface
//! - `frame` - Presents the surface as a gpui image for the window

mod frame;
mod raster;

pub use frame::FramePresenter;
pub use raster::RasterRenderer;

use crate::canvas::CompositeSurface;
use crate::types::Point2D;

/// Drawing collaborator used by the interaction state machine.
///
/// Draw calls mutate the surface; nothing is visible until `present`.
pub trait Renderer {
    /// Two-ring marker glyph centered on `at`
    fn draw_marker(&mut self, surface: &mut CompositeSurface, at: Point2D);

    /// Segment connecting a committed pair
    fn draw_line(&mut self, surface: &mut CompositeSurface, from: Point2D, to: Point2D);

    /// Emphasis on a point armed for relocation
    fn draw_highlight(&mut self, _surface: &mut CompositeSurface, _at: Point2D) {}

    /// Reset the surface to its state before any overlay was drawn
    fn restore(&mut self, surface: &mut CompositeSurface, pristine: &CompositeSurface) {
        surface.clone_from(pristine);
    }

    /// Flush the surface to the display
    fn present(&mut self, surface: &CompositeSurface);
}
