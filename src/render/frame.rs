//! Frame presentation for the gpui window.
//!
//! gpui sprites expect BGRA pixel data, so every presented surface is
//! converted once and handed to the view as a fresh `RenderImage`.

use super::{RasterRenderer, Renderer};
use crate::canvas::CompositeSurface;
use crate::profile_scope;
use crate::settings::MarkerStyle;
use crate::types::Point2D;
use gpui::RenderImage;
use image::{Frame, Rgba, RgbaImage};
use std::sync::Arc;

/// Renderer that rasterizes into the surface and queues a window frame on
/// every `present`.
pub struct FramePresenter {
    raster: RasterRenderer,
    pending: Option<Arc<RenderImage>>,
}

impl FramePresenter {
    pub fn new(style: MarkerStyle) -> Self {
        Self {
            raster: RasterRenderer::new(style),
            pending: None,
        }
    }

    /// Convert a surface into an image gpui can paint.
    pub fn render_image(surface: &CompositeSurface) -> Arc<RenderImage> {
        profile_scope!("render_image");
        Arc::new(RenderImage::new([Frame::new(to_bgra(surface))]))
    }

    /// The most recently presented frame, if one is waiting
    pub fn take_frame(&mut self) -> Option<Arc<RenderImage>> {
        self.pending.take()
    }
}

impl Renderer for FramePresenter {
    fn draw_marker(&mut self, surface: &mut CompositeSurface, at: Point2D) {
        self.raster.draw_marker(surface, at);
    }

    fn draw_line(&mut self, surface: &mut CompositeSurface, from: Point2D, to: Point2D) {
        self.raster.draw_line(surface, from, to);
    }

    fn draw_highlight(&mut self, surface: &mut CompositeSurface, at: Point2D) {
        self.raster.draw_highlight(surface, at);
    }

    fn present(&mut self, surface: &CompositeSurface) {
        self.raster.present(surface);
        self.pending = Some(Self::render_image(surface));
    }
}

/// RGB to opaque BGRA
pub(crate) fn to_bgra(surface: &CompositeSurface) -> RgbaImage {
    RgbaImage::from_fn(surface.width(), surface.height(), |x, y| {
        let [r, g, b] = surface.get_pixel(x, y).0;
        Rgba([b, g, r, u8::MAX])
    })
}
