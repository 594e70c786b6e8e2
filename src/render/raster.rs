//! Software rasterization of the overlay glyphs.
//!
//! All primitives clip to the surface, so points near the border draw
//! partially instead of panicking.

use super::Renderer;
use crate::canvas::CompositeSurface;
use crate::constants::HIGHLIGHT_RADIUS;
use crate::settings::MarkerStyle;
use crate::types::Point2D;
use image::Rgb;

#[derive(Debug, Clone, Default)]
pub struct RasterRenderer {
    style: MarkerStyle,
    presented_frames: u64,
}

impl RasterRenderer {
    pub fn new(style: MarkerStyle) -> Self {
        Self {
            style,
            presented_frames: 0,
        }
    }

    /// Number of `present` calls so far
    pub fn presented_frames(&self) -> u64 {
        self.presented_frames
    }
}

impl Renderer for RasterRenderer {
    fn draw_marker(&mut self, surface: &mut CompositeSurface, at: Point2D) {
        put(surface, at.x, at.y, self.style.center_color);
        draw_ring(surface, at, self.style.ring_radius, self.style.ring_color);
    }

    fn draw_line(&mut self, surface: &mut CompositeSurface, from: Point2D, to: Point2D) {
        draw_segment(surface, from, to, self.style.line_color);
    }

    fn draw_highlight(&mut self, surface: &mut CompositeSurface, at: Point2D) {
        fill_disc(surface, at, HIGHLIGHT_RADIUS, self.style.highlight_color);
    }

    fn present(&mut self, _surface: &CompositeSurface) {
        self.presented_frames += 1;
    }
}

#[inline]
fn put(surface: &mut CompositeSurface, x: i32, y: i32, color: [u8; 3]) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < surface.width() && y < surface.height() {
        surface.put_pixel(x, y, Rgb(color));
    }
}

/// Bresenham segment, both endpoints inclusive
fn draw_segment(surface: &mut CompositeSurface, from: Point2D, to: Point2D, color: [u8; 3]) {
    let (mut x, mut y) = (from.x, from.y);
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put(surface, x, y, color);
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Midpoint circle outline
fn draw_ring(surface: &mut CompositeSurface, center: Point2D, radius: i32, color: [u8; 3]) {
    if radius <= 0 {
        put(surface, center.x, center.y, color);
        return;
    }
    let (mut x, mut y) = (radius, 0);
    let mut err = 1 - radius;

    while x >= y {
        for (ox, oy) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            put(surface, center.x + ox, center.y + oy, color);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

fn fill_disc(surface: &mut CompositeSurface, center: Point2D, radius: i32, color: [u8; 3]) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put(surface, center.x + dx, center.y + dy, color);
            }
        }
    }
}
