//! Side-by-side tiling of the left and right images.

use super::ImageLoader;
use crate::error::CorrespondenceResult;
use crate::types::{Point2D, Side};
use image::RgbImage;
use std::path::Path;

/// The working surface markers and lines are drawn onto
pub type CompositeSurface = RgbImage;

/// X coordinate where the right image begins on the composite surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitBoundary(u32);

impl SplitBoundary {
    pub fn new(x: u32) -> Self {
        Self(x)
    }

    pub fn x(&self) -> u32 {
        self.0
    }

    /// Classify a surface x coordinate.
    #[inline]
    pub fn side_of(&self, x: i32) -> Side {
        if i64::from(x) < i64::from(self.0) {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Output of the compositor: the tiled surface and where it splits
#[derive(Debug, Clone)]
pub struct Composite {
    pub surface: CompositeSurface,
    pub split: SplitBoundary,
}

impl Composite {
    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// True when `point` addresses a pixel of the surface
    pub fn contains(&self, point: Point2D) -> bool {
        surface_contains(&self.surface, point)
    }
}

/// True when `point` addresses a pixel of `surface`
pub fn surface_contains(surface: &CompositeSurface, point: Point2D) -> bool {
    match (u32::try_from(point.x), u32::try_from(point.y)) {
        (Ok(x), Ok(y)) => x < surface.width() && y < surface.height(),
        _ => false,
    }
}

pub struct CanvasCompositor;

impl CanvasCompositor {
    /// Tile `left` and `right` horizontally.
    ///
    /// Height is the smaller of the two heights; width is the sum of both
    /// widths. Pixels without a source stay black.
    pub fn build(left: &RgbImage, right: &RgbImage) -> Composite {
        let height = left.height().min(right.height());
        let width = left.width() + right.width();
        let split = left.width();

        let mut surface = RgbImage::new(width, height);
        for y in 0..height {
            for x in 0..left.width() {
                surface.put_pixel(x, y, *left.get_pixel(x, y));
            }
            for x in 0..right.width() {
                surface.put_pixel(split + x, y, *right.get_pixel(x, y));
            }
        }

        tracing::debug!(width, height, split, "Built composite surface");

        Composite {
            surface,
            split: SplitBoundary::new(split),
        }
    }

    /// Load both images and tile them. Fails if either image fails to load.
    pub fn load_pair(left_path: &Path, right_path: &Path) -> CorrespondenceResult<Composite> {
        let left = ImageLoader::load(left_path);
        let right = ImageLoader::load(right_path);

        match (left, right) {
            (Ok(left), Ok(right)) => Ok(Self::build(&left, &right)),
            (Err(err), Ok(_)) | (Ok(_), Err(err)) => Err(err),
            (Err(err), Err(second)) => {
                tracing::error!(error = %second, "Right image failed to load as well");
                Err(err)
            }
        }
    }
}
