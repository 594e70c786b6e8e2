//! Image file loading.

use crate::error::{CorrespondenceError, CorrespondenceResult};
use image::RgbImage;
use std::path::Path;

pub struct ImageLoader;

impl ImageLoader {
    /// Decode the image at `path` into an 8-bit RGB buffer.
    pub fn load(path: &Path) -> CorrespondenceResult<RgbImage> {
        let decoded = image::open(path).map_err(|source| CorrespondenceError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            width = decoded.width(),
            height = decoded.height(),
            "Loaded image"
        );
        Ok(decoded.to_rgb8())
    }
}
