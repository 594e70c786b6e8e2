//! Composite canvas - loading the two inputs and tiling them into one surface.
//!
//! - `loader` - Image file decoding into RGB buffers
//! - `compositor` - Side-by-side tiling and the split boundary

mod compositor;
mod loader;

pub use compositor::{CanvasCompositor, Composite, CompositeSurface, SplitBoundary, surface_contains};
pub use loader::ImageLoader;
