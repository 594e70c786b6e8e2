//! Corrmark - manual point correspondence marking between two images.
//!
//! Two images are tiled side by side into a composite surface. The operator
//! double-clicks a point on one side and then its counterpart on the other
//! to commit a pair; a right click near an existing point arms it for
//! relocation and the next double-click on the same side moves it.
//!
//! The interaction core (`input`, `correspondence`, `hit_testing`,
//! `canvas`) has no windowing dependency; `app` wires it to a gpui window.

pub mod app;
pub mod canvas;
pub mod constants;
pub mod correspondence;
pub mod error;
pub mod hit_testing;
pub mod input;
pub mod logging;
pub mod perf;
pub mod render;
pub mod settings;
pub mod types;

pub use error::{CorrespondenceError, CorrespondenceResult};
