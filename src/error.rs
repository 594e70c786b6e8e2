//! Error types for the correspondence session.
//!
//! Ignored pointer events are not errors; they surface as
//! [`Transition::Ignored`](crate::input::Transition::Ignored). Everything in
//! this enum is terminal for the operation that produced it.

use crate::types::Side;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while setting up or running a marking session
#[derive(Error, Debug)]
pub enum CorrespondenceError {
    /// Wrong command line arguments
    #[error("Usage : corrmark <image_left> <image_right>{}", format_detail(.0))]
    Usage(String),

    /// An input image could not be opened or decoded
    #[error("Could not open image {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Store access with an index that does not name an existing point
    #[error("{side:?} point index {index} out of range (len {len})")]
    IndexOutOfRange { side: Side, index: usize, len: usize },

    /// The state machine reached a state its transitions should rule out
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),

    /// The session window could not be created
    #[error("Could not open window: {0}")]
    Window(String),

    /// Settings file exists but does not parse
    #[error("Invalid settings file {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for session operations
pub type CorrespondenceResult<T> = Result<T, CorrespondenceError>;

fn format_detail(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!(" ({detail})")
    }
}
