//! Application module - the gpui window hosting a marking session.
//!
//! - `state` - The CorrMarker view struct and the session failure slot
//! - `lifecycle` - Construction and the blocking `run_session` entry point
//! - `view` - Rendering and mapping of raw mouse/keyboard input

mod lifecycle;
mod state;
mod view;

pub use lifecycle::run_session;
pub use state::{CorrMarker, SessionFailure};
