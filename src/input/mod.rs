//! Pointer input handling for the correspondence canvas.
//!
//! ## Architecture
//!
//! An explicit state machine (`InteractionState`) tracks whether a pair is
//! half placed or a point is armed for relocation. `InteractionStateMachine`
//! owns that state together with the store and the surface, and is the only
//! code that mutates them.
//!
//! ## Modules
//!
//! - `state` - Interaction state enum and queries
//! - `machine` - Event dispatch, pairing, relocation and redraw
//! - `coords` - Window to surface coordinate conversion

pub mod coords;
mod machine;
mod state;

pub use machine::{IgnoreReason, InteractionStateMachine, Transition};
pub use state::InteractionState;
