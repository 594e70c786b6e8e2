//! Integration tests for corrmark.
//!
//! These drive complete event sequences through the state machine and check
//! the store, the state and what the renderer was asked to draw.

mod invariant_tests;
mod raster_session_tests;
