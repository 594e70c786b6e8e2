//! Logging setup.
//!
//! The filter comes from `RUST_LOG` when set, otherwise
//! [`DEFAULT_LOG_FILTER`](crate::constants::DEFAULT_LOG_FILTER).

use crate::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .try_init();

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}
