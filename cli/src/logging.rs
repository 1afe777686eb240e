#![deny(missing_docs)]

//! # Logging
//!
//! Installs the `tracing` subscriber. Logs go to stderr so stdout stays machine-readable.

use refpath_core::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Initializes logging. `RUST_LOG` takes precedence over `level`.
pub fn init(level: &str) -> AppResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::General(format!("Failed to initialize logging: {}", e)))
}
