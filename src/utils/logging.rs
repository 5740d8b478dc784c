//! Logging setup
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` takes precedence over
//! the configured level.

use crate::config::{LogFormat, LoggingSettings};
use crate::utils::error::{MetagenError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter for the subscriber
pub fn env_filter(settings: &LoggingSettings) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.level).map_err(|e| {
            MetagenError::config(format!("Invalid log level '{}': {}", settings.level, e))
        }),
    }
}

/// Initialize the global subscriber
pub fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let filter = env_filter(settings)?;

    let result = match settings.format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .try_init(),
    };

    result.map_err(|e| MetagenError::config(format!("Failed to initialize logging: {}", e)))
}
