//! Logging setup for applications embedding the keyword scanner.
//!
//! The library itself only emits `tracing` events; this module installs a
//! `tracing-subscriber` formatter configured from [`LogConfig`].

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{ScannerError, ScannerResult};

/// Builds the event filter for `config`.
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
pub fn env_filter(config: &LogConfig) -> ScannerResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| ScannerError::Logging(format!("Invalid log filter: {e}"))),
    }
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns [`ScannerError::Logging`] if the level is not a valid filter or a
/// global subscriber has already been set.
pub fn init_logging(config: &LogConfig) -> ScannerResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_names(true);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| ScannerError::Logging(format!("Failed to set global tracing subscriber: {e}")))
}
