//! Error module for the keyword scanner.
//!
//! Scanning itself cannot fail: insertion and every matching operation are
//! total over all inputs. Errors only arise around the scanner, while loading
//! configuration or installing the logging subscriber.

use thiserror::Error;

pub mod config;

pub use self::config::ConfigError;

/// Result type alias used throughout the keyword scanner.
pub type ScannerResult<T> = Result<T, ScannerError>;

/// Core error enum for the keyword scanner.
#[derive(Error, Debug)]
pub enum ScannerError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised while installing the tracing subscriber.
    #[error("Logging initialization error: {0}")]
    Logging(String),
}
