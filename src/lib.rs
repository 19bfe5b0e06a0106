//! Keyword Scanner Library
//!
//! Token-level multi-keyword search: given a dictionary of phrases, find,
//! extract or replace their occurrences in arbitrary text. Matching happens
//! on whole tokens (words, whitespace runs, punctuation) rather than on
//! characters, and the longest dictionary entry starting at a position wins.
//!
//! # Example
//!
//! ```
//! use keyword_scanner::KeywordProcessor;
//!
//! let mut processor = KeywordProcessor::new();
//! processor.insert_with_payload("Big Apple", "New York");
//! processor.insert_with_payload("Bay Area", "San Francisco");
//!
//! assert_eq!(
//!     processor.replace_all("From the Big Apple to the Bay Area."),
//!     "From the New York to the San Francisco."
//! );
//! assert!(processor.extract_all("apple pie").is_empty());
//! ```

pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;
pub mod tokenizer;

use std::path::Path;

pub use data_structures::keyword_processor::{KeywordMatch, KeywordProcessor, ScanOutcome, ScanState};
pub use error::{ScannerError, ScannerResult};

/// Version information for the keyword scanner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads the configuration (defaults, optional file, `KEYWORD_SCANNER__*`
/// environment overrides), installs the tracing subscriber and stores the
/// configuration globally.
///
/// # Returns
///
/// The loaded configuration, also available from [`config::global_config`].
pub fn init(config_path: Option<&Path>) -> ScannerResult<config::ScannerConfig> {
    let loaded = config::ConfigLoader::new(config_path, config::ENV_PREFIX).load()?;
    logging::init_logging(&loaded.log)?;
    tracing::info!(version = VERSION, "Keyword scanner initialized");

    config::init_global_config(loaded.clone());
    Ok(loaded)
}
