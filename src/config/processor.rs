//! Keyword processor configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Settings applied when building a
/// [`KeywordProcessor`](crate::data_structures::keyword_processor::KeywordProcessor).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Number of trie nodes reserved up front
    pub initial_capacity: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
        }
    }
}

impl Validate for ProcessorConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "processor.initial_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
