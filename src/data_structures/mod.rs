//! Data structures for the keyword scanner.
//!
//! - [`token_trie`]: arena trie keyed by whole tokens
//! - [`keyword_processor`]: dictionary scanning, extraction and replacement

pub mod keyword_processor;
pub mod token_trie;

// Re-export common data structures
pub use keyword_processor::{KeywordMatch, KeywordProcessor, ScanOutcome, ScanState};
pub use token_trie::{NodeId, TokenTrie};
