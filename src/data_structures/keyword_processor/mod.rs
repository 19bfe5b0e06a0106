// Copyright (c) 2025 Keyword Scanner Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Keyword Processor for token-level multi-keyword search and replace.
//!
//! The processor owns a [`TokenTrie`] filled with dictionary phrases and
//! scans text for them at token granularity. A phrase only matches where the
//! text produces exactly the same tokens, so `"py"` is found in `"I like py"`
//! but not in `"happy"`.
//!
//! # Features
//!
//! - Longest match wins among phrases that share a starting position
//! - Leftmost match first, matches never overlap
//! - Each phrase carries a payload (clean word) reported or substituted on match
//! - Single scanning primitive shared by scan, extraction and replacement
//!
//! # Example
//!
//! ```
//! use keyword_scanner::data_structures::keyword_processor::KeywordProcessor;
//!
//! let mut processor = KeywordProcessor::new();
//! processor.insert("hello");
//! processor.insert_with_payload("new york", "NYC");
//!
//! assert_eq!(
//!     processor.extract_all("hello from new york"),
//!     vec!["hello", "NYC"]
//! );
//! assert_eq!(
//!     processor.replace_all("hello from new york!"),
//!     "hello from NYC!"
//! );
//! ```
//!
//! # Matching Semantics
//!
//! Starting from the current position, the scanner descends the trie one
//! token at a time and remembers the deepest terminal node seen. When a
//! token has no child, the remembered entry is the match; if no terminal was
//! reached, the start moves forward by a single token and the descent begins
//! again from the root. Running out of text ends the scan: the remembered
//! entry (if any) is the last match and the rest of the input is consumed.

mod matcher;
mod replace;

#[cfg(test)]
mod tests;

use tracing::{debug, trace};

use crate::config::processor::ProcessorConfig;
use crate::data_structures::token_trie::TokenTrie;
use crate::tokenizer::{Tokenizer, UnicodeWordTokenizer};

pub use matcher::{KeywordMatch, Matches, ScanOutcome, ScanState};

/// Token-level keyword processor.
///
/// Build it by inserting phrases, then share it for read-only matching.
/// Matching only needs `&self`, so a finished processor can be wrapped in an
/// `Arc` and used from several threads at once.
#[derive(Debug)]
pub struct KeywordProcessor<T = UnicodeWordTokenizer> {
    /// Dictionary of tokenized phrases
    trie: TokenTrie,

    /// Tokenizer applied to phrases and scanned text alike
    tokenizer: T,
}

impl KeywordProcessor<UnicodeWordTokenizer> {
    /// Creates an empty processor using Unicode word boundaries.
    pub fn new() -> Self {
        Self::with_tokenizer(UnicodeWordTokenizer::new())
    }

    /// Creates an empty processor tuned by `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Processor settings, usually taken from [`crate::config::ScannerConfig`].
    pub fn with_config(config: &ProcessorConfig) -> Self {
        Self::with_config_and_tokenizer(config, UnicodeWordTokenizer::new())
    }
}

impl<T: Tokenizer> KeywordProcessor<T> {
    /// Creates an empty processor using a custom tokenizer.
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self {
            trie: TokenTrie::new(),
            tokenizer,
        }
    }

    /// Creates an empty processor with a custom tokenizer tuned by `config`.
    pub fn with_config_and_tokenizer(config: &ProcessorConfig, tokenizer: T) -> Self {
        Self {
            trie: TokenTrie::with_capacity(config.initial_capacity),
            tokenizer,
        }
    }

    /// Adds `phrase` to the dictionary with itself as payload.
    ///
    /// # Returns
    ///
    /// `true` if the phrase is new, `false` if it was already present.
    pub fn insert(&mut self, phrase: &str) -> bool {
        self.insert_with_payload(phrase, phrase)
    }

    /// Adds `phrase` to the dictionary, reporting `payload` when it matches.
    ///
    /// Inserting a phrase that is already present replaces its payload and
    /// leaves [`len`](Self::len) unchanged. A phrase that tokenizes to
    /// nothing (the empty string) is counted and found by
    /// [`contains`](Self::contains) but never reported by a scan.
    ///
    /// # Arguments
    ///
    /// * `phrase` - The text to search for.
    /// * `payload` - The clean word reported or substituted for it.
    ///
    /// # Returns
    ///
    /// `true` if the phrase is new, `false` if only its payload changed.
    pub fn insert_with_payload(&mut self, phrase: &str, payload: impl Into<String>) -> bool {
        let is_new = self.trie.insert(self.tokenizer.tokens(phrase), payload);
        if is_new {
            debug!(phrase, entries = self.trie.len(), "Keyword added");
        } else {
            trace!(phrase, "Keyword payload replaced");
        }
        is_new
    }

    /// Number of distinct phrases in the dictionary.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Checks whether `phrase` tokenizes to exactly one dictionary entry.
    ///
    /// Prefixes and extensions of an entry do not count: with `"hello world!"`
    /// inserted, `"hello world"` is not contained.
    pub fn contains(&self, phrase: &str) -> bool {
        self.get(phrase).is_some()
    }

    /// Returns the payload of the entry `phrase` tokenizes to, if any.
    pub fn get(&self, phrase: &str) -> Option<&str> {
        self.trie.get(self.tokenizer.tokens(phrase))
    }

    /// Collects the payload of every match in `text`, in order.
    ///
    /// Text between matches is dropped. The result may contain duplicates.
    pub fn extract_all(&self, text: &str) -> Vec<&str> {
        self.find_iter(text).map(|found| found.payload).collect()
    }

    /// The tokenizer in use.
    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// The underlying trie.
    pub fn trie(&self) -> &TokenTrie {
        &self.trie
    }
}

impl<T: Tokenizer + Default> Default for KeywordProcessor<T> {
    fn default() -> Self {
        Self::with_tokenizer(T::default())
    }
}

impl<T, K, V> Extend<(K, V)> for KeywordProcessor<T>
where
    T: Tokenizer,
    K: AsRef<str>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (phrase, payload) in iter {
            self.insert_with_payload(phrase.as_ref(), payload);
        }
    }
}

impl<'a, T: Tokenizer> Extend<&'a str> for KeywordProcessor<T> {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for phrase in iter {
            self.insert(phrase);
        }
    }
}

impl<T, K, V> FromIterator<(K, V)> for KeywordProcessor<T>
where
    T: Tokenizer + Default,
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut processor = Self::default();
        processor.extend(iter);
        processor
    }
}
