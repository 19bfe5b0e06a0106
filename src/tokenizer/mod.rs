// Copyright (c) 2025 Keyword Scanner Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tokenizers used to split phrases and scanned text into tokens.
//!
//! Matching happens at token granularity: a keyword like `"new york"` is the
//! token sequence `["new", " ", "york"]` and only matches where the scanned
//! text produces the same sequence. Whitespace and punctuation are tokens of
//! their own, so `" world"` and `"world"` are different dictionary entries.
//!
//! # Available Tokenizers
//!
//! - [`UnicodeWordTokenizer`] - Unicode word boundaries (UAX #29), the default
//! - [`WhitespaceTokenizer`] - alternating runs of whitespace and non-whitespace
//!
//! # Examples
//!
//! ```
//! use keyword_scanner::tokenizer::{Tokenizer, UnicodeWordTokenizer};
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<&str> = tokenizer.tokens("hello, world!").collect();
//! assert_eq!(tokens, vec!["hello", ",", " ", "world", "!"]);
//! ```

mod unicode_word;
mod whitespace;

pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;

/// Trait for tokenizers that split text into a succession of tokens.
///
/// Implementations must be deterministic and resumable: tokenizing the text
/// that follows a returned token must yield the same tokens as continuing
/// over the full original text. The scanner relies on this to restart a
/// match attempt from any token boundary.
pub trait Tokenizer {
    /// Returns the first token of `text`, or `None` once `text` is empty.
    ///
    /// The returned token must be a non-empty prefix of `text`.
    fn next_token<'t>(&self, text: &'t str) -> Option<&'t str>;

    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Returns an iterator over every token of `text`.
    fn tokens<'a, 't>(&'a self, text: &'t str) -> Tokens<'a, 't, Self>
    where
        Self: Sized,
    {
        Tokens {
            tokenizer: self,
            rest: text,
        }
    }
}

/// Iterator over the tokens of a text, created by [`Tokenizer::tokens`].
#[derive(Debug)]
pub struct Tokens<'a, 't, T> {
    tokenizer: &'a T,
    rest: &'t str,
}

impl<'a, 't, T: Tokenizer> Iterator for Tokens<'a, 't, T> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokenizer.next_token(self.rest)?;
        debug_assert!(
            !token.is_empty() && self.rest.starts_with(token),
            "tokenizer {} returned a token that is not a non-empty prefix",
            self.tokenizer.name()
        );
        self.rest = &self.rest[token.len()..];
        Some(token)
    }
}

impl<'a, 't, T: Tokenizer> std::iter::FusedIterator for Tokens<'a, 't, T> {}
