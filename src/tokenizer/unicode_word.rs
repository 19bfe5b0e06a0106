//! Unicode word boundary tokenizer.
//!
//! Splits text on the word boundaries of Unicode Standard Annex #29. Unlike a
//! search-engine analyzer this keeps every segment: whitespace and
//! punctuation runs come back as tokens so that replacement can reassemble
//! the original text byte for byte.

use unicode_segmentation::UnicodeSegmentation;

use super::Tokenizer;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// # Examples
///
/// ```
/// use keyword_scanner::tokenizer::{Tokenizer, UnicodeWordTokenizer};
///
/// let tokenizer = UnicodeWordTokenizer::new();
/// assert_eq!(tokenizer.next_token("café résumé"), Some("café"));
/// assert_eq!(tokenizer.next_token(" résumé"), Some(" "));
/// assert_eq!(tokenizer.next_token(""), None);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn next_token<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.split_word_bounds().next()
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
