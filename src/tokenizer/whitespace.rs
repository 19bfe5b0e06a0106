//! Whitespace run tokenizer.

use super::Tokenizer;

/// A tokenizer that alternates between runs of whitespace and runs of
/// non-whitespace characters.
///
/// Punctuation stays attached to the word it touches, so `"world!"` is a
/// single token here while [`super::UnicodeWordTokenizer`] splits it in two.
///
/// ```
/// use keyword_scanner::tokenizer::{Tokenizer, WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens: Vec<&str> = tokenizer.tokens("hello,  world!").collect();
/// assert_eq!(tokens, vec!["hello,", "  ", "world!"]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn next_token<'t>(&self, text: &'t str) -> Option<&'t str> {
        let first = text.chars().next()?;
        let in_space = first.is_whitespace();
        let end = text
            .char_indices()
            .find(|(_, c)| c.is_whitespace() != in_space)
            .map_or(text.len(), |(idx, _)| idx);
        Some(&text[..end])
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_runs() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<&str> = tokenizer.tokens("  a\tb  c\n").collect();
        assert_eq!(tokens, vec!["  ", "a", "\t", "b", "  ", "c", "\n"]);
    }

    #[test]
    fn test_multibyte_characters() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<&str> = tokenizer.tokens("über\u{3000}straße").collect();
        assert_eq!(tokens, vec!["über", "\u{3000}", "straße"]);
    }
}
