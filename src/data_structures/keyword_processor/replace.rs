//! Keyword replacement.

use std::borrow::Cow;

use tracing::debug;

use super::KeywordProcessor;
use crate::tokenizer::Tokenizer;

impl<T: Tokenizer> KeywordProcessor<T> {
    /// Replaces every keyword found in `text` with its payload.
    ///
    /// Matched spans are cut out exactly and replaced; everything between and
    /// around them is copied through unchanged. When nothing matches, `text`
    /// is returned borrowed.
    ///
    /// # Example
    ///
    /// ```
    /// use keyword_scanner::data_structures::keyword_processor::KeywordProcessor;
    ///
    /// let mut processor = KeywordProcessor::new();
    /// processor.insert_with_payload("hello", "hey");
    /// processor.insert_with_payload("hey", "hello");
    ///
    /// assert_eq!(
    ///     processor.replace_all("hey jack, hello sarah"),
    ///     "hello jack, hey sarah"
    /// );
    /// ```
    pub fn replace_all<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut matches = self.find_iter(text).peekable();
        if matches.peek().is_none() {
            return Cow::Borrowed(text);
        }

        let mut output = String::with_capacity(text.len());
        let mut copied_up_to = 0;
        let mut replaced = 0usize;
        for found in matches {
            output.push_str(&text[copied_up_to..found.span.start]);
            output.push_str(found.payload);
            copied_up_to = found.span.end;
            replaced += 1;
        }
        output.push_str(&text[copied_up_to..]);

        debug!(replaced, tokenizer = self.tokenizer.name(), "Keywords replaced");
        Cow::Owned(output)
    }
}
