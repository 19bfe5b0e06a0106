// Copyright (c) 2025 Keyword Scanner Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Longest-match scanning over the token trie.
//!
//! Every matching operation of the processor goes through
//! [`KeywordProcessor::find_at`]: first-match scanning, the [`Matches`]
//! iterator, extraction and replacement only differ in how they fold the
//! matches it produces.

use std::iter::FusedIterator;
use std::ops::Range;

use super::KeywordProcessor;
use crate::tokenizer::Tokenizer;

/// A dictionary entry found in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch<'k> {
    /// Payload of the matched entry
    pub payload: &'k str,

    /// Byte range of the matched text
    pub span: Range<usize>,
}

/// Resumption state for [`KeywordProcessor::scan_first`].
///
/// Records how far into the original input the remaining text starts, so
/// that match spans reported by successive scans refer to the original
/// input rather than to the remaining slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScanState {
    offset: usize,
}

impl ScanState {
    /// State for the start of a fresh input.
    pub const INITIAL: ScanState = ScanState { offset: 0 };

    /// Byte offset of the remaining text within the original input.
    pub fn offset(self) -> usize {
        self.offset
    }

    fn advance(self, bytes: usize) -> Self {
        ScanState {
            offset: self.offset + bytes,
        }
    }
}

/// Result of a single [`KeywordProcessor::scan_first`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome<'k, 't> {
    /// The first match, with its span relative to the original input
    pub matched: Option<KeywordMatch<'k>>,

    /// Text following the match, or the empty tail when nothing matched
    pub remaining: &'t str,

    /// State to pass along with `remaining` to continue scanning
    pub state: ScanState,
}

impl<'k, 't> ScanOutcome<'k, 't> {
    /// Whether a keyword was found.
    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }

    /// Payload of the keyword found, if any.
    pub fn payload(&self) -> Option<&'k str> {
        self.matched.as_ref().map(|found| found.payload)
    }
}

/// A match together with the position the next scan resumes from.
#[derive(Debug)]
pub(crate) struct Found<'k> {
    pub(crate) matched: KeywordMatch<'k>,
    pub(crate) resume: usize,
}

impl<T: Tokenizer> KeywordProcessor<T> {
    /// Finds the leftmost longest match in `text` starting at byte `from`.
    ///
    /// `from` must lie on a token boundary. A failed descent retries one
    /// token after the attempt start, but running out of tokens ends the
    /// search: the recorded match (if any) is returned and the whole input
    /// counts as consumed.
    pub(crate) fn find_at<'k>(&'k self, text: &str, from: usize) -> Option<Found<'k>> {
        let trie = &self.trie;
        let mut start = from;

        while start < text.len() {
            let mut node = trie.root();
            let mut cursor = start;
            let mut first_token_len = None;
            let mut longest: Option<(usize, &'k str)> = None;
            let mut exhausted = true;

            while let Some(token) = self.tokenizer.next_token(&text[cursor..]) {
                debug_assert!(!token.is_empty(), "tokenizer returned an empty token");
                first_token_len.get_or_insert(token.len());

                let Some(child) = trie.child(node, token) else {
                    exhausted = false;
                    break;
                };
                node = child;
                cursor += token.len();
                if let Some(payload) = trie.payload(child) {
                    longest = Some((cursor, payload));
                }
            }

            if let Some((end, payload)) = longest {
                return Some(Found {
                    matched: KeywordMatch {
                        payload,
                        span: start..end,
                    },
                    resume: if exhausted { text.len() } else { end },
                });
            }
            if exhausted {
                return None;
            }

            // Nothing matched from `start`: retry one token further.
            start += first_token_len?;
        }

        None
    }

    /// Scans `text` for its first keyword.
    ///
    /// `state` comes from the previous call, or is [`ScanState::INITIAL`]
    /// for a fresh input. Feeding `remaining` and `state` of the outcome
    /// back in continues the scan right after the match. When the match was
    /// found with the input exhausted, or nothing matched, `remaining` is
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use keyword_scanner::data_structures::keyword_processor::{KeywordProcessor, ScanState};
    ///
    /// let mut processor = KeywordProcessor::new();
    /// processor.insert("hello");
    /// processor.insert("hello hello");
    /// processor.insert(" world");
    ///
    /// let first = processor.scan_first("hello hello world", ScanState::INITIAL);
    /// assert_eq!(first.payload(), Some("hello hello"));
    /// assert_eq!(first.remaining, " world");
    ///
    /// let second = processor.scan_first(first.remaining, first.state);
    /// assert_eq!(second.payload(), Some(" world"));
    /// assert_eq!(second.matched.unwrap().span, 11..17);
    /// assert_eq!(second.remaining, "");
    /// ```
    pub fn scan_first<'k, 't>(&'k self, text: &'t str, state: ScanState) -> ScanOutcome<'k, 't> {
        match self.find_at(text, 0) {
            Some(Found { matched, resume }) => ScanOutcome {
                matched: Some(KeywordMatch {
                    payload: matched.payload,
                    span: state.offset + matched.span.start..state.offset + matched.span.end,
                }),
                remaining: &text[resume..],
                state: state.advance(resume),
            },
            None => ScanOutcome {
                matched: None,
                remaining: &text[text.len()..],
                state: state.advance(text.len()),
            },
        }
    }

    /// Returns an iterator over all non-overlapping matches in `text`.
    pub fn find_iter<'k, 't>(&'k self, text: &'t str) -> Matches<'k, 't, T> {
        Matches {
            processor: self,
            text,
            position: 0,
        }
    }
}

/// Iterator over the matches of a processor in a text, left to right.
///
/// Created by [`KeywordProcessor::find_iter`].
#[derive(Debug)]
pub struct Matches<'k, 't, T> {
    processor: &'k KeywordProcessor<T>,
    text: &'t str,
    position: usize,
}

impl<'k, 't, T> Matches<'k, 't, T> {
    /// The text being scanned.
    pub fn text(&self) -> &'t str {
        self.text
    }
}

impl<'k, 't, T: Tokenizer> Iterator for Matches<'k, 't, T> {
    type Item = KeywordMatch<'k>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.processor.find_at(self.text, self.position) {
            Some(Found { matched, resume }) => {
                self.position = resume;
                Some(matched)
            }
            None => {
                self.position = self.text.len();
                None
            }
        }
    }
}

impl<'k, 't, T: Tokenizer> FusedIterator for Matches<'k, 't, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor(phrases: &[&str]) -> KeywordProcessor {
        let mut processor = KeywordProcessor::new();
        processor.extend(phrases.iter().copied());
        processor
    }

    #[test]
    fn test_find_at_longest_match() {
        let processor = processor(&["hello", "hello hello"]);
        let found = processor.find_at("hello hello world", 0).unwrap().matched;
        assert_eq!(found.payload, "hello hello");
        assert_eq!(found.span, 0..11);
    }

    #[test]
    fn test_find_at_retries_one_token_later() {
        let processor = processor(&["a b c d x", "d e f"]);
        let text = "a b c d e f";
        let found = processor.find_at(text, 0).unwrap().matched;
        assert_eq!(found.payload, "d e f");
        assert_eq!(&text[found.span], "d e f");
    }

    #[test]
    fn test_find_at_keeps_shorter_match_after_failed_extension() {
        let processor = processor(&["x", "x y z"]);
        let text = "x y q";
        let found = processor.find_at(text, 0).unwrap();
        assert_eq!(found.matched.payload, "x");
        assert_eq!(found.matched.span, 0..1);
        assert_eq!(found.resume, 1);
    }

    #[test]
    fn test_exhausted_walk_without_match_stops() {
        let processor = processor(&["a b c", "b"]);
        assert!(processor.find_at("a b", 0).is_none());

        let outcome = processor.scan_first("a b", ScanState::INITIAL);
        assert!(!outcome.is_match());
        assert_eq!(outcome.remaining, "");
        assert_eq!(outcome.state.offset(), 3);
        assert!(processor.extract_all("a b").is_empty());
    }

    #[test]
    fn test_exhausted_walk_keeps_match_and_consumes_input() {
        let processor = processor(&["a", "a b c", "b"]);
        let found = processor.find_at("a b", 0).unwrap();
        assert_eq!(found.matched.payload, "a");
        assert_eq!(found.matched.span, 0..1);
        assert_eq!(found.resume, 3);

        let outcome = processor.scan_first("a b", ScanState::INITIAL);
        assert_eq!(outcome.payload(), Some("a"));
        assert_eq!(outcome.remaining, "");
        assert_eq!(processor.extract_all("a b"), vec!["a"]);
    }

    #[test]
    fn test_empty_entry_never_matches() {
        let processor = processor(&[""]);
        assert_eq!(processor.len(), 1);
        assert!(processor.find_at("anything at all", 0).is_none());
        assert!(processor.find_at("", 0).is_none());
    }

    #[test]
    fn test_scan_state_tracks_offsets() {
        let processor = processor(&["b"]);
        let text = "a b a b";

        let first = processor.scan_first(text, ScanState::INITIAL);
        assert_eq!(first.matched.as_ref().map(|m| m.span.clone()), Some(2..3));
        assert_eq!(first.state.offset(), 3);

        let second = processor.scan_first(first.remaining, first.state);
        assert_eq!(second.matched.as_ref().map(|m| m.span.clone()), Some(6..7));
        assert_eq!(second.state.offset(), text.len());

        let third = processor.scan_first(second.remaining, second.state);
        assert!(!third.is_match());
        assert_eq!(third.state.offset(), text.len());
    }

    #[test]
    fn test_scan_without_match_consumes_everything() {
        let processor = processor(&["zzz"]);
        let outcome = processor.scan_first("no keywords here", ScanState::INITIAL);
        assert!(!outcome.is_match());
        assert_eq!(outcome.remaining, "");
        assert_eq!(outcome.state.offset(), "no keywords here".len());
    }

    #[test]
    fn test_matches_iterator_is_fused() {
        let processor = processor(&["a"]);
        let mut matches = processor.find_iter("a a");
        assert_eq!(matches.text(), "a a");
        assert!(matches.next().is_some());
        assert!(matches.next().is_some());
        assert!(matches.next().is_none());
        assert!(matches.next().is_none());
    }
}
