// Copyright (c) 2025 Keyword Scanner Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the Keyword Processor.

use std::borrow::Cow;
use std::collections::HashSet;

use proptest::prelude::*;

use crate::data_structures::keyword_processor::{KeywordProcessor, ScanState};
use crate::tokenizer::{Tokenizer, UnicodeWordTokenizer};

// Small alphabet so that phrases actually occur in the generated texts
fn phrase_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{1,2}( [ab]{1,2}){0,2}").unwrap()
}

fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(phrase_strategy(), 1..8)
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab ,.]{0,60}").unwrap()
}

fn build(phrases: &[String]) -> KeywordProcessor {
    let mut processor = KeywordProcessor::new();
    for phrase in phrases {
        processor.insert_with_payload(phrase, phrase.to_uppercase());
    }
    processor
}

proptest! {
    // Property: an empty dictionary leaves any text untouched and unallocated
    #[test]
    fn prop_empty_dictionary_is_identity(text in any::<String>()) {
        let processor = KeywordProcessor::new();
        let replaced = processor.replace_all(&text);
        prop_assert!(matches!(replaced, Cow::Borrowed(_)));
        prop_assert_eq!(replaced.as_ref(), text.as_str());
        prop_assert!(processor.extract_all(&text).is_empty());
    }

    // Property: identity payloads make replacement a no-op
    #[test]
    fn prop_identity_payload_preserves_text(phrases in dictionary_strategy(), text in text_strategy()) {
        let mut processor = KeywordProcessor::new();
        for phrase in &phrases {
            processor.insert(phrase);
        }
        let replaced = processor.replace_all(&text);
        prop_assert_eq!(replaced.as_ref(), text.as_str());
    }

    // Property: len counts distinct tokenizations
    #[test]
    fn prop_len_counts_distinct_phrases(phrases in dictionary_strategy()) {
        let processor = build(&phrases);
        let distinct: HashSet<&String> = phrases.iter().collect();
        prop_assert_eq!(processor.len(), distinct.len());
        for phrase in &phrases {
            prop_assert!(processor.contains(phrase));
        }
    }

    // Property: every span is ordered, disjoint and tokenizes to an inserted phrase
    #[test]
    fn prop_spans_are_disjoint_entries(phrases in dictionary_strategy(), text in text_strategy()) {
        let processor = build(&phrases);
        let tokenizer = UnicodeWordTokenizer::new();
        let mut previous_end = 0;

        for found in processor.find_iter(&text) {
            prop_assert!(found.span.start >= previous_end);
            prop_assert!(found.span.end > found.span.start);
            previous_end = found.span.end;

            let matched = &text[found.span.clone()];
            prop_assert_eq!(processor.get(matched), Some(found.payload));
            prop_assert!(tokenizer.tokens(matched).count() > 0);
        }
    }

    // Property: chained scan_first calls, extract_all and replace_all agree
    #[test]
    fn prop_operations_agree(phrases in dictionary_strategy(), text in text_strategy()) {
        let processor = build(&phrases);

        let mut scanned = Vec::new();
        let mut rebuilt = String::new();
        let mut remaining = text.as_str();
        let mut state = ScanState::INITIAL;
        let mut last_end = 0;
        loop {
            let outcome = processor.scan_first(remaining, state);
            match outcome.matched {
                Some(found) => {
                    rebuilt.push_str(&text[last_end..found.span.start]);
                    rebuilt.push_str(found.payload);
                    last_end = found.span.end;
                    scanned.push(found.payload);
                }
                None => {
                    rebuilt.push_str(&text[last_end..]);
                    break;
                }
            }
            remaining = outcome.remaining;
            state = outcome.state;
        }

        prop_assert_eq!(&scanned, &processor.extract_all(&text));
        let replaced = processor.replace_all(&text);
        prop_assert_eq!(rebuilt.as_str(), replaced.as_ref());
    }
}
