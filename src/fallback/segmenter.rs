/*!
 * Sentence segmentation.
 *
 * A sentence is a maximal run of non-terminator characters followed by one or
 * more of `.`, `!` or `?`. Sentences are returned as raw slices of the input,
 * so the whitespace between two sentences stays at the front of the second one.
 */

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^.!?]+[.!?]+").expect("valid regex")
});

/// Lazy iterator over the sentences of a text.
///
/// Yields nothing when the text has no terminator; use [`split_sentences`]
/// for the "whole text is one sentence" fallback.
pub struct Sentences<'a> {
    matches: regex::Matches<'static, 'a>,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches.next().map(|m| m.as_str())
    }
}

/// Iterate over the terminated sentences of `text`.
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences {
        matches: SENTENCE_PATTERN.find_iter(text),
    }
}

/// Split `text` into sentences.
///
/// When no terminated sentence exists the whole text is returned as the only
/// element, which also means an empty text yields `[""]`.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let found: Vec<&str> = sentences(text).collect();
    if found.is_empty() {
        vec![text]
    } else {
        found
    }
}

/// Number of sentences `split_sentences` would return, without allocating.
pub fn sentence_count(text: &str) -> usize {
    sentences(text).count().max(1)
}
