/*!
 * Conciseness reducer.
 *
 * Three passes: filler phrases, redundant word pairs, then a per-sentence
 * cleanup that drops weak sentence openers.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::rewrite::RuleSet;
use super::rules;
use super::segmenter::split_sentences;

static THERE_OPENER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^There (is|are) ").expect("valid regex")
});

static IT_IS_OPENER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^It is ").expect("valid regex")
});

/// Shortens wordy text
#[derive(Debug, Clone)]
pub struct ConcisenessReducer {
    fillers: RuleSet,
    redundancies: RuleSet,
}

impl ConcisenessReducer {
    pub fn new(fillers: RuleSet, redundancies: RuleSet) -> Self {
        Self { fillers, redundancies }
    }

    /// Make `text` more concise
    pub fn reduce(&self, text: &str) -> String {
        let without_fillers = self.fillers.apply(text);
        let collapsed = self.redundancies.apply(&without_fillers);

        split_sentences(&collapsed)
            .into_iter()
            .map(strip_weak_opener)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ConcisenessReducer {
    fn default() -> Self {
        Self::new(rules::filler_rules(), rules::redundancy_rules())
    }
}

/// Drop a leading "There is/are " and then a leading "It is ", then trim
fn strip_weak_opener(sentence: &str) -> String {
    let sentence = THERE_OPENER.replace(sentence, "");
    let sentence = IT_IS_OPENER.replace(&sentence, "");
    sentence.trim().to_string()
}
