/*!
 * Extractive summarizer.
 *
 * Picks the first sentence, a few evenly spaced sentences and the last
 * sentence, and joins them in the order they were picked.
 */

use super::segmenter::split_sentences;

/// Documents with at most this many sentences are returned unchanged
const IDENTITY_SENTENCE_LIMIT: usize = 3;

/// How the summarizer recognises a sentence it has already picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Compare sentence text. Verbatim repeats are picked at most once,
    /// which can leave the summary shorter than planned.
    #[default]
    ByText,
    /// Compare sentence positions, so repeated text can be picked again
    ByIndex,
}

/// Sentence-sampling summarizer
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    policy: DuplicatePolicy,
}

impl Summarizer {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Number of sentences a summary of `sentence_count` sentences aims for
    pub fn target_length(sentence_count: usize) -> usize {
        (sentence_count / 3).max(2)
    }

    /// Summarize `text`
    pub fn summarize(&self, text: &str) -> String {
        let sentences = split_sentences(text);
        if sentences.len() <= IDENTITY_SENTENCE_LIMIT {
            return text.to_string();
        }

        self.select(&sentences)
            .into_iter()
            .map(|index| sentences[index].trim())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Indices of the picked sentences, in pick order
    fn select(&self, sentences: &[&str]) -> Vec<usize> {
        let count = sentences.len();
        let wanted = Self::target_length(count);
        let mut picked = vec![0];

        if wanted > 2 {
            let step = count / wanted;
            for i in 1..wanted - 1 {
                let index = (i * step) % count;
                if !self.already_picked(sentences, &picked, index) {
                    picked.push(index);
                }
            }
        }

        let last = count - 1;
        if !self.already_picked(sentences, &picked, last) {
            picked.push(last);
        }
        picked
    }

    fn already_picked(&self, sentences: &[&str], picked: &[usize], candidate: usize) -> bool {
        match self.policy {
            DuplicatePolicy::ByText => picked.iter().any(|&i| sentences[i] == sentences[candidate]),
            DuplicatePolicy::ByIndex => picked.contains(&candidate),
        }
    }
}
