/*!
 * Casual → formal rewriter.
 */

use super::rewrite::RuleSet;
use super::rules;

/// Rewrites casual wording, then expands contractions
#[derive(Debug, Clone)]
pub struct Formalizer {
    phrases: RuleSet,
    contractions: RuleSet,
}

impl Formalizer {
    pub fn new(phrases: RuleSet, contractions: RuleSet) -> Self {
        Self { phrases, contractions }
    }

    /// Rewrite `text` in a more formal register.
    ///
    /// The phrase table runs before the contraction table. Both are single
    /// passes, so running the result through again may change it further.
    pub fn formalize(&self, text: &str) -> String {
        let rephrased = self.phrases.apply(text);
        self.contractions.apply(&rephrased)
    }
}

impl Default for Formalizer {
    fn default() -> Self {
        Self::new(rules::formal_phrase_rules(), rules::contraction_rules())
    }
}
