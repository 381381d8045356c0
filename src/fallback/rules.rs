/*!
 * Built-in reference tables for the fallback rewriters.
 *
 * These are plain data. Components receive them through their constructors,
 * so tests can run any component against a custom table.
 */

use super::rewrite::{MatchMode, RewriteRule, RuleSet};

/// Casual word or phrase → formal replacement, applied in this order.
pub const FORMAL_PHRASES: &[(&str, &str)] = &[
    ("a lot", "significantly"),
    ("amazing", "remarkable"),
    ("awesome", "impressive"),
    ("bad", "unfavorable"),
    ("big", "substantial"),
    ("boss", "supervisor"),
    ("buy", "purchase"),
    ("cool", "excellent"),
    ("crazy", "extraordinary"),
    ("deal with", "address"),
    ("do", "perform"),
    ("get", "obtain"),
    ("good", "satisfactory"),
    ("great", "exceptional"),
    ("happy", "pleased"),
    ("hate", "strongly dislike"),
    ("help", "assist"),
    ("huge", "extensive"),
    ("job", "position"),
    ("kids", "children"),
    ("know", "understand"),
    ("like", "appreciate"),
    ("look at", "examine"),
    ("love", "greatly appreciate"),
    ("makes sense", "is logical"),
    ("meet", "convene"),
    ("nice", "agreeable"),
    ("old", "previous"),
    ("pretty", "relatively"),
    ("right now", "currently"),
    ("show", "demonstrate"),
    ("stuff", "materials"),
    ("sure", "certainly"),
    ("tell", "inform"),
    ("think", "believe"),
    ("totally", "completely"),
    ("use", "utilize"),
    ("want", "desire"),
    ("yeah", "yes"),
    ("you know", ""),
];

/// English contractions and their expansions.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("won't", "will not"),
    ("can't", "cannot"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("haven't", "have not"),
    ("hasn't", "has not"),
    ("hadn't", "had not"),
    ("wouldn't", "would not"),
    ("couldn't", "could not"),
    ("shouldn't", "should not"),
    ("I'm", "I am"),
    ("you're", "you are"),
    ("he's", "he is"),
    ("she's", "she is"),
    ("it's", "it is"),
    ("we're", "we are"),
    ("they're", "they are"),
    ("I've", "I have"),
    ("you've", "you have"),
    ("we've", "we have"),
    ("they've", "they have"),
    ("I'll", "I will"),
    ("you'll", "you will"),
    ("he'll", "he will"),
    ("she'll", "she will"),
    ("it'll", "it will"),
    ("we'll", "we will"),
    ("they'll", "they will"),
    ("I'd", "I would"),
    ("you'd", "you would"),
    ("he'd", "he would"),
    ("she'd", "she would"),
    ("it'd", "it would"),
    ("we'd", "we would"),
    ("they'd", "they would"),
];

/// Wordy phrases and their shorter forms. An empty replacement deletes the phrase.
pub const FILLER_PHRASES: &[(&str, &str)] = &[
    ("in order to", "to"),
    ("due to the fact that", "because"),
    ("for the purpose of", "for"),
    ("in the event that", "if"),
    ("in the process of", "while"),
    ("with regard to", "about"),
    ("with the exception of", "except"),
    ("in spite of the fact that", "although"),
    ("as a matter of fact", "actually"),
    ("for all intents and purposes", "essentially"),
    ("in a manner of speaking", "somewhat"),
    ("at the present time", "now"),
    ("for the most part", "mostly"),
    ("on the grounds that", "because"),
    ("in light of the fact that", "because"),
    ("it should be noted that", ""),
    ("it is important to note that", ""),
    ("needless to say", ""),
    ("the fact of the matter is", ""),
    ("as far as I am concerned", ""),
    ("in my personal opinion", ""),
];

/// Redundant `<qualifier> <noun>` pairs; any listed qualifier collapses into the noun.
/// Only the full pair is rewritten: a bare "totally" or "completely" with no
/// "eliminated" after it is left as written.
pub const REDUNDANT_PAIRS: &[(&[&str], &str)] = &[
    (&["completely", "totally", "absolutely"], "eliminated"),
    (&["future"], "plans"),
    (&["past"], "history"),
    (&["unexpected"], "surprise"),
    (&["repeat"], "again"),
    (&["final"], "outcome"),
    (&["basic"], "fundamentals"),
    (&["true"], "facts"),
    (&["free"], "gift"),
    (&["new"], "innovation"),
    (&["personal"], "opinion"),
    (&["advance"], "planning"),
    (&["current"], "trend"),
    (&["various"], "different"),
    (&["each"], "individual"),
];

/// Built-in casual → formal rules
pub fn formal_phrase_rules() -> RuleSet {
    RuleSet::from_pairs(FORMAL_PHRASES, MatchMode::WholeWord)
}

/// Built-in contraction expansion rules
pub fn contraction_rules() -> RuleSet {
    RuleSet::from_pairs(CONTRACTIONS, MatchMode::WholeWord)
}

/// Built-in filler phrase rules
pub fn filler_rules() -> RuleSet {
    RuleSet::from_pairs(FILLER_PHRASES, MatchMode::Substring)
}

/// Built-in redundant pair rules, one rule per qualifier in table order
pub fn redundancy_rules() -> RuleSet {
    let mut rules = RuleSet::default();
    for (qualifiers, noun) in REDUNDANT_PAIRS {
        for qualifier in *qualifiers {
            rules.push(RewriteRule::new(
                &format!("{} {}", qualifier, noun),
                noun,
                MatchMode::Substring,
            ));
        }
    }
    rules
}
