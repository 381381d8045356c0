/*!
 * Lexical rewrite rules and their application algorithm.
 *
 * A rule replaces every case-insensitive occurrence of a fixed pattern. Rules
 * in a [`RuleSet`] are applied in order, each one as a single left-to-right,
 * non-overlapping pass over the output of the previous rule. Replacement text
 * is copied verbatim and never rescanned by the rule that produced it.
 */

/// How a rule decides whether an occurrence counts as a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Both ends of the occurrence must sit on an ASCII word boundary
    WholeWord,
    /// Any occurrence matches, even inside a longer word
    Substring,
}

/// A single pattern → replacement rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    pattern: Vec<char>,
    replacement: String,
    mode: MatchMode,
}

impl RewriteRule {
    /// Create a new rule
    pub fn new(pattern: &str, replacement: &str, mode: MatchMode) -> Self {
        Self {
            pattern: pattern.chars().collect(),
            replacement: replacement.to_string(),
            mode,
        }
    }

    /// Pattern text of the rule
    pub fn pattern(&self) -> String {
        self.pattern.iter().collect()
    }

    /// Replacement text of the rule
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Match mode of the rule
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Apply this rule to `text`, returning the rewritten text
    pub fn apply(&self, text: &str) -> String {
        if self.pattern.is_empty() {
            return text.to_string();
        }

        let mut output = String::with_capacity(text.len());
        let mut copied_up_to = 0;
        let mut cursor = 0;

        while cursor < text.len() {
            if let Some(end) = self.match_at(text, cursor) {
                output.push_str(&text[copied_up_to..cursor]);
                output.push_str(&self.replacement);
                copied_up_to = end;
                cursor = end;
                continue;
            }
            cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
        }

        output.push_str(&text[copied_up_to..]);
        output
    }

    /// Byte offset where a match starting at `start` ends, if one does
    fn match_at(&self, text: &str, start: usize) -> Option<usize> {
        if self.mode == MatchMode::WholeWord && !is_word_boundary(text, start) {
            return None;
        }

        let mut haystack = text[start..].char_indices();
        let mut end = start;
        for expected in &self.pattern {
            let (offset, actual) = haystack.next()?;
            if !chars_eq_ignore_case(*expected, actual) {
                return None;
            }
            end = start + offset + actual.len_utf8();
        }

        if self.mode == MatchMode::WholeWord && !is_word_boundary(text, end) {
            return None;
        }
        Some(end)
    }
}

/// Ordered list of rewrite rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<RewriteRule>,
}

impl RuleSet {
    /// Create a rule set from rules
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// Build a rule set from `(pattern, replacement)` pairs sharing one mode
    pub fn from_pairs(pairs: &[(&str, &str)], mode: MatchMode) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(pattern, replacement)| RewriteRule::new(pattern, replacement, mode))
                .collect(),
        )
    }

    /// Append a rule at the end of the set
    pub fn push(&mut self, rule: RewriteRule) {
        self.rules.push(rule);
    }

    /// Rules in application order
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule in order
    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |current, rule| rule.apply(&current))
    }
}

/// Word characters are ASCII letters, digits and underscore
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// True when exactly one side of byte offset `pos` is a word character
fn is_word_boundary(text: &str, pos: usize) -> bool {
    let before = text[..pos].chars().next_back().is_some_and(is_word_char);
    let after = text[pos..].chars().next().is_some_and(is_word_char);
    before != after
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
