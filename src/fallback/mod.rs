/*!
 * Local text-transformation fallback engine.
 *
 * Deterministic, rule-based rewriters that run when the remote model cannot
 * be reached:
 * - `segmenter`: sentence splitting shared by the other components
 * - `rewrite`: the phrase scanner behind every substitution table
 * - `rules`: the built-in substitution tables
 * - `summarizer`, `tone`, `formalizer`, `concise`, `translator`: one
 *   component per transformation
 *
 * Every component receives its tables at construction and never mutates
 * them, so an engine can be shared freely between tasks.
 */

use std::fmt;

use crate::app_config::FallbackConfig;
use crate::errors::LexiconError;

pub mod concise;
pub mod formalizer;
pub mod rewrite;
pub mod rules;
pub mod segmenter;
pub mod summarizer;
pub mod tone;
pub mod translator;

pub use concise::ConcisenessReducer;
pub use formalizer::Formalizer;
pub use rewrite::{MatchMode, RewriteRule, RuleSet};
pub use segmenter::split_sentences;
pub use summarizer::{DuplicatePolicy, Summarizer};
pub use tone::{ToneClassifier, ToneLabel, ToneMarkers, ToneReport};
pub use translator::{ToyTranslator, TranslationLexicon};

/// A text transformation the assistant offers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Summarize,
    Tone,
    Formal,
    Concise,
    /// Translate into the named language
    Translate(String),
}

impl TransformKind {
    /// Title shown above a result
    pub fn label(&self) -> String {
        match self {
            Self::Summarize => "Text Summarization".to_string(),
            Self::Tone => "Tone Analysis".to_string(),
            Self::Formal => "Formal Rewriting".to_string(),
            Self::Concise => "Concise Rewriting".to_string(),
            Self::Translate(language) => format!("Translation to {}", language),
        }
    }

    /// Message shown while the transformation runs
    pub fn progress_message(&self) -> String {
        match self {
            Self::Summarize => "Summarizing your text...".to_string(),
            Self::Tone => "Analyzing tone...".to_string(),
            Self::Formal => "Making text more formal...".to_string(),
            Self::Concise => "Making text more concise...".to_string(),
            Self::Translate(language) => format!("Translating to {}...", language),
        }
    }

    /// Target language, for translations
    pub fn target_language(&self) -> Option<&str> {
        match self {
            Self::Translate(language) => Some(language),
            _ => None,
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summarize => f.write_str("summarize"),
            Self::Tone => f.write_str("tone"),
            Self::Formal => f.write_str("formal"),
            Self::Concise => f.write_str("concise"),
            Self::Translate(language) => write!(f, "translate:{}", language),
        }
    }
}

/// One instance of every fallback component
#[derive(Debug, Clone, Default)]
pub struct FallbackEngine {
    summarizer: Summarizer,
    classifier: ToneClassifier,
    formalizer: Formalizer,
    reducer: ConcisenessReducer,
    translator: ToyTranslator,
}

impl FallbackEngine {
    pub fn new(
        summarizer: Summarizer,
        classifier: ToneClassifier,
        formalizer: Formalizer,
        reducer: ConcisenessReducer,
        translator: ToyTranslator,
    ) -> Self {
        Self {
            summarizer,
            classifier,
            formalizer,
            reducer,
            translator,
        }
    }

    /// Engine over the built-in tables only
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Engine configured from the `fallback` config section.
    ///
    /// Extra lexicon languages are validated here, so a misaligned entry is
    /// reported before any text is processed.
    pub fn from_config(config: &FallbackConfig) -> Result<Self, LexiconError> {
        let policy = if config.distinct_summary {
            DuplicatePolicy::ByIndex
        } else {
            DuplicatePolicy::ByText
        };

        let mut lexicon = TranslationLexicon::builtin();
        for (language, words) in &config.extra_languages {
            lexicon.insert(language.clone(), words.clone())?;
        }

        Ok(Self {
            summarizer: Summarizer::new(policy),
            translator: ToyTranslator::new(lexicon),
            ..Self::default()
        })
    }

    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    pub fn translator(&self) -> &ToyTranslator {
        &self.translator
    }

    /// Run the component matching `kind` over `text`
    pub fn apply(&self, kind: &TransformKind, text: &str) -> String {
        match kind {
            TransformKind::Summarize => self.summarizer.summarize(text),
            TransformKind::Tone => self.classifier.classify(text).to_string(),
            TransformKind::Formal => self.formalizer.formalize(text),
            TransformKind::Concise => self.reducer.reduce(text),
            TransformKind::Translate(language) => self.translator.translate(text, language),
        }
    }

    pub fn summarize(&self, text: &str) -> String {
        self.summarizer.summarize(text)
    }

    pub fn classify(&self, text: &str) -> ToneReport {
        self.classifier.classify(text)
    }

    pub fn formalize(&self, text: &str) -> String {
        self.formalizer.formalize(text)
    }

    pub fn make_concise(&self, text: &str) -> String {
        self.reducer.reduce(text)
    }

    pub fn translate(&self, text: &str, target_language: &str) -> String {
        self.translator.translate(text, target_language)
    }
}

/// Summarize with the built-in engine
pub fn summarize(text: &str) -> String {
    Summarizer::default().summarize(text)
}

/// Classify tone with the built-in marker sets
pub fn classify(text: &str) -> ToneReport {
    ToneClassifier::default().classify(text)
}

/// Formalize with the built-in tables
pub fn formalize(text: &str) -> String {
    Formalizer::default().formalize(text)
}

/// Make text concise with the built-in tables
pub fn make_concise(text: &str) -> String {
    ConcisenessReducer::default().reduce(text)
}

/// Translate with the built-in lexicon
pub fn translate(text: &str, target_language: &str) -> String {
    ToyTranslator::default().translate(text, target_language)
}
