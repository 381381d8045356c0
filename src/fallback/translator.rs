/*!
 * Placeholder word-substitution translator.
 *
 * This only swaps a handful of greetings and courtesy words for their
 * equivalents and then says so in an appended note. It is a stand-in shown
 * while the remote model is unreachable, not a translation engine.
 */

use std::collections::BTreeMap;

use crate::errors::LexiconError;
use crate::language_utils;

use super::rewrite::{MatchMode, RewriteRule};

/// Appended when the target language is not in the lexicon
pub const UNSUPPORTED_LANGUAGE_NOTICE: &str =
    " [This is a fallback translation. Please enter a valid Gemini API key for better results.]";

/// Appended after a lexicon-based substitution
pub const FALLBACK_TRANSLATION_NOTICE: &str =
    "\n\n[Note: This is a basic fallback translation. Enter a valid Gemini API key for better results.]";

/// English reference words; every language list is aligned with this one
pub const ENGLISH_REFERENCE: &[&str] = &["Hello", "Thank you", "Goodbye", "Yes", "No", "Please", "Sorry"];

/// Built-in target languages, aligned with [`ENGLISH_REFERENCE`]
pub const BUILTIN_LANGUAGES: &[(&str, &[&str])] = &[
    ("English", ENGLISH_REFERENCE),
    ("Spanish", &["Hola", "Gracias", "Adiós", "Sí", "No", "Por favor", "Lo siento"]),
    ("French", &["Bonjour", "Merci", "Au revoir", "Oui", "Non", "S'il vous plaît", "Désolé"]),
    ("German", &["Hallo", "Danke", "Auf Wiedersehen", "Ja", "Nein", "Bitte", "Entschuldigung"]),
    ("Chinese", &["你好", "谢谢", "再见", "是的", "不", "请", "对不起"]),
    ("Japanese", &["こんにちは", "ありがとう", "さようなら", "はい", "いいえ", "お願いします", "ごめんなさい"]),
    ("Hindi", &["नमस्ते", "धन्यवाद", "अलविदा", "हां", "नहीं", "कृपया", "माफ़ करें"]),
    ("Arabic", &["مرحبا", "شكرا لك", "مع السلامة", "نعم", "لا", "من فضلك", "آسف"]),
];

/// Language name → word list aligned with an English reference list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationLexicon {
    reference: Vec<String>,
    languages: BTreeMap<String, Vec<String>>,
}

impl TranslationLexicon {
    /// Build a lexicon, rejecting any list whose length differs from the reference
    pub fn new<I>(reference: Vec<String>, languages: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        if reference.is_empty() {
            return Err(LexiconError::EmptyReference);
        }

        let mut lexicon = Self {
            reference,
            languages: BTreeMap::new(),
        };
        for (language, words) in languages {
            lexicon.insert(language, words)?;
        }
        Ok(lexicon)
    }

    /// The built-in eight-language lexicon
    pub fn builtin() -> Self {
        let reference = ENGLISH_REFERENCE.iter().map(|w| w.to_string()).collect();
        let languages = BUILTIN_LANGUAGES
            .iter()
            .map(|(name, words)| (name.to_string(), words.iter().map(|w| w.to_string()).collect()));
        Self::new(reference, languages).expect("built-in lexicon is aligned")
    }

    /// Add a language, validating its alignment
    pub fn insert(&mut self, language: String, words: Vec<String>) -> Result<(), LexiconError> {
        if words.len() != self.reference.len() {
            return Err(LexiconError::Misaligned {
                language,
                expected: self.reference.len(),
                actual: words.len(),
            });
        }
        if self.lookup(&language).is_some() {
            return Err(LexiconError::DuplicateLanguage(language));
        }
        self.languages.insert(language, words);
        Ok(())
    }

    pub fn reference(&self) -> &[String] {
        &self.reference
    }

    /// Names of all supported languages
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Resolve a language name or ISO code to its entry
    pub fn lookup(&self, language: &str) -> Option<(&str, &[String])> {
        let wanted = language.trim();
        let by_name = |name: &str| {
            self.languages
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(key, words)| (key.as_str(), words.as_slice()))
        };

        by_name(wanted).or_else(|| {
            language_utils::get_language_name(wanted)
                .ok()
                .and_then(|name| by_name(&name))
        })
    }
}

impl Default for TranslationLexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Lexicon-driven placeholder translator
#[derive(Debug, Clone, Default)]
pub struct ToyTranslator {
    lexicon: TranslationLexicon,
}

impl ToyTranslator {
    pub fn new(lexicon: TranslationLexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &TranslationLexicon {
        &self.lexicon
    }

    /// Substitute known words for their `target_language` equivalents
    pub fn translate(&self, text: &str, target_language: &str) -> String {
        let Some((_, words)) = self.lexicon.lookup(target_language) else {
            return format!("{}{}", text, UNSUPPORTED_LANGUAGE_NOTICE);
        };

        let mut translated = self
            .lexicon
            .reference()
            .iter()
            .zip(words)
            .fold(text.to_string(), |current, (english, target)| {
                RewriteRule::new(english, target, MatchMode::WholeWord).apply(&current)
            });
        translated.push_str(FALLBACK_TRANSLATION_NOTICE);
        translated
    }
}
