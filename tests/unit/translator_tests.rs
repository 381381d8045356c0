/*!
 * Tests for the translation lexicon and placeholder translator
 */

use scrivai::errors::LexiconError;
use scrivai::fallback::translator::{
    ToyTranslator, TranslationLexicon, BUILTIN_LANGUAGES, ENGLISH_REFERENCE, FALLBACK_TRANSLATION_NOTICE,
};

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_builtinLanguages_shouldAllAlignWithReference() {
    for (language, words) in BUILTIN_LANGUAGES {
        assert_eq!(words.len(), ENGLISH_REFERENCE.len(), "{} is misaligned", language);
    }
}

#[test]
fn test_lookup_caseInsensitiveName_shouldResolve() {
    let lexicon = TranslationLexicon::builtin();
    let (name, words) = lexicon.lookup("jApAnEsE").expect("Japanese should be known");
    assert_eq!(name, "Japanese");
    assert_eq!(words[0], "こんにちは");
}

#[test]
fn test_lookup_part2bCode_shouldResolve() {
    let lexicon = TranslationLexicon::builtin();
    assert_eq!(lexicon.lookup("chi").map(|(name, _)| name), Some("Chinese"));
    assert_eq!(lexicon.lookup("fre").map(|(name, _)| name), Some("French"));
}

#[test]
fn test_new_tooManyWords_shouldReportCounts() {
    let result = TranslationLexicon::new(owned(&["Hello"]), vec![("Dutch".to_string(), owned(&["Hallo", "Dag"]))]);
    match result {
        Err(LexiconError::Misaligned { language, expected, actual }) => {
            assert_eq!(language, "Dutch");
            assert_eq!(expected, 1);
            assert_eq!(actual, 2);
        }
        other => panic!("expected a misalignment error, got {:?}", other),
    }
}

#[test]
fn test_translate_customLexicon_shouldUseReferenceOrder() {
    let lexicon = TranslationLexicon::new(
        owned(&["Yes", "No"]),
        vec![("Dutch".to_string(), owned(&["Ja", "Nee"]))],
    )
    .unwrap();
    let translator = ToyTranslator::new(lexicon);

    assert_eq!(
        translator.translate("yes or no?", "dutch"),
        format!("Ja or Nee?{}", FALLBACK_TRANSLATION_NOTICE)
    );
}

#[test]
fn test_translate_nonLatinTarget_shouldSubstitute() {
    let translated = ToyTranslator::default().translate("Thank you. Goodbye.", "Hindi");
    assert!(translated.starts_with("धन्यवाद. अलविदा."));
}

#[test]
fn test_translate_englishTarget_shouldNormalizeCase() {
    let translated = ToyTranslator::default().translate("hello, please", "English");
    assert!(translated.starts_with("Hello, Please"));
}
