/*!
 * Tests for the local fallback engine
 */

use scrivai::fallback::rewrite::{MatchMode, RewriteRule, RuleSet};
use scrivai::fallback::segmenter::{sentence_count, split_sentences};
use scrivai::fallback::{
    ConcisenessReducer, FallbackEngine, Formalizer, ToneClassifier, ToneLabel, ToneMarkers, TransformKind,
};
use scrivai::{classify, formalize, make_concise, summarize, translate};

fn numbered(count: usize) -> String {
    (1..=count)
        .map(|i| format!("Point {} matters.", i))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_splitSentences_threeShortSentences_shouldTrimToLetters() {
    let sentences = split_sentences("A. B. C.");
    let trimmed: Vec<&str> = sentences.iter().map(|s| s.trim()).collect();
    assert_eq!(trimmed, vec!["A.", "B.", "C."]);
    assert_eq!(sentences.concat(), "A. B. C.");
}

#[test]
fn test_splitSentences_trailingFragment_shouldBeDropped() {
    assert_eq!(split_sentences("One. Two"), vec!["One."]);
}

#[test]
fn test_splitSentences_terminatorRuns_shouldStayWithTheirSentence() {
    assert_eq!(split_sentences("Wait...what?! Yes."), vec!["Wait...", "what?!", " Yes."]);
}

#[test]
fn test_splitSentences_noTerminator_shouldReturnWholeText() {
    assert_eq!(split_sentences("no terminator here"), vec!["no terminator here"]);
    assert_eq!(split_sentences(""), vec![""]);
    assert_eq!(sentence_count(""), 1);
}

#[test]
fn test_summarize_atMostThreeSentences_shouldBeIdentity() {
    for text in ["Just one.", "One. Two.", "One! Two? Three.", "unterminated text"] {
        assert_eq!(summarize(text), text);
    }
}

#[test]
fn test_summarize_nineSentences_shouldKeepFirstAndLast() {
    let summary = summarize(&numbered(9));
    let sentences = split_sentences(&summary);

    assert_eq!(sentences.len(), 3);
    assert_eq!(sentences[0].trim(), "Point 1 matters.");
    assert_eq!(sentences[2].trim(), "Point 9 matters.");
}

#[test]
fn test_summarize_selectionOrder_shouldNotBeResorted() {
    // 12 sentences: k = 4, step = 3, so indices 0, 3, 6, 11
    let summary = summarize(&numbered(12));
    assert_eq!(summary, "Point 1 matters. Point 4 matters. Point 7 matters. Point 12 matters.");
}

#[test]
fn test_classify_specExamples_shouldMatchLabels() {
    assert_eq!(classify("However, we must therefore proceed.").label, ToneLabel::Formal);
    assert_eq!(classify("hey that's cool").label, ToneLabel::Casual);
}

#[test]
fn test_classify_customMarkers_shouldBeUsed() {
    let markers = ToneMarkers {
        formal: vec!["heretofore".to_string()],
        casual: vec![],
        professional: vec![],
        friendly: vec![],
    };
    let report = ToneClassifier::new(markers).classify("The parties heretofore agreed on every single clause.");
    assert_eq!(report.label, ToneLabel::Formal);
    assert_eq!(report.formal_markers, 1);
}

#[test]
fn test_classify_averageLength_shouldCountCharacters() {
    // 12 characters, 2 of them non-ASCII, one sentence
    let report = classify("Ça va bien é");
    assert_eq!(report.average_sentence_length, 12.0);
}

#[test]
fn test_formalize_cantDoIt_shouldExpand() {
    assert_eq!(formalize("I can't do it."), "I cannot perform it.");
}

#[test]
fn test_formalize_secondPass_shouldRewriteExpandedContraction() {
    // "do" only appears after the contraction pass, so a second run replaces it
    let once = formalize("I don't know.");
    assert_eq!(once, "I do not understand.");
    assert_eq!(formalize(&once), "I perform not understand.");
}

#[test]
fn test_formalize_alreadyFormal_shouldBeStable() {
    let text = "I cannot perform it.";
    assert_eq!(formalize(text), text);
}

#[test]
fn test_makeConcise_fillerExample_shouldCollapse() {
    assert_eq!(
        make_concise("It is important to note that this is due to the fact that it works."),
        "this is because it works."
    );
}

#[test]
fn test_makeConcise_secondPass_shouldStripNewlyExposedOpener() {
    let once = make_concise("It is there is a cat.");
    assert_eq!(once, "there is a cat.");
    assert_eq!(make_concise(&once), "a cat.");
}

#[test]
fn test_makeConcise_redundantQualifierSynonyms_shouldAllCollapse() {
    assert_eq!(
        make_concise("Bugs were totally eliminated and risks absolutely eliminated."),
        "Bugs were eliminated and risks eliminated."
    );
}

#[test]
fn test_translate_spanish_shouldSubstituteKnownWords() {
    let translated = translate("Hello, thank you.", "Spanish");
    assert!(translated.starts_with("Hola, Gracias."));
    assert!(translated.ends_with("Enter a valid Gemini API key for better results.]"));
}

#[test]
fn test_translate_klingon_shouldPassThroughWithDisclaimer() {
    assert_eq!(
        translate("Hello, thank you.", "Klingon"),
        "Hello, thank you. [This is a fallback translation. Please enter a valid Gemini API key for better results.]"
    );
}

#[test]
fn test_translate_multiWordEntry_shouldReplaceWholePhrase() {
    let translated = translate("Sorry, goodbye!", "German");
    assert!(translated.starts_with("Entschuldigung, Auf Wiedersehen!"));
}

#[test]
fn test_ruleSet_customTable_shouldApplyInOrder() {
    let rules = RuleSet::new(vec![
        RewriteRule::new("cat", "dog", MatchMode::WholeWord),
        RewriteRule::new("dog", "wolf", MatchMode::WholeWord),
    ]);
    // The second rule sees the first rule's output
    assert_eq!(rules.apply("cat and dog"), "wolf and wolf");
}

#[test]
fn test_injectedTables_shouldDriveComponents() {
    let formalizer = Formalizer::new(
        RuleSet::from_pairs(&[("gonna", "going to")], MatchMode::WholeWord),
        RuleSet::default(),
    );
    assert_eq!(formalizer.formalize("We're gonna win."), "We're going to win.");

    let reducer = ConcisenessReducer::new(
        RuleSet::from_pairs(&[("very ", "")], MatchMode::Substring),
        RuleSet::default(),
    );
    assert_eq!(reducer.reduce("A very long day."), "A long day.");
}

#[test]
fn test_engine_apply_shouldDispatchEveryKind() {
    let engine = FallbackEngine::builtin();
    let text = "I can't do it.";

    assert_eq!(engine.apply(&TransformKind::Summarize, text), text);
    assert_eq!(engine.apply(&TransformKind::Formal, text), "I cannot perform it.");
    assert_eq!(engine.apply(&TransformKind::Concise, text), text);
    assert!(engine.apply(&TransformKind::Tone, text).starts_with("Tone: "));
    assert!(engine
        .apply(&TransformKind::Translate("Klingon".to_string()), text)
        .starts_with("I can't do it. [This is a fallback translation."));
}

#[test]
fn test_engine_shouldBeShareableAcrossThreads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FallbackEngine>();
}
