/*!
 * Rule-based tone classifier.
 *
 * Counts which marker words occur in the text and looks at the average
 * sentence length, then walks a fixed decision list. The first rule that
 * fires decides the label, even when later marker sets also matched.
 */

use std::fmt;

use serde::{Deserialize, Serialize};

use super::segmenter::sentence_count;

/// Average sentence length above which marked text may be called formal
const FORMAL_MIN_AVG_LENGTH: f64 = 20.0;

/// Average sentence length below which text is called casual
const CASUAL_MAX_AVG_LENGTH: f64 = 12.0;

/// Discrete tone label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToneLabel {
    Neutral,
    Formal,
    Casual,
    Professional,
    Friendly,
}

impl ToneLabel {
    /// Fixed explanation shown with the label
    pub fn explanation(&self) -> &'static str {
        match self {
            Self::Neutral => "The text appears to have a neutral tone.",
            Self::Formal => "The text uses formal language, complex sentence structures, and professional terminology.",
            Self::Casual => "The text uses casual language and simpler sentence structures.",
            Self::Professional => "The text uses professional terminology and focuses on work-related concepts.",
            Self::Friendly => "The text uses warm and approachable language.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Formal => "Formal",
            Self::Casual => "Casual",
            Self::Professional => "Professional",
            Self::Friendly => "Friendly",
        }
    }
}

impl fmt::Display for ToneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker word sets the classifier looks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneMarkers {
    pub formal: Vec<String>,
    pub casual: Vec<String>,
    pub professional: Vec<String>,
    pub friendly: Vec<String>,
}

impl ToneMarkers {
    /// The built-in English marker sets
    pub fn builtin() -> Self {
        fn owned(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        }

        Self {
            formal: owned(&["therefore", "however", "consequently", "furthermore", "thus", "hence"]),
            casual: owned(&["hey", "yeah", "cool", "awesome", "gonna", "wanna", "stuff"]),
            professional: owned(&["analysis", "implement", "strategy", "efficient", "evaluate"]),
            friendly: owned(&["please", "thank", "appreciate", "grateful", "happy", "glad"]),
        }
    }
}

impl Default for ToneMarkers {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Classification result together with the measurements behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneReport {
    pub label: ToneLabel,
    pub explanation: String,
    pub formal_markers: usize,
    pub casual_markers: usize,
    pub professional_markers: usize,
    pub friendly_markers: usize,
    pub average_sentence_length: f64,
}

impl fmt::Display for ToneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tone: {}\n\n{}", self.label, self.explanation)
    }
}

/// Tone classifier over injected marker sets
#[derive(Debug, Clone, Default)]
pub struct ToneClassifier {
    markers: ToneMarkers,
}

impl ToneClassifier {
    pub fn new(markers: ToneMarkers) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &ToneMarkers {
        &self.markers
    }

    /// Classify the tone of `text`
    pub fn classify(&self, text: &str) -> ToneReport {
        let lowered = text.to_lowercase();
        let present = |words: &[String]| words.iter().filter(|w| lowered.contains(w.as_str())).count();

        let formal = present(&self.markers.formal);
        let casual = present(&self.markers.casual);
        let professional = present(&self.markers.professional);
        let friendly = present(&self.markers.friendly);

        let average = text.chars().count() as f64 / sentence_count(text) as f64;

        let label = if formal > 0 && average > FORMAL_MIN_AVG_LENGTH && casual == 0 {
            ToneLabel::Formal
        } else if casual > 0 || average < CASUAL_MAX_AVG_LENGTH {
            ToneLabel::Casual
        } else if professional > 0 {
            ToneLabel::Professional
        } else if friendly > 0 {
            ToneLabel::Friendly
        } else {
            ToneLabel::Neutral
        };

        ToneReport {
            label,
            explanation: label.explanation().to_string(),
            formal_markers: formal,
            casual_markers: casual,
            professional_markers: professional,
            friendly_markers: friendly,
            average_sentence_length: average,
        }
    }
}
