/*!
 * Prompt templates for the remote assistant.
 *
 * One template per transformation. Each places the document between blank
 * lines and ends by asking for the result alone, so the model's answer can
 * replace the document as-is.
 */

use crate::fallback::TransformKind;

/// A prompt template with `{text}` and `{target_language}` placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: &'static str,
}

impl PromptTemplate {
    pub const SUMMARIZE: &'static str = "Please summarize the following text in a concise way while preserving the key information:

{text}

Provide only the summary without any additional explanations or introductions.";

    pub const TONE: &'static str = "Please analyze the tone of the following text:

{text}

Classify the tone as Formal, Casual, Professional, Friendly or Neutral. Answer in the form \"Tone: <label>\" followed by a blank line and one or two sentences explaining the choice. Provide only the analysis without any additional introductions.";

    pub const FORMAL: &'static str = "Please rewrite the following text in a more formal tone, appropriate for professional or academic contexts:

{text}

Keep the meaning intact but make it more formal. Provide only the rewritten text without any additional explanations.";

    pub const CONCISE: &'static str = "Please rewrite the following text to be more concise, removing filler phrases and redundant words:

{text}

Keep the meaning intact but make it shorter. Provide only the rewritten text without any additional explanations.";

    pub const TRANSLATE: &'static str = "Please translate the following text into {target_language}:

{text}

Provide only the translated text without any additional explanations. If the text contains offensive words, leave them out of the translation.";

    /// Template for a transformation kind
    pub fn for_kind(kind: &TransformKind) -> Self {
        let template = match kind {
            TransformKind::Summarize => Self::SUMMARIZE,
            TransformKind::Tone => Self::TONE,
            TransformKind::Formal => Self::FORMAL,
            TransformKind::Concise => Self::CONCISE,
            TransformKind::Translate(_) => Self::TRANSLATE,
        };
        Self { template }
    }

    /// Render the template for `text`
    pub fn render(&self, text: &str, target_language: &str) -> String {
        // Language first, so a document containing the placeholder is left alone
        self.template
            .replace("{target_language}", target_language)
            .replace("{text}", text)
    }
}

/// Rendered prompt for `kind` over `text`
pub fn build_prompt(kind: &TransformKind, text: &str) -> String {
    PromptTemplate::for_kind(kind).render(text, kind.target_language().unwrap_or_default())
}
