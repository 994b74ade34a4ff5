//! Request and result types for one title-generation call.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TONE;

/// JSON body sent to the title service. Built fresh for each call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    content: String,
    model: String,
    tone: String,
}

impl GenerationRequest {
    /// A request for `content` using `model`, with the default tone.
    pub fn new(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self { content: content.into(), model: model.into(), tone: DEFAULT_TONE.to_string() }
    }

    /// Replaces the tone hint. The value is forwarded as-is.
    #[must_use]
    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    /// Text the titles should describe.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Remote model identifier.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Stylistic hint such as `"funny"` or `"auto"`.
    #[must_use]
    pub fn tone(&self) -> &str {
        &self.tone
    }
}

/// Title candidates in the order the service returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Extracted titles; empty when the service returned none.
    pub titles: Vec<String>,
}

impl GenerationResult {
    /// Whether no titles were extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tone_defaults_to_auto() {
        let request = GenerationRequest::new("A car crash experiment", "google/gemini-flash-1.5");
        assert_eq!(request.content(), "A car crash experiment");
        assert_eq!(request.tone(), "auto");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "content": "A car crash experiment",
                "model": "google/gemini-flash-1.5",
                "tone": "auto",
            })
        );
    }

    #[test]
    fn tone_is_forwarded_unvalidated() {
        let request = GenerationRequest::new("x", "m").with_tone("  Sarcastic!! ");
        assert_eq!(request.tone(), "  Sarcastic!! ");
        assert_eq!(serde_json::to_value(&request).unwrap()["tone"], json!("  Sarcastic!! "));
    }
}
