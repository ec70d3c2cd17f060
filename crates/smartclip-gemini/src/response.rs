//! Reply envelope and clip parsing.

use serde::Deserialize;
use smartclip_models::Clip;

use crate::error::{GeminiError, GeminiResult};

/// `generateContent` response body.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    /// Set on reasoning summaries, which are not part of the answer
    #[serde(default)]
    pub thought: bool,
}

impl GenerateContentResponse {
    /// Answer text of the first candidate, or `None` if it has none.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts
            .iter()
            .filter(|p| !p.thought)
            .filter_map(|p| p.text.as_deref())
            .collect();
        Some(text)
    }
}

/// Drop surrounding whitespace and a Markdown code fence, if present.
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}

/// Parse the model's answer as an ordered list of clips.
///
/// Clips come back exactly as the model produced them.
pub fn parse_clips(text: &str) -> GeminiResult<Vec<Clip>> {
    serde_json::from_str(strip_code_fence(text))
        .map_err(|_| GeminiError::response_format(text.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_joins_answer_parts() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[
            {"text":"thinking...","thought":true},
            {"text":"[{\"clip_start\":"},
            {"text":"1}]"}
        ]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text().as_deref(), Some("[{\"clip_start\":1}]"));
    }

    #[test]
    fn test_text_missing_candidate() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), None);

        let body = r#"{"candidates":[{"finishReason":"SAFETY"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("  []\n"), "[]");
        assert_eq!(strip_code_fence("```json\n[]\n```"), "[]");
        assert_eq!(strip_code_fence("```\n[]\n```"), "[]");
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_clips(" [] ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_preserves_order() {
        let text = r#"[
            {"clip_start": 90, "clip_end": 120, "title": "B", "captions": {"english": "e", "arabic": "a"}, "hashtags": []},
            {"clip_start": 10, "clip_end": 30, "title": "A", "captions": {"english": "e", "arabic": "a"}, "hashtags": []}
        ]"#;
        let clips = parse_clips(text).unwrap();
        assert_eq!(clips[0].title, "B");
        assert_eq!(clips[1].title, "A");
    }

    #[test]
    fn test_parse_failure_keeps_raw_text() {
        let err = parse_clips("  [{\"clip_start\": 1  ").unwrap_err();
        assert_eq!(err.raw_response(), Some("[{\"clip_start\": 1"));

        let err = parse_clips("Sorry, I can't help with that.").unwrap_err();
        assert!(matches!(err, GeminiError::ResponseFormat { .. }));
    }

    #[test]
    fn test_object_instead_of_array_is_rejected() {
        let err = parse_clips(r#"{"clips": []}"#).unwrap_err();
        assert!(matches!(err, GeminiError::ResponseFormat { .. }));
    }
}
