//! Request building: prompt text, inline video part and generation config.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::Serialize;
use smartclip_models::{fields, ClipStyle, VideoFile, MAX_CLIP_SECONDS, MIN_CLIP_SECONDS};
use tracing::debug;

use crate::error::{GeminiError, GeminiResult};
use crate::schema::{response_schema, Schema};

/// `generateContent` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// One content part: either prompt text or inline binary data.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Base64 (standard alphabet, padded)
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: Schema,
    pub thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub thinking_budget: u32,
}

/// Per-style focus hints, in the order the prompt lists them.
const STYLE_RULES: [(ClipStyle, &str); 4] = [
    (
        ClipStyle::Cooking,
        "prioritize close-up shots of food and hands.",
    ),
    (
        ClipStyle::ProductReview,
        "focus on product showcases and emotional reactions.",
    ),
    (
        ClipStyle::Interview,
        "highlight key statements and emotional moments.",
    ),
    (
        ClipStyle::FunnyMoments,
        "highlight laughter, jokes, and unexpected funny situations.",
    ),
];

/// Build the instruction block for a file and style.
pub fn build_prompt(file_name: &str, style: ClipStyle) -> String {
    let mut rules = vec![format!(
        "Detect engaging highlights between {}–{} seconds.",
        MIN_CLIP_SECONDS, MAX_CLIP_SECONDS
    )];
    for (rule_style, hint) in STYLE_RULES {
        rules.push(format!("For {} style → {}", rule_style.label(), hint));
    }
    rules.push("Generate captions in English and Arabic.".to_string());

    let numbered: Vec<String> = rules
        .iter()
        .enumerate()
        .map(|(i, rule)| format!("{}. {}", i + 1, rule))
        .collect();

    format!(
        "Input Video: {file_name}\n\
         Clip Style: {style}\n\
         \n\
         You are SmartClip, an AI video assistant that analyzes {file_name} and creates short, viral-ready clips.\n\
         Follow these rules:\n\
         {rules}\n\
         Return results as JSON with: {fields}.",
        file_name = file_name,
        style = style.label(),
        rules = numbered.join("\n"),
        fields = fields::REQUIRED.join(", "),
    )
}

/// Encode raw bytes as an inline part.
pub fn inline_part(mime_type: &str, bytes: &[u8]) -> Part {
    Part::InlineData {
        inline_data: InlineData {
            mime_type: mime_type.to_string(),
            data: STANDARD.encode(bytes),
        },
    }
}

/// Read the file and encode it as an inline part.
///
/// The raw bytes are dropped as soon as the base64 string exists.
pub async fn encode_video(file: &VideoFile) -> GeminiResult<Part> {
    let bytes = tokio::fs::read(&file.path)
        .await
        .map_err(|source| GeminiError::Encoding {
            name: file.name.clone(),
            source,
        })?;

    debug!(
        file = %file.name,
        mime_type = %file.mime_type,
        bytes = bytes.len(),
        "Encoding video for inline upload"
    );

    Ok(inline_part(&file.mime_type, &bytes))
}

/// Assemble the full request body from an already encoded video part.
pub fn build_request(
    file_name: &str,
    style: ClipStyle,
    video: Part,
    thinking_budget: u32,
) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text {
                    text: build_prompt(file_name, style),
                },
                video,
            ],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: response_schema(),
            thinking_config: ThinkingConfig { thinking_budget },
        },
    }
}
