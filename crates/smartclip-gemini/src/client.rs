//! Gemini HTTP client.

use reqwest::Client;
use smartclip_models::{Clip, ClipStyle, VideoFile, VideoSource};
use tracing::{debug, error, info};

use crate::config::GeminiConfig;
use crate::error::{GeminiError, GeminiResult};
use crate::request::{build_request, encode_video};
use crate::response::{parse_clips, GenerateContentResponse};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client that asks Gemini for highlight clips in a video.
///
/// Every analysis is a single request: no retries, no model fallback and no
/// client-side timeout.
pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(config: GeminiConfig) -> GeminiResult<Self> {
        let http = Client::builder().build().map_err(GeminiError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> GeminiResult<Self> {
        Self::new(GeminiConfig::from_env())
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Analyze any source. Remote links are rejected without a request.
    pub async fn analyze_source(
        &self,
        source: &VideoSource,
        style: ClipStyle,
    ) -> GeminiResult<Vec<Clip>> {
        match source {
            VideoSource::File(file) => self.analyze(file, style).await,
            VideoSource::Url(url) => Err(GeminiError::UnsupportedSource(url.clone())),
        }
    }

    /// Analyze a local video file and return the clips the model proposes.
    ///
    /// The API key is the one captured in this client's [`GeminiConfig`];
    /// build a new client to pick up a changed environment.
    pub async fn analyze(&self, file: &VideoFile, style: ClipStyle) -> GeminiResult<Vec<Clip>> {
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| GeminiError::configuration("API_KEY not set"))?;

        let video = encode_video(file).await?;
        let request = build_request(&file.name, style, video, self.config.thinking_budget);

        info!(
            model = %self.config.model,
            file = %file.name,
            style = %style,
            "Requesting highlight clips from Gemini"
        );

        let response = self
            .http
            .post(self.config.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await?;
        drop(request);

        if !response.status().is_success() {
            let status = response.status();
            let error_text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    debug!(error = %e, "Failed to read Gemini error body");
                    String::new()
                }
            };
            return Err(GeminiError::transport(format!(
                "Gemini API returned {}: {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Received Gemini response");

        let text = serde_json::from_str::<GenerateContentResponse>(&body)
            .ok()
            .and_then(|envelope| envelope.text());

        let Some(text) = text else {
            error!(raw = %body, "Gemini response has no answer text");
            return Err(GeminiError::response_format(body));
        };

        match parse_clips(&text) {
            Ok(clips) => {
                info!(clips = clips.len(), "Received highlight clips");
                Ok(clips)
            }
            Err(e) => {
                error!(raw = %text.trim(), "Failed to parse clip JSON from Gemini");
                Err(e)
            }
        }
    }
}
