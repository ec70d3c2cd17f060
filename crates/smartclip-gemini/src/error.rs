//! Gemini client error types.

use thiserror::Error;

pub type GeminiResult<T> = Result<T, GeminiError>;

/// Message shown when no API key is configured.
pub const MISSING_API_KEY_MESSAGE: &str =
    "API key is missing. Please set the API_KEY environment variable.";

/// Message shown when a video link is submitted instead of a file.
pub const UNSUPPORTED_SOURCE_MESSAGE: &str =
    "Processing video URLs is not yet supported. Please upload a video file to proceed.";

/// Message shown when the model reply cannot be parsed as clips.
pub const INVALID_FORMAT_MESSAGE: &str = "The AI returned an invalid format. Please try again.";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unsupported video source: {0}")]
    UnsupportedSource(String),

    #[error("Failed to read video file '{name}': {source}")]
    Encoding {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Gemini request failed: {0}")]
    Transport(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid clip response from Gemini")]
    ResponseFormat { raw: String },
}

impl GeminiError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn response_format(raw: impl Into<String>) -> Self {
        Self::ResponseFormat { raw: raw.into() }
    }

    /// The one message a front-end shows for this failure.
    pub fn user_message(&self) -> String {
        match self {
            GeminiError::Configuration(_) => MISSING_API_KEY_MESSAGE.to_string(),
            GeminiError::UnsupportedSource(_) => UNSUPPORTED_SOURCE_MESSAGE.to_string(),
            GeminiError::ResponseFormat { .. } => INVALID_FORMAT_MESSAGE.to_string(),
            GeminiError::Encoding { name, source } => {
                format!("Could not read video file '{}': {}", name, source)
            }
            GeminiError::Transport(_) => self.to_string(),
            GeminiError::Network(e) => {
                let mut msg = self.to_string();
                let mut cause = std::error::Error::source(e);
                while let Some(err) = cause {
                    msg.push_str(": ");
                    msg.push_str(&err.to_string());
                    cause = err.source();
                }
                msg
            }
        }
    }

    /// Raw model text, for failures that carry one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            GeminiError::ResponseFormat { raw } => Some(raw),
            _ => None,
        }
    }

    /// True for failures raised before any request was sent.
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            GeminiError::Configuration(_)
                | GeminiError::UnsupportedSource(_)
                | GeminiError::Encoding { .. }
        )
    }
}
