//! Gemini client configuration.

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for video analysis.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Reasoning budget passed through to the model unchanged.
pub const DEFAULT_THINKING_BUDGET: u32 = 32768;

/// Configuration for [`crate::GeminiClient`].
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key; checked before every analysis
    pub api_key: Option<String>,
    /// API root, without trailing slash
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Thinking budget hint
    pub thinking_budget: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            thinking_budget: DEFAULT_THINKING_BUDGET,
        }
    }
}

impl GeminiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty_var("API_KEY").or_else(|| non_empty_var("GEMINI_API_KEY")),
            base_url: std::env::var("GEMINI_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            thinking_budget: std::env::var("GEMINI_THINKING_BUDGET")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_THINKING_BUDGET),
        }
    }

    /// Builder-style API key setter.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Builder-style base URL setter.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// API key, if configured and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

// The key must never end up in logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("thinking_budget", &self.thinking_budget)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
