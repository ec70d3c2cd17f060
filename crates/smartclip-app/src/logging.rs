//! Structured analysis logging and tracing setup.
//!
//! Every analysis gets an id so its start, warnings and outcome can be
//! correlated in the logs.

use smartclip_models::{AnalysisState, ClipStyle};
use tracing::{debug, error, info, warn, Span};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

/// Logger for a single analysis.
#[derive(Debug, Clone)]
pub struct AnalysisLogger {
    analysis_id: String,
    style: ClipStyle,
    source: String,
}

impl AnalysisLogger {
    /// Create a logger with a fresh analysis id.
    ///
    /// # Arguments
    /// * `style` - The clip style requested
    /// * `source` - File name or link, for display only
    pub fn new(style: ClipStyle, source: &str) -> Self {
        Self {
            analysis_id: Uuid::new_v4().to_string(),
            style,
            source: source.to_string(),
        }
    }

    pub fn log_start(&self) {
        info!(
            analysis_id = %self.analysis_id,
            style = %self.style,
            source = %self.source,
            "Analysis started"
        );
    }

    pub fn log_warning(&self, message: &str) {
        warn!(
            analysis_id = %self.analysis_id,
            style = %self.style,
            "Analysis warning: {}", message
        );
    }

    pub fn log_failure(&self, message: &str, request_sent: bool) {
        error!(
            analysis_id = %self.analysis_id,
            style = %self.style,
            request_sent,
            "Analysis failed: {}", message
        );
    }

    pub fn log_completion(&self, clip_count: usize) {
        info!(
            analysis_id = %self.analysis_id,
            style = %self.style,
            clips = clip_count,
            "Analysis completed"
        );
    }

    pub fn log_state(&self, state: &AnalysisState) {
        debug!(
            analysis_id = %self.analysis_id,
            state = state.as_str(),
            "Analysis state changed"
        );
    }

    pub fn analysis_id(&self) -> &str {
        &self.analysis_id
    }

    /// Create a tracing span covering the analysis.
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "analysis",
            analysis_id = %self.analysis_id,
            style = %self.style
        )
    }
}

/// Install the global subscriber: JSON when `LOG_FORMAT=json`, ANSI text
/// otherwise. `RUST_LOG` directives are honored.
pub fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let mut env_filter = EnvFilter::from_default_env();
    if let Ok(directive) = "smartclip=info".parse() {
        env_filter = env_filter.add_directive(directive);
    }

    // Logs go to stderr so stdout carries only rendered output.
    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_ids_are_unique() {
        let a = AnalysisLogger::new(ClipStyle::Cooking, "a.mp4");
        let b = AnalysisLogger::new(ClipStyle::Cooking, "a.mp4");

        assert_ne!(a.analysis_id(), b.analysis_id());
        assert!(Uuid::parse_str(a.analysis_id()).is_ok());
    }
}
