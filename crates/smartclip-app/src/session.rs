//! Analysis session: the selected source and the state of its analysis.

use async_trait::async_trait;
use smartclip_gemini::{GeminiClient, GeminiResult};
use smartclip_models::{AnalysisState, Clip, ClipStyle, VideoFile, VideoSource};
use tracing::Instrument;

use crate::logging::AnalysisLogger;

/// Message shown when analysis is requested with nothing selected.
pub const NO_SOURCE_MESSAGE: &str = "Please provide a video URL or upload a file.";

/// Anything that can turn a source and style into clips.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipAnalyzer: Send + Sync {
    async fn analyze_source(
        &self,
        source: &VideoSource,
        style: ClipStyle,
    ) -> GeminiResult<Vec<Clip>>;
}

#[async_trait]
impl ClipAnalyzer for GeminiClient {
    async fn analyze_source(
        &self,
        source: &VideoSource,
        style: ClipStyle,
    ) -> GeminiResult<Vec<Clip>> {
        GeminiClient::analyze_source(self, source, style).await
    }
}

/// What a front-end should display right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionView<'a> {
    Idle,
    Loading,
    Error(&'a str),
    /// Analysis succeeded but found nothing
    NoClips,
    Clips(&'a [Clip]),
}

/// One user's source selection plus the current analysis.
///
/// `analyze` borrows the session mutably, so a second analysis cannot start
/// while one is pending.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    source: Option<VideoSource>,
    state: AnalysisState,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<&VideoSource> {
        self.source.as_ref()
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// Use a local file, replacing any link.
    pub fn select_file(&mut self, file: VideoFile) {
        self.set_source(Some(VideoSource::File(file)));
    }

    /// Use a link, replacing any file. An empty link clears the source.
    pub fn select_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        if url.trim().is_empty() {
            self.set_source(None);
        } else {
            self.set_source(Some(VideoSource::Url(url)));
        }
    }

    pub fn clear_source(&mut self) {
        self.set_source(None);
    }

    fn set_source(&mut self, source: Option<VideoSource>) {
        self.source = source;
        self.state = AnalysisState::Idle;
    }

    /// True while a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.state.is_in_progress()
    }

    /// Run one analysis of the current source and record the outcome.
    pub async fn analyze<A>(&mut self, analyzer: &A, style: ClipStyle) -> &AnalysisState
    where
        A: ClipAnalyzer + ?Sized,
    {
        let Some(source) = self.source.as_ref() else {
            self.state = AnalysisState::Failed(NO_SOURCE_MESSAGE.to_string());
            return &self.state;
        };

        let logger = AnalysisLogger::new(style, source.describe());
        logger.log_start();
        self.state = AnalysisState::Requesting;
        logger.log_state(&self.state);

        let result = analyzer
            .analyze_source(source, style)
            .instrument(logger.create_span())
            .await;

        self.state = match result {
            Ok(clips) => {
                for (index, clip) in clips.iter().enumerate() {
                    for issue in clip.issues() {
                        logger.log_warning(&format!(
                            "clip {} ({}): {}",
                            index + 1,
                            clip.title,
                            issue
                        ));
                    }
                }
                logger.log_completion(clips.len());
                AnalysisState::Succeeded(clips)
            }
            Err(e) => {
                logger.log_failure(&e.to_string(), !e.is_preflight());
                AnalysisState::Failed(e.user_message())
            }
        };
        logger.log_state(&self.state);

        &self.state
    }

    pub fn view(&self) -> SessionView<'_> {
        match &self.state {
            AnalysisState::Idle => SessionView::Idle,
            AnalysisState::Requesting => SessionView::Loading,
            AnalysisState::Failed(msg) => SessionView::Error(msg),
            AnalysisState::Succeeded(clips) if clips.is_empty() => SessionView::NoClips,
            AnalysisState::Succeeded(clips) => SessionView::Clips(clips),
        }
    }
}
