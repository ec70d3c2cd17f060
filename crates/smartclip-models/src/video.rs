//! Video source models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions accepted for upload and the MIME type sent for each.
pub const SUPPORTED_FORMATS: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("webm", "video/webm"),
    ("mov", "video/quicktime"),
];

/// Look up the MIME type for a file extension (case-insensitive).
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.to_ascii_lowercase();
    SUPPORTED_FORMATS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

#[derive(Debug, Error, PartialEq)]
pub enum SourceError {
    #[error("Unsupported video format '{0}'. Please upload an MP4, MOV, or WebM file.")]
    UnsupportedFormat(String),

    #[error("Path has no file name: {0}")]
    MissingFileName(String),
}

/// Handle to a local video file.
///
/// Holds only metadata; the bytes are read when the request is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VideoFile {
    /// File name shown to the model and the user
    pub name: String,
    /// Declared MIME type
    pub mime_type: String,
    /// Where the bytes live
    pub path: PathBuf,
}

impl VideoFile {
    /// Create a handle with an explicit name and MIME type.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            path: path.into(),
        }
    }

    /// Create a handle from a path, deriving the MIME type from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| SourceError::MissingFileName(path.display().to_string()))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let mime_type = mime_for_extension(ext)
            .ok_or_else(|| SourceError::UnsupportedFormat(name.to_string()))?;

        Ok(Self::new(name, mime_type, path))
    }
}

/// Where the video to analyze comes from.
///
/// Exactly one variant is active; replacing the source replaces the variant.
/// Only [`VideoSource::File`] can be analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum VideoSource {
    /// Local file picked by the user
    File(VideoFile),
    /// Remote link (accepted, but rejected at analysis time)
    Url(String),
}

impl VideoSource {
    /// Returns the file handle if this is a local file.
    pub fn as_file(&self) -> Option<&VideoFile> {
        match self {
            VideoSource::File(file) => Some(file),
            VideoSource::Url(_) => None,
        }
    }

    /// Returns the URL if this is a remote locator.
    pub fn as_url(&self) -> Option<&str> {
        match self {
            VideoSource::File(_) => None,
            VideoSource::Url(url) => Some(url),
        }
    }

    /// Short description for logs.
    pub fn describe(&self) -> &str {
        match self {
            VideoSource::File(file) => &file.name,
            VideoSource::Url(url) => url,
        }
    }
}

impl From<VideoFile> for VideoSource {
    fn from(file: VideoFile) -> Self {
        VideoSource::File(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_derives_mime() {
        let file = VideoFile::from_path("/videos/dinner.MP4").unwrap();
        assert_eq!(file.name, "dinner.MP4");
        assert_eq!(file.mime_type, "video/mp4");

        let file = VideoFile::from_path("clip.mov").unwrap();
        assert_eq!(file.mime_type, "video/quicktime");
    }

    #[test]
    fn test_from_path_rejects_unknown_extension() {
        assert_eq!(
            VideoFile::from_path("notes.txt"),
            Err(SourceError::UnsupportedFormat("notes.txt".to_string()))
        );
        assert!(VideoFile::from_path("no_extension").is_err());
    }

    #[test]
    fn test_source_accessors() {
        let file = VideoFile::new("a.webm", "video/webm", "/tmp/a.webm");
        let source = VideoSource::from(file.clone());
        assert_eq!(source.as_file(), Some(&file));
        assert_eq!(source.as_url(), None);

        let source = VideoSource::Url("https://youtu.be/x".to_string());
        assert_eq!(source.as_file(), None);
        assert_eq!(source.as_url(), Some("https://youtu.be/x"));
        assert_eq!(source.describe(), "https://youtu.be/x");
    }
}
