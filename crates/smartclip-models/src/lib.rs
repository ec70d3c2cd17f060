//! Shared data models for SmartClip.
//!
//! This crate provides Serde-serializable types for:
//! - Clip records returned by the model
//! - Clip styles
//! - Video sources (local file or remote link)
//! - The analysis lifecycle

pub mod analysis;
pub mod clip;
pub mod style;
pub mod video;

// Re-export common types
pub use analysis::AnalysisState;
pub use clip::{fields, Captions, Clip, ClipIssue, MAX_CLIP_SECONDS, MIN_CLIP_SECONDS};
pub use style::{ClipStyle, StyleParseError};
pub use video::{mime_for_extension, SourceError, VideoFile, VideoSource, SUPPORTED_FORMATS};
