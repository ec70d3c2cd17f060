//! Clip records returned by the highlight analysis.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest highlight the model is asked for, in seconds.
pub const MIN_CLIP_SECONDS: f64 = 15.0;

/// Longest highlight the model is asked for, in seconds.
pub const MAX_CLIP_SECONDS: f64 = 45.0;

/// Wire names of the clip fields.
///
/// The prompt, the response schema and the serde model all use these.
pub mod fields {
    pub const CLIP_START: &str = "clip_start";
    pub const CLIP_END: &str = "clip_end";
    pub const CAPTIONS: &str = "captions";
    pub const TITLE: &str = "title";
    pub const HASHTAGS: &str = "hashtags";

    pub const ENGLISH: &str = "english";
    pub const ARABIC: &str = "arabic";

    /// Required clip fields, in the order the prompt lists them.
    pub const REQUIRED: [&str; 5] = [CLIP_START, CLIP_END, TITLE, CAPTIONS, HASHTAGS];

    /// Required caption fields.
    pub const CAPTION_REQUIRED: [&str; 2] = [ENGLISH, ARABIC];
}

/// Bilingual captions for a clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Captions {
    pub english: String,
    pub arabic: String,
}

/// A highlighted time range with generated title, captions and hashtags.
///
/// Deserialization checks shape only. Semantic problems are reported by
/// [`Clip::issues`] and never cause a clip to be dropped or altered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Clip {
    /// Start time in seconds
    pub clip_start: f64,
    /// End time in seconds
    pub clip_end: f64,
    /// Catchy, viral-ready title
    pub title: String,
    pub captions: Captions,
    /// Relevant hashtags, with or without a leading '#'
    pub hashtags: Vec<String>,
}

impl Clip {
    /// Create a new clip.
    pub fn new(
        clip_start: f64,
        clip_end: f64,
        title: impl Into<String>,
        english: impl Into<String>,
        arabic: impl Into<String>,
    ) -> Self {
        Self {
            clip_start,
            clip_end,
            title: title.into(),
            captions: Captions {
                english: english.into(),
                arabic: arabic.into(),
            },
            hashtags: Vec::new(),
        }
    }

    /// Builder-style hashtag setter.
    pub fn with_hashtags<I, S>(mut self, hashtags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hashtags = hashtags.into_iter().map(Into::into).collect();
        self
    }

    /// Clip length in seconds (may be negative for malformed clips).
    pub fn duration(&self) -> f64 {
        self.clip_end - self.clip_start
    }

    /// Semantic checks the model was instructed to honor.
    ///
    /// Advisory only: the caller decides whether to log, show or ignore them.
    pub fn issues(&self) -> Vec<ClipIssue> {
        let mut issues = Vec::new();

        if self.clip_start < 0.0 {
            issues.push(ClipIssue::NegativeStart);
        }

        if self.clip_end <= self.clip_start {
            issues.push(ClipIssue::EndNotAfterStart);
        } else {
            let duration = self.duration();
            if !(MIN_CLIP_SECONDS..=MAX_CLIP_SECONDS).contains(&duration) {
                issues.push(ClipIssue::DurationOutOfRange(duration));
            }
        }

        if self.title.trim().is_empty() {
            issues.push(ClipIssue::EmptyTitle);
        }
        if self.captions.english.trim().is_empty() {
            issues.push(ClipIssue::EmptyCaption(fields::ENGLISH));
        }
        if self.captions.arabic.trim().is_empty() {
            issues.push(ClipIssue::EmptyCaption(fields::ARABIC));
        }

        issues
    }
}

/// A semantic problem found in a structurally valid clip.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipIssue {
    NegativeStart,
    EndNotAfterStart,
    /// Duration in seconds outside the requested window
    DurationOutOfRange(f64),
    EmptyTitle,
    /// Caption language with no text
    EmptyCaption(&'static str),
}

impl fmt::Display for ClipIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipIssue::NegativeStart => write!(f, "clip starts before 0s"),
            ClipIssue::EndNotAfterStart => write!(f, "clip ends before it starts"),
            ClipIssue::DurationOutOfRange(d) => write!(
                f,
                "duration {:.1}s outside {}-{}s",
                d, MIN_CLIP_SECONDS, MAX_CLIP_SECONDS
            ),
            ClipIssue::EmptyTitle => write!(f, "empty title"),
            ClipIssue::EmptyCaption(lang) => write!(f, "empty {} caption", lang),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_deserializes_exact_values() {
        let json = r#"{
            "clip_start": 12.5,
            "clip_end": 40.0,
            "title": "Funny fail",
            "captions": {"english": "He slipped!", "arabic": "انزلق!"},
            "hashtags": ["fail", "funny"]
        }"#;
        let clip: Clip = serde_json::from_str(json).unwrap();

        assert_eq!(clip.clip_start, 12.5);
        assert_eq!(clip.clip_end, 40.0);
        assert_eq!(clip.title, "Funny fail");
        assert_eq!(clip.captions.arabic, "انزلق!");
        assert_eq!(clip.hashtags, vec!["fail", "funny"]);
    }

    #[test]
    fn test_null_caption_is_rejected() {
        let json = r#"{
            "clip_start": 0, "clip_end": 20, "title": "t",
            "captions": {"english": "e", "arabic": null},
            "hashtags": []
        }"#;
        assert!(serde_json::from_str::<Clip>(json).is_err());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"clip_start": 0, "clip_end": 20, "title": "t", "hashtags": []}"#;
        assert!(serde_json::from_str::<Clip>(json).is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "clip_start": 1, "clip_end": 20, "title": "t",
            "captions": {"english": "e", "arabic": "a"},
            "hashtags": [], "score": 0.9
        }"#;
        let clip: Clip = serde_json::from_str(json).unwrap();
        assert_eq!(clip.clip_start, 1.0);
    }

    #[test]
    fn test_well_formed_clip_has_no_issues() {
        let clip = Clip::new(10.0, 40.0, "Title", "english", "عربي");
        assert!(clip.issues().is_empty());
    }

    #[test]
    fn test_issues_reported_without_mutation() {
        let clip = Clip::new(-2.0, -5.0, " ", "", "a");
        let issues = clip.issues();

        assert!(issues.contains(&ClipIssue::NegativeStart));
        assert!(issues.contains(&ClipIssue::EndNotAfterStart));
        assert!(issues.contains(&ClipIssue::EmptyTitle));
        assert!(issues.contains(&ClipIssue::EmptyCaption(fields::ENGLISH)));
        assert_eq!(clip.clip_start, -2.0);
        assert_eq!(clip.clip_end, -5.0);
    }

    #[test]
    fn test_duration_window() {
        let short = Clip::new(0.0, 5.0, "t", "e", "a");
        assert_eq!(short.issues(), vec![ClipIssue::DurationOutOfRange(5.0)]);

        let edge = Clip::new(0.0, 45.0, "t", "e", "a");
        assert!(edge.issues().is_empty());
    }
}
