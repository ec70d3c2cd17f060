//! Clip style definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Content styles the user can pick before analysis.
///
/// The style only steers the prompt sent to the model; nothing local
/// branches on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ClipStyle {
    /// Close-ups of food and hands
    #[default]
    Cooking,
    /// Product showcases and reactions
    ProductReview,
    /// Key statements and emotional moments
    Interview,
    /// Laughter, jokes and unexpected situations
    FunnyMoments,
}

impl ClipStyle {
    /// All styles, in picker order.
    pub const ALL: &'static [ClipStyle] = &[
        ClipStyle::Cooking,
        ClipStyle::ProductReview,
        ClipStyle::Interview,
        ClipStyle::FunnyMoments,
    ];

    /// Human-readable label, as embedded in the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            ClipStyle::Cooking => "Cooking",
            ClipStyle::ProductReview => "Product Review",
            ClipStyle::Interview => "Interview",
            ClipStyle::FunnyMoments => "Funny Moments",
        }
    }

    /// Snake-case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipStyle::Cooking => "cooking",
            ClipStyle::ProductReview => "product_review",
            ClipStyle::Interview => "interview",
            ClipStyle::FunnyMoments => "funny_moments",
        }
    }
}

impl fmt::Display for ClipStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ClipStyle {
    type Err = StyleParseError;

    /// Accepts either the label ("Product Review") or the identifier
    /// ("product_review"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "cooking" => Ok(ClipStyle::Cooking),
            "product_review" => Ok(ClipStyle::ProductReview),
            "interview" => Ok(ClipStyle::Interview),
            "funny_moments" => Ok(ClipStyle::FunnyMoments),
            _ => Err(StyleParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown clip style: {0}")]
pub struct StyleParseError(String);
