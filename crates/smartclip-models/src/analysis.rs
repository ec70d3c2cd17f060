//! Analysis lifecycle.
//!
//! One analysis moves `Idle -> Requesting -> Succeeded | Failed` and stops
//! there. Running again starts over from `Idle`.

use serde::{Deserialize, Serialize};

use crate::Clip;

/// State of a single highlight analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum AnalysisState {
    /// Nothing requested yet (or reset by a source change)
    #[default]
    Idle,
    /// Request in flight
    Requesting,
    /// Model returned clips; may be empty
    Succeeded(Vec<Clip>),
    /// User-facing failure message
    Failed(String),
}

impl AnalysisState {
    /// Returns the state as a string for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Requesting => "requesting",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }

    /// Returns true once the analysis has finished either way.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }

    /// Returns true while the request is in flight.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::Requesting)
    }

    /// Clips, if the analysis succeeded.
    pub fn clips(&self) -> Option<&[Clip]> {
        match self {
            Self::Succeeded(clips) => Some(clips),
            _ => None,
        }
    }

    /// Failure message, if the analysis failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
