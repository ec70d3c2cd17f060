//! SmartClip front-end core.
//!
//! Provides:
//! - `AnalysisSession`: source selection and analysis state
//! - Clip card and result rendering
//! - Analysis logging and tracing setup

pub mod logging;
pub mod present;
pub mod session;

pub use logging::{init_tracing, AnalysisLogger};
pub use present::{format_time, render_clip_card, render_view, CaptionLanguage};
pub use session::{AnalysisSession, ClipAnalyzer, SessionView, NO_SOURCE_MESSAGE};
