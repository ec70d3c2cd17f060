//! Text rendering of clips and session states.

use std::fmt::Write;

use clap::ValueEnum;
use smartclip_models::Clip;

use crate::session::SessionView;

/// Right-to-left mark prefixed to Arabic caption lines.
const RLM: char = '\u{200F}';

/// Which caption to show on a clip card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CaptionLanguage {
    #[default]
    English,
    Arabic,
}

impl CaptionLanguage {
    /// Text direction for the caption (`ltr` or `rtl`).
    pub fn direction(&self) -> &'static str {
        match self {
            CaptionLanguage::English => "ltr",
            CaptionLanguage::Arabic => "rtl",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaptionLanguage::English => "English",
            CaptionLanguage::Arabic => "Arabic",
        }
    }

    /// The caption text for this language.
    pub fn caption<'a>(&self, clip: &'a Clip) -> &'a str {
        match self {
            CaptionLanguage::English => &clip.captions.english,
            CaptionLanguage::Arabic => &clip.captions.arabic,
        }
    }
}

/// Format seconds as `MM:SS`, rounding down.
///
/// Negative or non-finite values display as `00:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Hashtag with exactly one leading `#`.
pub fn display_hashtag(tag: &str) -> String {
    if tag.starts_with('#') {
        tag.to_string()
    } else {
        format!("#{}", tag)
    }
}

/// Render a single clip card.
pub fn render_clip_card(clip: &Clip, language: CaptionLanguage) -> String {
    let mut out = String::new();
    let caption = language.caption(clip);

    let _ = writeln!(out, "{}", clip.title);
    let _ = writeln!(
        out,
        "{} - {}",
        format_time(clip.clip_start),
        format_time(clip.clip_end)
    );
    let _ = writeln!(out, "[{}]", language.label());
    let mark = if language.direction() == "rtl" {
        RLM.to_string()
    } else {
        String::new()
    };
    for line in caption.lines() {
        let _ = writeln!(out, "  {}{}", mark, line);
    }

    let tags: Vec<String> = clip.hashtags.iter().map(|t| display_hashtag(t)).collect();
    if !tags.is_empty() {
        let _ = writeln!(out, "{}", tags.join(" "));
    }

    out
}

/// Render whatever the session currently shows.
pub fn render_view(view: &SessionView<'_>, language: CaptionLanguage) -> String {
    match view {
        SessionView::Idle => String::new(),
        SessionView::Loading => "Analyzing...\n".to_string(),
        SessionView::Error(msg) => format!("Error\n{}\n", msg),
        SessionView::NoClips => "No Clips Found\n\
             The AI could not identify any distinct moments to clip from this video.\n"
            .to_string(),
        SessionView::Clips(clips) => {
            let cards: Vec<String> = clips
                .iter()
                .map(|clip| render_clip_card(clip, language))
                .collect();
            format!("Generated Clips\n\n{}", cards.join("\n"))
        }
    }
}
