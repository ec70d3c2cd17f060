//! Terminal front-end: analyze one video and print its highlight clips.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use smartclip_app::{init_tracing, render_view, AnalysisSession, CaptionLanguage};
use smartclip_gemini::GeminiClient;
use smartclip_models::{ClipStyle, VideoFile};

#[derive(Debug, Parser)]
#[command(
    name = "smartclip",
    version,
    about = "Find viral-ready clips in a video with Gemini"
)]
struct Args {
    /// Local video file (MP4, MOV or WebM)
    #[arg(long, conflicts_with = "url", required_unless_present = "url")]
    file: Option<PathBuf>,

    /// Video link (not yet supported for analysis)
    #[arg(long)]
    url: Option<String>,

    /// Clip style: Cooking, "Product Review", Interview or "Funny Moments"
    #[arg(long, default_value_t = ClipStyle::Cooking)]
    style: ClipStyle,

    /// Caption language to display
    #[arg(long, value_enum, default_value_t = CaptionLanguage::English)]
    lang: CaptionLanguage,

    /// Print clips as JSON instead of cards
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    info!("Starting smartclip");

    let mut session = AnalysisSession::new();
    if let Some(path) = &args.file {
        let file = VideoFile::from_path(path)
            .with_context(|| format!("Cannot use {}", path.display()))?;
        session.select_file(file);
    } else if let Some(url) = args.url {
        session.select_url(url);
    }

    // Credentials are read now, right before the request.
    let client = GeminiClient::from_env().context("Failed to build HTTP client")?;
    info!(model = %client.config().model, "Using Gemini model");

    let state = session.analyze(&client, args.style).await;

    if state.error().is_some() {
        error!("Analysis failed");
        eprint!("{}", render_view(&session.view(), args.lang));
        std::process::exit(1);
    }

    match session.state().clips() {
        Some(clips) if args.json => {
            println!("{}", serde_json::to_string_pretty(clips)?);
        }
        _ => {
            print!("{}", render_view(&session.view(), args.lang));
        }
    }

    Ok(())
}
