//! CLI definitions for the summarizer.

use clap::Parser;
use summarizer_core::SummaryStyle;

/// Summarize a web page or a YouTube video's captions with Gemini.
#[derive(Parser)]
#[command(name = "summarizer")]
#[command(about = "Summarize web pages and YouTube videos")]
#[command(version)]
pub(crate) struct Cli {
    /// Page or watch URL to summarize
    pub url: String,

    /// Summary style: brief, detailed, or bullets
    #[arg(short, long, default_value = "brief", value_parser = parse_style)]
    pub style: SummaryStyle,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for generation
    #[arg(long, default_value = summarizer_engine::DEFAULT_MODEL)]
    pub model: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_style(input: &str) -> Result<SummaryStyle, String> {
    SummaryStyle::parse(input)
        .ok_or_else(|| format!("unknown style '{input}' (expected brief, detailed, or bullets)"))
}
