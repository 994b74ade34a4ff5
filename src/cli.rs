//! CLI argument definitions.

use clap::Parser;

use crate::config::DEFAULT_TONE;

/// Top-level CLI parser for `titlegen`.
#[derive(Debug, Parser)]
#[command(name = "titlegen", version, about = "Ask the title service for candidate titles")]
pub struct Cli {
    /// Text to generate titles for.
    pub content: String,

    /// Stylistic hint forwarded to the service (e.g. funny, serious).
    #[arg(long, default_value = DEFAULT_TONE)]
    pub tone: String,

    /// Remote model identifier; overrides TITLEGEN_MODEL.
    #[arg(long)]
    pub model: Option<String>,

    /// Endpoint URL; overrides TITLEGEN_ENDPOINT.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Total request timeout in seconds; overrides TITLEGEN_TIMEOUT_SECS.
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}
