//! `titlegen <CONTENT>`: print numbered title candidates.

use std::fmt::Write as _;

use crate::config::ClientConfig;
use crate::ports::http::HttpTransport;
use crate::titles::{GenerationResult, TitleGenerator, TitleRequestClient};

/// Generate titles for `content` and print them, one per line, numbered from 1.
///
/// # Errors
///
/// Returns `Error: <message>` if title generation fails.
pub async fn run(
    config: ClientConfig,
    transport: Box<dyn HttpTransport>,
    content: &str,
    tone: &str,
) -> Result<(), String> {
    let client = TitleRequestClient::with_transport(config, transport);
    let result =
        client.generate_titles(content, Some(tone)).await.map_err(|e| format!("Error: {e}"))?;
    print!("{}", render(&result));
    Ok(())
}

/// Numbered listing of `result`, one title per line.
#[must_use]
pub fn render(result: &GenerationResult) -> String {
    let mut out = String::new();
    for (index, title) in result.titles.iter().enumerate() {
        let _ = writeln!(out, "{}. {title}", index + 1);
    }
    out
}
