//! Command dispatch and handlers.

pub mod generate;

use std::time::Duration;

use crate::cli::Cli;
use crate::config::ClientConfig;
use crate::context::{Recording, ServiceContext};

/// Run the parsed command.
///
/// When `TITLEGEN_RECORD` is set to a file path, HTTP exchanges are recorded
/// to that cassette; `TITLEGEN_REPLAY` serves them from one instead.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or title generation fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = resolve_config(cli, ClientConfig::from_env()?);
    let ctx = ServiceContext::from_env(&config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;

    let (transport, recording) = ctx.into_parts();
    let result = runtime.block_on(generate::run(config, transport, &cli.content, &cli.tone));

    // Finish recording after the command completes (even on error)
    finish_recording(recording, result)
}

/// Write the cassette, if any, and return the command's result.
///
/// When both the command and the cassette write fail, both messages are kept.
fn finish_recording(recording: Recording, result: Result<(), String>) -> Result<(), String> {
    match (recording.finish(), result) {
        (Ok(saved), result) => {
            if let Some(path) = saved {
                eprintln!("Recording saved to: {}", path.display());
            }
            result
        }
        (Err(write), Ok(())) => Err(write),
        (Err(write), Err(generation)) => {
            log::error!("cassette write failed after command error: {write}");
            Err(format!("{generation}\n{write}"))
        }
    }
}

/// Apply CLI flags on top of the environment-derived config.
fn resolve_config(cli: &Cli, mut config: ClientConfig) -> ClientConfig {
    if let Some(endpoint) = &cli.endpoint {
        config = config.with_endpoint(endpoint.as_str());
    }
    if let Some(model) = &cli.model {
        config = config.with_model(model.as_str());
    }
    if let Some(secs) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}
