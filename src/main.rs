//! Binary entrypoint for the `titlegen` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Recording and replay are handled in commands::dispatch via TITLEGEN_RECORD / TITLEGEN_REPLAY.
    match titlegen::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
