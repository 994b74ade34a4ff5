//! Service context choosing which HTTP transport the client uses.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::LiveHttpTransport;
use crate::adapters::recording::RecordingHttpTransport;
use crate::adapters::replaying::ReplayingHttpTransport;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::config::ClientConfig;
use crate::ports::http::HttpTransport;

/// Env var naming a cassette file to record HTTP exchanges into.
pub const RECORD_ENV: &str = "TITLEGEN_RECORD";
/// Env var naming a cassette file to serve HTTP exchanges from.
pub const REPLAY_ENV: &str = "TITLEGEN_REPLAY";

/// The transport a command should use, plus the recorder to flush afterwards
/// when recording.
pub struct ServiceContext {
    /// Transport handed to the title client.
    pub transport: Box<dyn HttpTransport>,
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Real network access with `config`'s timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn live(config: &ClientConfig) -> Result<Self, String> {
        let transport = LiveHttpTransport::new(config.timeout, config.connect_timeout)
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;
        Ok(Self { transport: Box::new(transport), recorder: None })
    }

    /// Real network access, with every exchange recorded to a cassette at `path`.
    ///
    /// Nothing is written until [`ServiceContext::finish`] is called.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn recording(config: &ClientConfig, path: &Path) -> Result<Self, String> {
        let live = Self::live(config)?;
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, "titlegen-session")));
        let transport = RecordingHttpTransport::new(live.transport, Arc::clone(&recorder));
        Ok(Self { transport: Box::new(transport), recorder: Some(recorder) })
    }

    /// Exchanges served from the cassette at `path`; no network access.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let replayer = CassetteReplayer::from_file(path)?;
        Ok(Self { transport: Box::new(ReplayingHttpTransport::new(replayer)), recorder: None })
    }

    /// Picks recording, replaying or live based on `TITLEGEN_RECORD` and
    /// `TITLEGEN_REPLAY` in the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if both variables are set or the chosen context cannot be built.
    pub fn from_env(config: &ClientConfig) -> Result<Self, String> {
        Self::from_lookup(config, |key| env::var(key).ok())
    }

    /// Like [`ServiceContext::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if both variables are set or the chosen context cannot be built.
    pub fn from_lookup<F>(config: &ClientConfig, lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty()).map(PathBuf::from);
        match (non_empty(RECORD_ENV), non_empty(REPLAY_ENV)) {
            (Some(_), Some(_)) => Err(format!("{RECORD_ENV} and {REPLAY_ENV} cannot both be set")),
            (Some(path), None) => {
                log::info!("recording HTTP exchanges to {}", path.display());
                Self::recording(config, &path)
            }
            (None, Some(path)) => {
                log::info!("replaying HTTP exchanges from {}", path.display());
                Self::replaying(&path)
            }
            (None, None) => Self::live(config),
        }
    }

    /// Whether exchanges are being captured to a cassette.
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recorder.is_some()
    }

    /// Splits the context into the transport and a handle for finishing the recording.
    #[must_use]
    pub fn into_parts(self) -> (Box<dyn HttpTransport>, Recording) {
        (self.transport, Recording { recorder: self.recorder })
    }
}

/// Pending cassette write, if the context was recording.
pub struct Recording {
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl Recording {
    /// Writes the cassette to disk and returns its path, or `None` when not recording.
    ///
    /// The transport must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport is still alive or the file cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, String> {
        let Some(arc) = self.recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(arc)
            .map_err(|_| "Recording transport still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        let path = recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))?;
        Ok(Some(path))
    }
}
