//! Client configuration and its defaults.

use std::env;
use std::time::Duration;

/// Default title-generation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://seoroast.co/api/generate-youtube-titles";
/// Default `origin` header value expected by the service.
pub const DEFAULT_ORIGIN: &str = "https://seoroast.co";
/// Default remote model identifier.
pub const DEFAULT_MODEL: &str = "google/gemini-flash-1.5";
/// Tone sent when the caller does not pick one.
pub const DEFAULT_TONE: &str = "auto";
/// Total time allowed for one request, including reading the body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Time allowed to establish the TCP/TLS connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const ACCEPT: &str = "*/*";
const CONTENT_TYPE: &str = "application/json";

/// Read-only settings shared by every call a client makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// URL the request is POSTed to.
    pub endpoint: String,
    /// Value of the `origin` header.
    pub origin: String,
    /// Model identifier placed in every request body.
    pub model: String,
    /// Total request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `TITLEGEN_*` variables from the process
    /// environment or a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error string if `TITLEGEN_TIMEOUT_SECS` is not a positive number of seconds.
    pub fn from_env() -> Result<Self, String> {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `TITLEGEN_*` key.
    ///
    /// # Errors
    ///
    /// Returns an error string if `TITLEGEN_TIMEOUT_SECS` is not a positive number of seconds.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(endpoint) = lookup("TITLEGEN_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Some(origin) = lookup("TITLEGEN_ORIGIN") {
            config.origin = origin;
        }
        if let Some(model) = lookup("TITLEGEN_MODEL") {
            config.model = model;
        }
        if let Some(raw) = lookup("TITLEGEN_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("Invalid TITLEGEN_TIMEOUT_SECS {raw:?}: {e}"))?;
            if secs == 0 {
                return Err("TITLEGEN_TIMEOUT_SECS must be at least 1".to_string());
            }
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Replaces the endpoint URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replaces the `origin` header value.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Replaces the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Replaces the total request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The fixed header set sent with every request.
    #[must_use]
    pub fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("accept".to_string(), ACCEPT.to_string()),
            ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
            ("origin".to_string(), self.origin.clone()),
        ]
    }
}
