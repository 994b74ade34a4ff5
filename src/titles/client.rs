//! HTTP-backed title generator.

use serde_json::Value;

use super::parse::extract_titles;
use super::request::{GenerationRequest, GenerationResult};
use super::{TitleFuture, TitleGenerator};
use crate::adapters::live::LiveHttpTransport;
use crate::config::{ClientConfig, DEFAULT_TONE};
use crate::error::TitleGenerationError;
use crate::ports::http::{HttpRequest, HttpTransport};

/// Sends content to the title service and parses the candidates it returns.
///
/// Holds no state between calls besides its read-only configuration.
pub struct TitleRequestClient {
    config: ClientConfig,
    transport: Box<dyn HttpTransport>,
}

impl TitleRequestClient {
    /// A client that talks to the network using `config`'s timeouts.
    ///
    /// # Errors
    ///
    /// Returns an unexpected-failure error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, TitleGenerationError> {
        let transport = LiveHttpTransport::new(config.timeout, config.connect_timeout)
            .map_err(TitleGenerationError::unexpected)?;
        Ok(Self::with_transport(config, Box::new(transport)))
    }

    /// A client that sends through `transport` instead of the network.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: Box<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The body that [`TitleGenerator::generate_titles`] would send.
    #[must_use]
    pub fn build_request(&self, content: &str, tone: Option<&str>) -> GenerationRequest {
        GenerationRequest::new(content, self.config.model.as_str())
            .with_tone(tone.unwrap_or(DEFAULT_TONE))
    }

    /// Sends `request` and extracts titles from the response.
    ///
    /// # Errors
    ///
    /// Returns a transport error when no response arrives or the status is not
    /// 2xx, and an unexpected error when the body is not a JSON object.
    pub async fn send(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, TitleGenerationError> {
        let body = serde_json::to_value(request).map_err(TitleGenerationError::unexpected)?;
        let http_request = HttpRequest {
            url: self.config.endpoint.clone(),
            headers: self.config.headers(),
            body,
        };

        log::debug!(
            "POST {} (model={}, tone={})",
            http_request.url,
            request.model(),
            request.tone()
        );
        let response = self
            .transport
            .post_json(&http_request)
            .await
            .map_err(TitleGenerationError::transport)?;

        if !response.is_success() {
            return Err(TitleGenerationError::transport(format!(
                "HTTP status {} returned by {}",
                response.status, http_request.url
            )));
        }

        let payload: Value =
            serde_json::from_str(&response.body).map_err(TitleGenerationError::unexpected)?;
        let Value::Object(fields) = payload else {
            return Err(TitleGenerationError::unexpected("response body is not a JSON object"));
        };

        let raw = match fields.get("result") {
            Some(Value::String(raw)) => raw.as_str(),
            Some(other) => {
                log::warn!("response field `result` is not a string: {other}");
                ""
            }
            None => {
                log::warn!("response has no `result` field");
                ""
            }
        };

        let titles = extract_titles(raw);
        log::debug!("extracted {} title(s)", titles.len());
        Ok(GenerationResult { titles })
    }
}

impl TitleGenerator for TitleRequestClient {
    fn generate_titles<'a>(&'a self, content: &'a str, tone: Option<&'a str>) -> TitleFuture<'a> {
        Box::pin(async move {
            let request = self.build_request(content, tone);
            self.send(&request).await
        })
    }
}
