//! Live adapter for the `HttpTransport` port using reqwest.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;

use crate::ports::http::{HttpFuture, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Live transport that performs real HTTP requests.
pub struct LiveHttpTransport {
    client: Client,
}

impl LiveHttpTransport {
    /// Creates a transport whose requests give up after `timeout` overall and
    /// `connect_timeout` for the connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend or resolver cannot be initialised.
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).connect_timeout(connect_timeout).build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for LiveHttpTransport {
    fn post_json(&self, request: &HttpRequest) -> HttpFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let mut builder = self.client.post(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            let response = builder.json(&request.body).send().await.map_err(
                |e| -> TransportError { format!("request to {} failed: {e}", request.url).into() },
            )?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value.to_str().ok().map(|v| (name.as_str().to_string(), v.to_string()))
                })
                .collect::<BTreeMap<_, _>>();

            let body = response.text().await.map_err(|e| -> TransportError {
                format!("failed to read response from {}: {e}", request.url).into()
            })?;

            Ok::<_, TransportError>(HttpResponse { status, headers, body })
        })
    }
}
