//! Replaying adapter for the `HttpTransport` port.

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::http::{HttpFuture, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Serves recorded HTTP exchanges from a cassette.
pub struct ReplayingHttpTransport {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingHttpTransport {
    /// Creates a replaying transport backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next_result(&self) -> Result<HttpResponse, TransportError> {
        let output = {
            let mut replayer =
                self.replayer.lock().map_err(|e| format!("replayer lock poisoned: {e}"))?;
            replayer.next_interaction("http", "post_json")?.output.clone()
        };

        if let Some(message) = output.get("Err") {
            let message = message.as_str().map_or_else(|| message.to_string(), str::to_string);
            return Err(message.into());
        }
        let ok = output
            .get("Ok")
            .cloned()
            .ok_or("http::post_json: recorded output has neither Ok nor Err")?;
        serde_json::from_value(ok)
            .map_err(|e| format!("http::post_json: failed to deserialize HttpResponse: {e}").into())
    }
}

impl HttpTransport for ReplayingHttpTransport {
    fn post_json(&self, _request: &HttpRequest) -> HttpFuture<'_> {
        let result = self.next_result();
        Box::pin(async move { result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_transport(outputs: Vec<serde_json::Value>) -> ReplayingHttpTransport {
        let interactions = outputs
            .into_iter()
            .zip(0..)
            .map(|(output, seq)| Interaction {
                seq,
                port: "http".into(),
                method: "post_json".into(),
                input: json!({}),
                output,
            })
            .collect();
        let cassette = Cassette { name: "test".into(), recorded_at: Utc::now(), interactions };
        ReplayingHttpTransport::new(CassetteReplayer::new(&cassette))
    }

    fn request() -> HttpRequest {
        HttpRequest { url: "http://localhost/titles".into(), headers: vec![], body: json!({}) }
    }

    #[tokio::test]
    async fn serves_recorded_responses_then_reports_exhaustion() {
        let transport = make_transport(vec![
            json!({"Ok": {"status": 200, "body": "first"}}),
            json!({"Err": "timed out"}),
        ]);

        let first = transport.post_json(&request()).await.unwrap();
        assert_eq!(first, HttpResponse::new(200, "first"));

        let second = transport.post_json(&request()).await.unwrap_err();
        assert_eq!(second.to_string(), "timed out");

        let third = transport.post_json(&request()).await.unwrap_err();
        assert!(third.to_string().contains("Cassette exhausted"));
    }

    #[tokio::test]
    async fn malformed_output_is_an_error() {
        let transport = make_transport(vec![json!({"status": 200})]);
        let err = transport.post_json(&request()).await.unwrap_err();
        assert!(err.to_string().contains("neither Ok nor Err"));
    }
}
