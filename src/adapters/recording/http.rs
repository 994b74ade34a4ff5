//! Recording adapter for the `HttpTransport` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::http::{HttpFuture, HttpRequest, HttpTransport};

/// Records HTTP exchanges while delegating to an inner transport.
pub struct RecordingHttpTransport {
    inner: Box<dyn HttpTransport>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingHttpTransport {
    /// Creates a recording transport wrapping the given implementation.
    pub fn new(inner: Box<dyn HttpTransport>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl HttpTransport for RecordingHttpTransport {
    fn post_json(&self, request: &HttpRequest) -> HttpFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let result = self.inner.post_json(&request).await;
            record_result(&self.recorder, "http", "post_json", &request, &result);
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::http::{HttpResponse, TransportError};
    use serde_json::json;

    struct FixedTransport {
        fail: bool,
    }

    impl HttpTransport for FixedTransport {
        fn post_json(&self, _request: &HttpRequest) -> HttpFuture<'_> {
            let result: Result<HttpResponse, TransportError> = if self.fail {
                Err("connection reset".into())
            } else {
                Ok(HttpResponse::new(200, r#"{"result": "x"}"#))
            };
            Box::pin(async move { result })
        }
    }

    fn request() -> HttpRequest {
        HttpRequest {
            url: "http://localhost/titles".into(),
            headers: vec![("accept".into(), "*/*".into())],
            body: json!({"content": "hello"}),
        }
    }

    #[tokio::test]
    async fn records_successful_exchange() {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new("unused.yaml", "t")));
        let transport =
            RecordingHttpTransport::new(Box::new(FixedTransport { fail: false }), recorder.clone());

        let response = transport.post_json(&request()).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(recorder.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn records_failures_and_passes_them_through() {
        let dir = std::env::temp_dir().join("titlegen_recording_http_test");
        let path = dir.join("http.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "t")));
        let transport =
            RecordingHttpTransport::new(Box::new(FixedTransport { fail: true }), recorder.clone());

        let err = transport.post_json(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), "connection reset");
        drop(transport);

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();
        let yaml = std::fs::read_to_string(&path).unwrap();
        assert!(yaml.contains("connection reset"));
        assert!(yaml.contains("http://localhost/titles"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
