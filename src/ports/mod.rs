//! Port traits defining external boundaries.
//!
//! The only boundary is the HTTP transport; implementations live in
//! `src/adapters/`.

pub mod http;

pub use http::{HttpFuture, HttpRequest, HttpResponse, HttpTransport, TransportError};
