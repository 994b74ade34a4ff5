//! Replaying adapters that replay recorded interactions.

pub mod http;

pub use http::ReplayingHttpTransport;
