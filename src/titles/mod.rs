//! Title generation: request building, the HTTP round trip, and response parsing.

pub mod client;
pub mod parse;
pub mod request;

use std::future::Future;
use std::pin::Pin;

use crate::error::TitleGenerationError;

pub use client::TitleRequestClient;
pub use parse::extract_titles;
pub use request::{GenerationRequest, GenerationResult};

/// Boxed future type alias used by [`TitleGenerator`] to keep the trait dyn-compatible.
pub type TitleFuture<'a> =
    Pin<Box<dyn Future<Output = Result<GenerationResult, TitleGenerationError>> + Send + 'a>>;

/// Turns a piece of content into candidate titles.
pub trait TitleGenerator: Send + Sync {
    /// Generates titles for `content`. `tone` defaults to `"auto"` when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TitleGenerationError`] on any transport or response failure;
    /// no partial result is returned.
    fn generate_titles<'a>(&'a self, content: &'a str, tone: Option<&'a str>) -> TitleFuture<'a>;
}
