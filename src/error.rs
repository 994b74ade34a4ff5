//! Domain error raised by title generation.

use std::fmt::Display;

/// Any failure while generating titles.
///
/// Transport failures and unexpected failures share this one type; they differ
/// only in the message prefix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TitleGenerationError {
    message: String,
}

impl TitleGenerationError {
    /// The request could not be completed, timed out, or returned a non-2xx status.
    pub fn transport(cause: impl Display) -> Self {
        Self { message: format!("An error occurred while generating YouTube titles: {cause}") }
    }

    /// Anything else that went wrong while building the request or reading the response.
    pub fn unexpected(cause: impl Display) -> Self {
        Self { message: format!("An unexpected error occurred: {cause}") }
    }

    /// Human-readable description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
