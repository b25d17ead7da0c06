//! Error taxonomy for the marketplace API client.

use thiserror::Error;

/// Result alias used across the API crate.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Unified error type for marketplace API operations.
///
/// `Cancelled` is deliberately a distinct variant: controllers swallow it
/// instead of surfacing error UI, because an aborted request means the
/// view moved on, not that anything failed.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required identifier was absent; no request was issued.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The body was not parseable as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The endpoint URL could not be built.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The request was aborted by its `CancelToken`.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}
