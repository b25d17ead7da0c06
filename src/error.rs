//! Error handling for the market SDK

use std::fmt;

use thiserror::Error;

/// Unified error type for the market SDK
#[derive(Error, Debug)]
pub enum Error {
    /// API request errors
    #[error("API error: {0}")]
    Api(#[from] ultraverse_market_api::ApiError),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// General errors
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Create a new general error
    pub fn general<T: fmt::Display>(msg: T) -> Self {
        Error::General(msg.to_string())
    }
}
