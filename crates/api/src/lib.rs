//! Ultraverse Market API client
//!
//! This crate provides the HTTP layer of the marketplace browse SDK: one
//! operation per public endpoint, cooperative cancellation, and the error
//! taxonomy the view controllers are written against. Responses are
//! untyped `serde_json::Value` payloads; the server enforces no schema,
//! so shaping them is the normalizer's job, not the transport's.

mod cancel;
mod client;
mod error;
mod fetch;

pub use cancel::CancelToken;
pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use fetch::FetchBuilder;
