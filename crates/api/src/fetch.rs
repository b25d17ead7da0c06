//! Request building and execution against the marketplace endpoints.

use log::debug;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::cancel::CancelToken;
use crate::error::{ApiError, Result};

/// Helper for building and executing GET requests.
pub struct FetchBuilder<'a> {
    client: &'a Client,
    url: String,
    query_params: Vec<(String, String)>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a new FetchBuilder for `url`.
    pub fn new(client: &'a Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
            query_params: Vec::new(),
        }
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query_params.push((key.to_string(), value.to_string()));
        self
    }

    fn build_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.url)?;
        if !self.query_params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query_params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Execute the request, racing the cancellation token.
    ///
    /// The parsed JSON body is returned as-is; an empty body parses as
    /// `Value::Null`. Only transport failures, non-success statuses and
    /// cancellation produce errors; "no data" is not one.
    pub async fn execute(&self, cancel: &CancelToken) -> Result<Value> {
        let url = self.build_url()?;
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        debug!("GET {}", url);

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ApiError::Cancelled),
            response = self.client.get(url).send() => response?,
        };

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, message });
        }

        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ApiError::Cancelled),
            body = response.bytes() => body?,
        };

        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&body)?)
    }
}
