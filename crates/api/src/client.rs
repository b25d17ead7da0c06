//! Typed operations over the marketplace's public read-only endpoints.

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::Client;
use serde_json::Value;

use crate::cancel::CancelToken;
use crate::error::{ApiError, Result};
use crate::fetch::FetchBuilder;

/// Default Cloud Functions host serving the public marketplace API.
pub const DEFAULT_BASE_URL: &str = "https://us-central1-nft-cloud-functions.cloudfunctions.net/";

/// Client for the marketplace browse API.
///
/// One method per endpoint; every method issues exactly one GET and races
/// the supplied cancellation token. Author and detail lookups carry a
/// cache-busting `t` parameter so intermediaries never serve a stale
/// profile.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http_client: Client,
}

impl ApiClient {
    /// Create a new client against `base_url`, sharing `http_client` with
    /// the rest of the SDK.
    pub fn new(base_url: &str, http_client: Client) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        Self {
            base_url,
            http_client,
        }
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}{}", self.base_url, name)
    }

    fn cache_bust() -> String {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis().to_string())
            .unwrap_or_else(|_| "0".to_string())
    }

    /// `GET hotCollections`: Collection-shaped records.
    pub async fn hot_collections(&self, cancel: &CancelToken) -> Result<Vec<Value>> {
        let body = FetchBuilder::new(&self.http_client, &self.endpoint("hotCollections"))
            .execute(cancel)
            .await?;
        Ok(as_list(body))
    }

    /// `GET newItems`: Item-shaped records.
    pub async fn new_items(&self, cancel: &CancelToken) -> Result<Vec<Value>> {
        let body = FetchBuilder::new(&self.http_client, &self.endpoint("newItems"))
            .execute(cancel)
            .await?;
        Ok(as_list(body))
    }

    /// `GET topSellers`: Author-shaped records.
    pub async fn top_sellers(&self, cancel: &CancelToken) -> Result<Vec<Value>> {
        let body = FetchBuilder::new(&self.http_client, &self.endpoint("topSellers"))
            .execute(cancel)
            .await?;
        Ok(as_list(body))
    }

    /// `GET explore`: Item-shaped records.
    pub async fn explore(&self, cancel: &CancelToken) -> Result<Vec<Value>> {
        let body = FetchBuilder::new(&self.http_client, &self.endpoint("explore"))
            .execute(cancel)
            .await?;
        Ok(as_list(body))
    }

    /// `GET authors?author=<id>&t=<now>`: the raw author record, or
    /// `Value::Null` when the server has nothing for this id.
    pub async fn author(&self, author_id: &str, cancel: &CancelToken) -> Result<Value> {
        if author_id.trim().is_empty() {
            return Err(ApiError::MissingArgument("author_id"));
        }
        FetchBuilder::new(&self.http_client, &self.endpoint("authors"))
            .query("author", author_id)
            .query("t", &Self::cache_bust())
            .execute(cancel)
            .await
    }

    /// Same endpoint as [`ApiClient::author`], unwrapping the embedded
    /// item array from whichever container the server chose for this
    /// response.
    pub async fn author_items(&self, author_id: &str, cancel: &CancelToken) -> Result<Vec<Value>> {
        let body = self.author(author_id, cancel).await?;
        Ok(extract_item_list(&body))
    }

    /// `GET itemDetails?nftId=<id>&t=<now>`: the raw detail record, or
    /// `Value::Null` when the server has nothing for this id.
    pub async fn item_details(&self, nft_id: &str, cancel: &CancelToken) -> Result<Value> {
        if nft_id.trim().is_empty() {
            return Err(ApiError::MissingArgument("nft_id"));
        }
        FetchBuilder::new(&self.http_client, &self.endpoint("itemDetails"))
            .query("nftId", nft_id)
            .query("t", &Self::cache_bust())
            .execute(cancel)
            .await
    }
}

/// A list body, or empty for null/non-array bodies.
fn as_list(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

/// The authors endpoint nests its item array inconsistently. Probe the
/// known containers in a fixed order, then fall back to the single-record
/// shapes.
fn extract_item_list(body: &Value) -> Vec<Value> {
    if let Value::Array(items) = body {
        return items.clone();
    }

    const LIST_KEYS: &[&str] = &["nftItems", "items", "nftCollection"];
    let scopes = [Some(body), body.get("author"), body.get("data")];
    for scope in scopes.into_iter().flatten() {
        for key in LIST_KEYS {
            if let Some(Value::Array(items)) = scope.get(key) {
                return items.clone();
            }
        }
    }

    for key in ["nft", "item"] {
        match body.get(key) {
            Some(Value::Null) | None => {}
            Some(single) => return vec![single.clone()],
        }
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extract_handles_every_known_container() {
        let items = json!([{ "nftId": 1 }, { "nftId": 2 }]);

        assert_eq!(extract_item_list(&items).len(), 2);
        assert_eq!(extract_item_list(&json!({ "nftItems": items })).len(), 2);
        assert_eq!(extract_item_list(&json!({ "items": items })).len(), 2);
        assert_eq!(extract_item_list(&json!({ "nftCollection": items })).len(), 2);
        assert_eq!(
            extract_item_list(&json!({ "author": { "items": items } })).len(),
            2
        );
        assert_eq!(
            extract_item_list(&json!({ "data": { "nftCollection": items } })).len(),
            2
        );
    }

    #[test]
    fn extract_wraps_single_record_shapes() {
        let body = json!({ "nft": { "nftId": 7 } });
        let list = extract_item_list(&body);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["nftId"], 7);

        let body = json!({ "item": { "nftId": 8 } });
        assert_eq!(extract_item_list(&body).len(), 1);
    }

    #[test]
    fn extract_yields_empty_for_unknown_shapes() {
        assert!(extract_item_list(&json!(null)).is_empty());
        assert!(extract_item_list(&json!({ "unrelated": true })).is_empty());
        assert!(extract_item_list(&json!({ "nft": null })).is_empty());
    }

    #[test]
    fn top_level_containers_win_over_nested_ones() {
        let body = json!({
            "items": [{ "nftId": 1 }],
            "author": { "items": [{ "nftId": 2 }, { "nftId": 3 }] }
        });
        let list = extract_item_list(&body);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["nftId"], 1);
    }
}
