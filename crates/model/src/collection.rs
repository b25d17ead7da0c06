//! Canonical hot-collection entries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::{pick_text, pick_url};

/// A normalized entry of the hot-collections carousel: a subset of the
/// item fields plus the token-standard label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub title: String,
    /// Validated absolute URL; `None` means "use the fallback asset".
    pub image: Option<String>,
    /// Token-standard chip, e.g. `"ERC-192"`.
    pub token: String,
    pub author_id: Option<String>,
    pub author_image: Option<String>,
}

const ID_KEYS: &[&str] = &["nftId", "id", "itemId"];
const IMAGE_KEYS: &[&str] = &["nftImage", "nft", "image"];
const TITLE_KEYS: &[&str] = &["name", "title"];
const TOKEN_KEYS: &[&str] = &["code", "token"];
const AUTHOR_ID_KEYS: &[&str] = &["authorId", "author.id"];
const AUTHOR_IMAGE_KEYS: &[&str] = &["authorImage", "author.avatar"];

/// Map one raw collection record onto a [`Collection`]; `index` is the
/// identity of last resort.
pub fn normalize_collection(raw: &Value, index: usize) -> Collection {
    Collection {
        id: pick_text(raw, ID_KEYS).unwrap_or_else(|| index.to_string()),
        title: pick_text(raw, TITLE_KEYS).unwrap_or_else(|| "Untitled".to_string()),
        image: pick_url(raw, IMAGE_KEYS),
        token: pick_text(raw, TOKEN_KEYS).unwrap_or_else(|| "ERC-192".to_string()),
        author_id: pick_text(raw, AUTHOR_ID_KEYS),
        author_image: pick_url(raw, AUTHOR_IMAGE_KEYS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_chip_defaults_to_erc_192() {
        assert_eq!(normalize_collection(&json!({}), 0).token, "ERC-192");
        assert_eq!(
            normalize_collection(&json!({ "code": "ERC-721" }), 0).token,
            "ERC-721"
        );
        assert_eq!(
            normalize_collection(&json!({ "token": "ERC-1155" }), 0).token,
            "ERC-1155"
        );
    }

    #[test]
    fn collection_title_prefers_name_over_title() {
        let raw = json!({ "name": "Abstraction", "title": "Other" });
        assert_eq!(normalize_collection(&raw, 0).title, "Abstraction");
    }

    #[test]
    fn author_fields_fall_back_to_the_nested_record() {
        let raw = json!({
            "author": { "id": 12, "avatar": "https://cdn.example/a.png" }
        });
        let collection = normalize_collection(&raw, 0);
        assert_eq!(collection.author_id, Some("12".to_string()));
        assert_eq!(
            collection.author_image,
            Some("https://cdn.example/a.png".to_string())
        );
    }

    #[test]
    fn image_candidates_include_the_nft_spelling() {
        let raw = json!({ "nft": "https://cdn.example/coll.png" });
        assert_eq!(
            normalize_collection(&raw, 0).image,
            Some("https://cdn.example/coll.png".to_string())
        );
    }

    #[test]
    fn index_is_the_identity_of_last_resort() {
        assert_eq!(normalize_collection(&json!({}), 4).id, "4");
    }
}
