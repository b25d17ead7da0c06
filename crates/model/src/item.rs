//! Canonical NFT listing records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::{parse_number, pick, pick_text, pick_url, to_millis, to_number};

/// A normalized NFT listing, safe to hand straight to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Stable render identity; positional index as last resort.
    pub id: String,
    pub title: String,
    /// Validated absolute URL; `None` means "use the fallback asset".
    pub image: Option<String>,
    /// `None` renders as an em-dash, not as zero.
    pub price: Option<f64>,
    pub likes: u64,
    pub author_id: Option<String>,
    pub author_image: Option<String>,
    /// Auction end, epoch milliseconds. `None` disables the countdown.
    pub ends_at: Option<i64>,
}

const ID_KEYS: &[&str] = &["tokenId", "nftId", "id", "itemId", "item_id"];
const IMAGE_KEYS: &[&str] = &["nftImage", "image"];
const TITLE_KEYS: &[&str] = &["title", "name"];
const PRICE_KEYS: &[&str] = &["price", "nftPrice", "priceEth", "current_price", "lastSalePrice"];
const LIKE_KEYS: &[&str] = &["likes", "favorites", "likeCount"];
const END_KEYS: &[&str] = &["expiryDate", "endTime", "endsAt", "deadline", "ending_time", "end"];

/// Map one raw listing record onto an [`Item`].
///
/// Total: any input shape produces a renderable value. `index` is the
/// position of the record in its response and becomes the identity of last
/// resort when no id-ish field is present.
pub fn normalize_item(raw: &Value, index: usize) -> Item {
    Item {
        id: pick_text(raw, ID_KEYS).unwrap_or_else(|| index.to_string()),
        title: pick_text(raw, TITLE_KEYS).unwrap_or_else(|| "Untitled".to_string()),
        image: pick_url(raw, IMAGE_KEYS),
        price: parse_number(pick(raw, PRICE_KEYS)),
        likes: to_number(pick(raw, LIKE_KEYS)).max(0.0) as u64,
        author_id: pick_text(raw, &["authorId"]),
        author_image: pick_url(raw, &["authorImage"]),
        ends_at: pick(raw, END_KEYS).and_then(to_millis),
    }
}

impl Item {
    /// Image URL for rendering, substituting the injected fallback asset.
    pub fn image_url<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.image.as_deref().unwrap_or(fallback)
    }

    /// Price for sort comparisons; missing prices coerce to zero.
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_candidates_resolve_in_priority_order() {
        let raw = json!({ "id": 3, "nftId": 2, "tokenId": 1 });
        assert_eq!(normalize_item(&raw, 9).id, "1");

        let raw = json!({ "itemId": "abc", "item_id": "def" });
        assert_eq!(normalize_item(&raw, 9).id, "abc");

        assert_eq!(normalize_item(&json!({}), 9).id, "9");
    }

    #[test]
    fn missing_title_falls_back_to_untitled() {
        assert_eq!(normalize_item(&json!({}), 0).title, "Untitled");
        assert_eq!(
            normalize_item(&json!({ "name": "Pinky Ocean" }), 0).title,
            "Pinky Ocean"
        );
        assert_eq!(
            normalize_item(&json!({ "title": "", "name": "Fallback" }), 0).title,
            "Fallback"
        );
    }

    #[test]
    fn relative_or_non_string_images_are_rejected() {
        let raw = json!({ "nftImage": "images/nft.png" });
        assert_eq!(normalize_item(&raw, 0).image, None);

        let raw = json!({ "nftImage": 17, "image": "https://cdn.example/a.png" });
        assert_eq!(
            normalize_item(&raw, 0).image,
            Some("https://cdn.example/a.png".to_string())
        );
    }

    #[test]
    fn price_absent_or_unparseable_is_none() {
        assert_eq!(normalize_item(&json!({}), 0).price, None);
        assert_eq!(normalize_item(&json!({ "price": "n/a" }), 0).price, None);
        assert_eq!(
            normalize_item(&json!({ "nftPrice": "4.2 ETH" }), 0).price,
            Some(4.2)
        );
        assert_eq!(
            normalize_item(&json!({ "lastSalePrice": 1.5 }), 0).price,
            Some(1.5)
        );
    }

    #[test]
    fn end_time_units_are_normalized() {
        let raw = json!({ "expiryDate": 1_700_000_000 });
        assert_eq!(normalize_item(&raw, 0).ends_at, Some(1_700_000_000_000));

        let raw = json!({ "deadline": 1_700_000_000_000i64 });
        assert_eq!(normalize_item(&raw, 0).ends_at, Some(1_700_000_000_000));

        let raw = json!({ "ending_time": "garbage" });
        assert_eq!(normalize_item(&raw, 0).ends_at, None);

        assert_eq!(normalize_item(&json!({}), 0).ends_at, None);
    }

    #[test]
    fn likes_default_to_zero() {
        assert_eq!(normalize_item(&json!({}), 0).likes, 0);
        assert_eq!(normalize_item(&json!({ "favorites": 12 }), 0).likes, 12);
        assert_eq!(normalize_item(&json!({ "likeCount": "33" }), 0).likes, 33);
    }

    #[test]
    fn image_url_substitutes_fallback() {
        let item = normalize_item(&json!({}), 0);
        assert_eq!(item.image_url("images/nftImage.jpg"), "images/nftImage.jpg");
    }
}
