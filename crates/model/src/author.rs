//! Canonical author/seller records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::item::{normalize_item, Item};
use crate::value::{pick, pick_text, pick_url, to_number};

/// Placeholder follower count shown while the API withholds the real one.
pub const DEFAULT_FOLLOWERS: u64 = 573;

/// A normalized author (or top-seller) profile.
///
/// `id: None` means the entity is non-navigable: profile links must be
/// disabled rather than point at a broken route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: Option<String>,
    pub name: String,
    /// Validated absolute URL; `None` means "use the fallback asset".
    pub avatar: Option<String>,
    pub username: String,
    pub wallet: String,
    pub followers: u64,
    /// Sales volume shown on top-seller cards.
    pub price_eth: f64,
    /// Embedded listings, when the response carries them.
    pub items: Vec<Item>,
}

const ID_KEYS: &[&str] = &["authorId", "profileId", "userId", "uid", "id"];
const NAME_KEYS: &[&str] = &["authorName", "name"];
const AVATAR_KEYS: &[&str] = &["authorImage", "avatar", "image"];
const WALLET_KEYS: &[&str] = &["address", "wallet", "walletAddress", "account"];
const PRICE_ETH_KEYS: &[&str] = &["priceEth", "price", "eth"];
const ITEM_LIST_KEYS: &[&str] = &["nftItems", "items", "nftCollection"];

/// Map one raw author record onto an [`Author`].
///
/// `fallback_id` (typically the route parameter the record was fetched
/// for) is used when none of the id candidates is present; pass `None` to
/// get a non-navigable entity instead of guessing.
pub fn normalize_author(raw: &Value, fallback_id: Option<&str>) -> Author {
    let items = pick(raw, ITEM_LIST_KEYS)
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .enumerate()
                .map(|(index, entry)| normalize_item(entry, index))
                .collect()
        })
        .unwrap_or_default();

    Author {
        id: pick_text(raw, ID_KEYS).or_else(|| fallback_id.map(str::to_string)),
        name: pick_text(raw, NAME_KEYS).unwrap_or_else(|| "Unknown".to_string()),
        avatar: pick_url(raw, AVATAR_KEYS),
        username: pick_text(raw, &["username"]).unwrap_or_else(|| "@creator".to_string()),
        wallet: pick_text(raw, WALLET_KEYS).unwrap_or_default(),
        followers: pick(raw, &["followers"])
            .map(|v| to_number(Some(v)).max(0.0) as u64)
            .unwrap_or(DEFAULT_FOLLOWERS),
        price_eth: to_number(pick(raw, PRICE_ETH_KEYS)),
        items,
    }
}

impl Author {
    /// Avatar URL for rendering, substituting the injected fallback asset.
    pub fn avatar_url<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.avatar.as_deref().unwrap_or(fallback)
    }

    /// Whether profile links for this entity may be emitted at all.
    pub fn is_navigable(&self) -> bool {
        self.id.is_some()
    }
}
