//! Canonical item-detail records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::{is_truthy, parse_number, pick, pick_text, pick_url, to_number};

/// Owner or creator reference on a detail page. The API returns these as a
/// nested object, a bare name string, or a scatter of flat fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: Option<String>,
    pub name: String,
    /// Validated absolute URL; `None` means "use the fallback asset".
    pub avatar: Option<String>,
}

/// A normalized item-detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    pub id: String,
    pub title: String,
    /// Category chip next to the title, rendered with a `#` prefix.
    pub tag: Option<String>,
    pub description: String,
    pub image: Option<String>,
    pub views: u64,
    pub likes: u64,
    pub price: Option<f64>,
    pub owner: Party,
    pub creator: Party,
}

const IMAGE_KEYS: &[&str] = &["nftImage", "image", "img"];
const TAG_KEYS: &[&str] = &["tag", "itemTag", "category", "collectionTag"];
const PRICE_KEYS: &[&str] = &["price", "priceEth", "listPrice"];

struct PartyKeys {
    containers: &'static [&'static str],
    flat_id: &'static [&'static str],
    flat_name: &'static [&'static str],
    flat_avatar: &'static [&'static str],
}

const OWNER_KEYS: PartyKeys = PartyKeys {
    containers: &["owner", "currentOwner", "ownerInfo"],
    flat_id: &["ownerId", "ownerID"],
    flat_name: &["ownerName", "owner"],
    flat_avatar: &["ownerAvatar", "ownerImage"],
};

const CREATOR_KEYS: PartyKeys = PartyKeys {
    containers: &["creator", "author", "creatorInfo"],
    flat_id: &["creatorId", "creatorID"],
    flat_name: &["creatorName", "creator"],
    flat_avatar: &["creatorAvatar", "creatorImage"],
};

/// Map one raw detail record onto an [`ItemDetail`]. `requested_id` is the
/// id the record was fetched for and seeds both the output id and the
/// `#<id>` title fallback.
pub fn normalize_item_detail(raw: &Value, requested_id: &str) -> ItemDetail {
    ItemDetail {
        id: pick_text(raw, &["nftId", "id"]).unwrap_or_else(|| requested_id.to_string()),
        title: pick_text(raw, &["title", "name"])
            .unwrap_or_else(|| format!("#{requested_id}")),
        tag: pick_text(raw, TAG_KEYS),
        description: pick_text(raw, &["description", "desc"]).unwrap_or_default(),
        image: pick_url(raw, IMAGE_KEYS),
        views: to_number(pick(raw, &["views", "watchers"])).max(0.0) as u64,
        likes: to_number(pick(raw, &["likes", "favs"])).max(0.0) as u64,
        price: parse_number(pick(raw, PRICE_KEYS)),
        owner: normalize_party(raw, &OWNER_KEYS),
        creator: normalize_party(raw, &CREATOR_KEYS),
    }
}

/// Resolve a party from its container candidates, treating a bare string
/// as `{ name }`, then fall through to the flat field spellings.
fn normalize_party(raw: &Value, keys: &PartyKeys) -> Party {
    let container = pick(raw, keys.containers);
    let (nested_id, nested_name, nested_avatar) = match container {
        Some(Value::String(name)) => (None, Some(name.clone()), None),
        Some(obj) if obj.is_object() => (
            pick_text(obj, &["id", "authorId"]),
            pick_text(obj, &["name", "username"]),
            pick_url(obj, &["avatar", "image"]),
        ),
        _ => (None, None, None),
    };

    Party {
        id: nested_id.or_else(|| pick_text(raw, keys.flat_id)),
        name: nested_name
            .or_else(|| pick_text(raw, keys.flat_name))
            .unwrap_or_else(|| "—".to_string()),
        avatar: nested_avatar.or_else(|| pick_url(raw, keys.flat_avatar)),
    }
}

impl ItemDetail {
    /// Tag chip text with its `#` prefix applied exactly once.
    pub fn tag_label(&self) -> Option<String> {
        self.tag.as_ref().map(|tag| {
            if tag.starts_with('#') {
                tag.clone()
            } else {
                format!("#{tag}")
            }
        })
    }

    /// Whether the record carried any content at all.
    pub fn from_value(raw: &Value, requested_id: &str) -> Option<ItemDetail> {
        is_truthy(raw).then(|| normalize_item_detail(raw, requested_id))
    }
}
