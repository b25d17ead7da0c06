//! Field-wise merge used when a detail view refreshes an entity it was
//! seeded with.

use serde_json::Value;

use crate::value::is_truthy;

/// Merge a freshly fetched record over a previously held one.
///
/// Union of keys; a fresh truthy value overwrites, a fresh falsy or
/// missing value leaves the held field untouched. This lets a partial,
/// locally-available record render immediately while richer data fills in
/// without losing fields the refresh didn't carry.
pub fn merge_records(held: &Value, fresh: &Value) -> Value {
    match (held.as_object(), fresh.as_object()) {
        (Some(held_map), Some(fresh_map)) => {
            let mut merged = held_map.clone();
            for (key, value) in fresh_map {
                if is_truthy(value) {
                    merged.insert(key.clone(), value.clone());
                }
            }
            Value::Object(merged)
        }
        (None, Some(_)) => fresh.clone(),
        (Some(_), None) => held.clone(),
        (None, None) => {
            if is_truthy(fresh) {
                fresh.clone()
            } else {
                held.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fresh_truthy_wins_fresh_falsy_keeps_held() {
        let held = json!({ "name": "X", "wallet": "" });
        let fresh = json!({ "name": "", "wallet": "0xabc" });
        assert_eq!(
            merge_records(&held, &fresh),
            json!({ "name": "X", "wallet": "0xabc" })
        );
    }

    #[test]
    fn keys_missing_from_fresh_survive() {
        let held = json!({ "followers": 12, "name": "X" });
        let fresh = json!({ "name": "Y" });
        assert_eq!(
            merge_records(&held, &fresh),
            json!({ "followers": 12, "name": "Y" })
        );
    }

    #[test]
    fn fresh_zero_does_not_clobber() {
        let held = json!({ "followers": 12 });
        let fresh = json!({ "followers": 0 });
        assert_eq!(merge_records(&held, &fresh), json!({ "followers": 12 }));
    }

    #[test]
    fn non_object_sides_prefer_fresh() {
        let held = json!(null);
        let fresh = json!({ "name": "X" });
        assert_eq!(merge_records(&held, &fresh), fresh);

        let held = json!({ "name": "X" });
        assert_eq!(merge_records(&held, &json!(null)), held);
    }
}
