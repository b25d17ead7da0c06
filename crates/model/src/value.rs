//! Value-level helpers for defensive payload handling.
//!
//! The marketplace API enforces no schema: the same field arrives under a
//! handful of spellings and as whatever JSON type the server felt like
//! returning that day. These helpers implement the ordered-candidate lookup
//! and the tolerant coercions every normalizer is built on.

use serde_json::Value;

/// Truthiness in the sense the upstream API is consumed with: `null`,
/// `false`, `0` and `""` are falsy, everything else (including empty arrays
/// and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Look a key up in `raw`, descending one object level per `.` segment
/// (`"author.id"`). No truthiness filter.
pub fn lookup<'a>(raw: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(raw, |value, segment| value.get(segment))
}

/// First present-and-truthy value among the candidate keys, in order.
/// Candidate order encodes real-world API drift and must not be reshuffled.
pub fn pick<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| lookup(raw, key).filter(|v| is_truthy(v)))
}

/// Scalar rendered as display text. Objects, arrays and booleans are not
/// meaningful as titles or ids and resolve to `None` so the caller falls
/// through to its default.
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Convenience for `pick` + [`text`].
pub fn pick_text(raw: &Value, keys: &[&str]) -> Option<String> {
    pick(raw, keys).and_then(text)
}

/// Tolerant numeric coercion used for sorting and display counts.
///
/// Numbers pass through as-is. Strings are stripped of every character that
/// is not a digit or a decimal point (`"1,234 ETH"` -> `1234`) and parsed.
/// Anything absent, falsy or non-finite coerces to `0`.
pub fn to_number(value: Option<&Value>) -> f64 {
    let Some(value) = value else { return 0.0 };
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).unwrap_or(0.0),
        _ if !is_truthy(value) => 0.0,
        Value::String(s) => parse_cleaned(s).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Numeric parse that keeps "no value" distinct from zero: `None` when the
/// field is absent, falsy or unparseable, `Some` otherwise.
pub fn parse_number(value: Option<&Value>) -> Option<f64> {
    let value = value.filter(|v| is_truthy(v))?;
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => parse_cleaned(s),
        _ => None,
    }
}

fn parse_cleaned(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Absolute-URL guard for image fields: a string starting with `http://`
/// or `https://` passes, anything else (non-string, relative path, null)
/// resolves to `None` so the caller substitutes its fallback asset.
pub fn fix_url(value: &Value) -> Option<String> {
    let s = value.as_str()?;
    if s.starts_with("http://") || s.starts_with("https://") {
        Some(s.to_string())
    } else {
        None
    }
}

/// First candidate that survives [`fix_url`]. Unlike [`pick`] this does not
/// stop at the first truthy value: a present-but-invalid URL falls through
/// to the next candidate.
pub fn pick_url(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| lookup(raw, key))
        .find_map(fix_url)
}

/// Normalize the API's heterogeneous end-time encodings to epoch
/// milliseconds. Numbers below `1e12` are taken as seconds and scaled up;
/// larger numbers are already milliseconds. Strings are parsed as dates.
/// Anything unparseable is `None`, which disables the countdown.
pub fn to_millis(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            let f = n.as_f64().filter(|f| f.is_finite())?;
            if f < 1e12 {
                Some((f * 1000.0) as i64)
            } else {
                Some(f as i64)
            }
        }
        Value::String(s) => parse_date_millis(s),
        _ => None,
    }
}

fn parse_date_millis(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc().timestamp_millis());
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_follows_upstream_semantics() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0x1")));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn pick_takes_first_truthy_candidate() {
        let raw = json!({ "a": null, "b": "", "c": "value", "d": "later" });
        assert_eq!(pick(&raw, &["a", "b", "c", "d"]), Some(&json!("value")));
        assert_eq!(pick(&raw, &["a", "b"]), None);
        assert_eq!(pick(&raw, &["missing"]), None);
    }

    #[test]
    fn pick_descends_dotted_keys() {
        let raw = json!({ "author": { "id": 7 } });
        assert_eq!(pick(&raw, &["authorId", "author.id"]), Some(&json!(7)));
    }

    #[test]
    fn to_number_strips_decorations() {
        assert_eq!(to_number(Some(&json!("1,234 ETH"))), 1234.0);
        assert_eq!(to_number(Some(&json!("2.5 ETH"))), 2.5);
        assert_eq!(to_number(Some(&json!(5))), 5.0);
        assert_eq!(to_number(None), 0.0);
        assert_eq!(to_number(Some(&json!(null))), 0.0);
        assert_eq!(to_number(Some(&json!("garbage"))), 0.0);
        assert_eq!(to_number(Some(&json!({"nested": true}))), 0.0);
    }

    #[test]
    fn parse_number_keeps_absence_distinct_from_zero() {
        assert_eq!(parse_number(Some(&json!("3.14"))), Some(3.14));
        assert_eq!(parse_number(Some(&json!(2))), Some(2.0));
        assert_eq!(parse_number(Some(&json!("n/a"))), None);
        assert_eq!(parse_number(Some(&json!(null))), None);
        assert_eq!(parse_number(None), None);
    }

    #[test]
    fn fix_url_rejects_everything_but_absolute_http() {
        assert_eq!(
            fix_url(&json!("https://cdn.example/nft.png")),
            Some("https://cdn.example/nft.png".to_string())
        );
        assert_eq!(
            fix_url(&json!("http://cdn.example/nft.png")),
            Some("http://cdn.example/nft.png".to_string())
        );
        assert_eq!(fix_url(&json!("/images/nft.png")), None);
        assert_eq!(fix_url(&json!("ftp://cdn.example/nft.png")), None);
        assert_eq!(fix_url(&json!(42)), None);
        assert_eq!(fix_url(&json!(null)), None);
    }

    #[test]
    fn pick_url_falls_through_invalid_candidates() {
        let raw = json!({ "nftImage": "relative/path.png", "image": "https://cdn.example/ok.png" });
        assert_eq!(
            pick_url(&raw, &["nftImage", "image"]),
            Some("https://cdn.example/ok.png".to_string())
        );
    }

    #[test]
    fn to_millis_scales_seconds_and_parses_dates() {
        assert_eq!(to_millis(&json!(1_700_000_000)), Some(1_700_000_000_000));
        assert_eq!(to_millis(&json!(1_700_000_000_000i64)), Some(1_700_000_000_000));
        assert_eq!(
            to_millis(&json!("1970-01-01T00:00:01Z")),
            Some(1000)
        );
        assert_eq!(to_millis(&json!("not a date")), None);
        assert_eq!(to_millis(&json!(true)), None);
    }
}
