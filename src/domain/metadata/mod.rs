//! DRep/proposal metadata normalization.
//!
//! Anchored metadata is third-party JSON of wildly varying shape: sometimes
//! CIP-119 JSON-LD with `@context` and `@value` wrappers, sometimes flat
//! objects, sometimes whole documents hex-encoded inside a string field.
//! Nothing here validates — it extracts the best available display fields and
//! drops what it cannot read.

use serde_json::{Map, Value};

/// Key-priority list for a DRep's display name.
const NAME_KEYS: &[&str] = &["name", "title", "givenName"];
/// Key-priority list for a description/bio field.
const DESCRIPTION_KEYS: &[&str] = &["description", "abstract", "objectives", "bio"];
/// Key-priority list for a homepage link.
const WEBSITE_KEYS: &[&str] = &["website", "url", "homepage"];

/// JSON-LD term-remapping key. Structural, never data; skipped everywhere.
const CONTEXT_KEY: &str = "@context";

/// Recursively sanitize an untrusted metadata document.
///
/// Returns `None` unless the top level is an object. String values are probed
/// as hex-encoded UTF-8 JSON and, when the probe succeeds, replaced by the
/// sanitized parse — some publishers anchor their whole document that way.
/// Idempotent: sanitizing a sanitized tree is a no-op.
pub fn sanitize(value: &Value) -> Option<Value> {
    match value {
        Value::Object(map) => Some(sanitize_object(map)),
        _ => None,
    }
}

fn sanitize_object(map: &Map<String, Value>) -> Value {
    let mut out = Map::with_capacity(map.len());
    for (key, value) in map {
        if let Some(clean) = sanitize_value(value) {
            out.insert(key.clone(), clean);
        }
    }
    Value::Object(out)
}

fn sanitize_value(value: &Value) -> Option<Value> {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => Some(value.clone()),
        Value::String(s) => Some(match decode_hex_json(s) {
            Some(inner) => sanitize_value(&inner).unwrap_or(Value::Null),
            None => Value::String(s.clone()),
        }),
        Value::Array(items) => Some(Value::Array(
            items.iter().filter_map(sanitize_value).collect(),
        )),
        Value::Object(map) => Some(sanitize_object(map)),
    }
}

/// Try to read a string as a hex-encoded UTF-8 JSON document.
///
/// Accepts an optional `0x` / `\x` marker. Every step must succeed — even
/// length, hex charset, UTF-8, JSON parse — otherwise the string is taken
/// literally.
fn decode_hex_json(s: &str) -> Option<Value> {
    let stripped = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("\\x"))
        .unwrap_or(s);
    if stripped.is_empty() || stripped.len() % 2 != 0 {
        return None;
    }
    if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let bytes = hex::decode(stripped).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    serde_json::from_str(&text).ok()
}

/// Depth-first search for the first usable string under any of `keys`.
///
/// At each object the candidate keys are checked directly (in priority order)
/// before recursing into child values, so `{name: "A", nested: {title: "B"}}`
/// prefers `"A"` even when `keys = [title, name]` would match deeper first.
/// `@context` is never entered and never read as data.
pub fn find_first_string(value: &Value, keys: &[&str]) -> Option<String> {
    match value {
        Value::Object(map) => {
            for key in keys {
                if *key == CONTEXT_KEY {
                    continue;
                }
                if let Some(candidate) = map.get(*key) {
                    if let Some(s) = extract_string(candidate) {
                        return Some(s);
                    }
                }
            }
            for (key, child) in map {
                if key == CONTEXT_KEY {
                    continue;
                }
                if let Some(s) = find_first_string(child, keys) {
                    return Some(s);
                }
            }
            None
        }
        Value::Array(items) => items.iter().find_map(|item| find_first_string(item, keys)),
        _ => None,
    }
}

/// Unwrap the common JSON-LD value shapes down to a plain string.
///
/// Handles `"…"`, `{"@value": "…"}`, `{"value": "…"}` and the first usable
/// string inside an array.
fn extract_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => usable(s),
        Value::Object(map) => map
            .get("@value")
            .or_else(|| map.get("value"))
            .and_then(extract_string),
        Value::Array(items) => items.iter().find_map(extract_string),
        _ => None,
    }
}

fn usable(s: &str) -> Option<String> {
    if s.is_empty() || is_context_reference(s) {
        return None;
    }
    Some(s.to_string())
}

/// Detect `CIP<digits>:` context URIs leaked into value positions — a known
/// publisher defect, treated as absent rather than as data.
fn is_context_reference(s: &str) -> bool {
    let Some(rest) = s.strip_prefix("CIP") else {
        return false;
    };
    let digits: &str = rest.split(':').next().unwrap_or("");
    !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
        && rest.len() > digits.len() // the ':' must be present
}

/// Canonical display name (`name` > `title` > `givenName`).
pub fn display_name(metadata: &Value) -> Option<String> {
    find_first_string(metadata, NAME_KEYS)
}

/// Canonical description.
pub fn display_description(metadata: &Value) -> Option<String> {
    find_first_string(metadata, DESCRIPTION_KEYS)
}

/// Canonical website link.
pub fn display_website(metadata: &Value) -> Option<String> {
    find_first_string(metadata, WEBSITE_KEYS)
}

/// Whether sanitized metadata carries any of the canonical display fields.
pub fn has_profile(metadata: &Value) -> bool {
    display_name(metadata).is_some()
        || display_description(metadata).is_some()
        || display_website(metadata).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sanitize_requires_top_level_object() {
        assert!(sanitize(&json!("just a string")).is_none());
        assert!(sanitize(&json!([1, 2, 3])).is_none());
        assert!(sanitize(&json!({"a": 1})).is_some());
    }

    #[test]
    fn sanitize_unwraps_hex_encoded_json() {
        let hex_doc = hex::encode(r#"{"name":"X"}"#);
        let input = json!({ "body": hex_doc });
        let clean = sanitize(&input).unwrap();
        assert_eq!(clean, json!({ "body": { "name": "X" } }));
    }

    #[test]
    fn sanitize_unwraps_escaped_hex_marker() {
        let hex_doc = format!("\\x{}", hex::encode(r#"{"givenName":"Ada"}"#));
        let clean = sanitize(&json!({ "metadata": hex_doc })).unwrap();
        assert_eq!(clean, json!({ "metadata": { "givenName": "Ada" } }));
    }

    #[test]
    fn non_json_hex_stays_literal() {
        // Valid hex, but decodes to bytes that are not UTF-8 JSON.
        let input = json!({ "hash": "deadbeef" });
        assert_eq!(sanitize(&input).unwrap(), input);
    }

    #[test]
    fn odd_length_hex_stays_literal() {
        let input = json!({ "v": "abc" });
        assert_eq!(sanitize(&input).unwrap(), input);
    }

    #[test]
    fn sanitize_recurses_through_arrays() {
        let hex_doc = hex::encode(r#"{"k":1}"#);
        let clean = sanitize(&json!({ "refs": [hex_doc, "plain"] })).unwrap();
        assert_eq!(clean, json!({ "refs": [{ "k": 1 }, "plain"] }));
    }

    #[test]
    fn sanitize_is_idempotent() {
        let hex_doc = hex::encode(r#"{"name":"X","n":[1,"two"]}"#);
        let once = sanitize(&json!({ "body": hex_doc, "plain": true })).unwrap();
        let twice = sanitize(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn key_priority_wins_at_a_node() {
        let doc = json!({ "name": "A", "title": "B" });
        assert_eq!(
            find_first_string(&doc, &["name", "title"]),
            Some("A".to_string())
        );
        let only_title = json!({ "title": "B" });
        assert_eq!(
            find_first_string(&only_title, &["name", "title"]),
            Some("B".to_string())
        );
    }

    #[test]
    fn search_recurses_into_children() {
        let doc = json!({ "body": { "givenName": { "@value": "Carol" } } });
        assert_eq!(display_name(&doc), Some("Carol".to_string()));
    }

    #[test]
    fn value_wrappers_unwrap() {
        let doc = json!({ "name": { "value": "Wrapped" } });
        assert_eq!(display_name(&doc), Some("Wrapped".to_string()));
        let doc = json!({ "name": ["", { "@value": "InArray" }] });
        assert_eq!(display_name(&doc), Some("InArray".to_string()));
    }

    #[test]
    fn context_key_is_never_data() {
        let doc = json!({
            "@context": { "name": "CIP119:givenName" },
            "body": { "name": "Real" }
        });
        assert_eq!(display_name(&doc), Some("Real".to_string()));
    }

    #[test]
    fn cip_reference_values_are_rejected() {
        let doc = json!({ "name": "CIP119:givenName" });
        assert_eq!(display_name(&doc), None);
        // But strings that merely mention CIP are fine.
        let doc = json!({ "name": "CIP enthusiast" });
        assert_eq!(display_name(&doc), Some("CIP enthusiast".to_string()));
    }

    #[test]
    fn empty_strings_are_absent() {
        let doc = json!({ "name": "", "title": "Fallback" });
        assert_eq!(display_name(&doc), Some("Fallback".to_string()));
    }

    #[test]
    fn has_profile_checks_all_canonical_fields() {
        assert!(has_profile(&json!({ "website": "https://example.org" })));
        assert!(has_profile(&json!({ "body": { "objectives": "serve" } })));
        assert!(!has_profile(&json!({ "unrelated": 42 })));
    }
}
