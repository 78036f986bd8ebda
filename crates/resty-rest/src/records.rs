//! Record extraction: query-endpoint detection and the record-key heuristic.
//!
//! Query endpoints always keep their records under `records`. For any other
//! GET endpoint the payload shape is not knowable up front, so the key is
//! guessed: the endpoint's last path segment when the response has a key of
//! that exact name, otherwise whichever key the backend serialized first.
//! The fallback is deliberately loose: when a response has several
//! plausible array keys and none matches the segment, the pick depends on
//! the backend's serialization order. Callers that need determinism should
//! arrange for the segment match to hit.

use serde_json::{Map, Value};

/// Key used for query results and as the conceptual default elsewhere.
pub const RECORDS_KEY: &str = "records";

/// True when the endpoint path is query-flavored (`/query`, `/queryAll`,
/// `/tooling/query`, ...). Matches `query` as a case-insensitive substring
/// of the whole path.
pub fn is_query_endpoint(endpoint: &str) -> bool {
    endpoint.to_ascii_lowercase().contains("query")
}

/// First key of an object in insertion order.
///
/// serde_json is built with `preserve_order`, so map iteration follows the
/// order keys appeared in the response document. That makes the fallback
/// deterministic for a given response body.
pub fn first_key(object: &Map<String, Value>) -> Option<&str> {
    object.keys().next().map(String::as_str)
}

/// Determine the key under which a non-query response holds its records.
pub fn record_key(endpoint: &str, page: &Value) -> String {
    let segment = last_segment(endpoint);
    match page.as_object() {
        Some(object) if object.contains_key(segment) => segment.to_string(),
        Some(object) => first_key(object).unwrap_or(RECORDS_KEY).to_string(),
        None => RECORDS_KEY.to_string(),
    }
}

/// Extract the record array for a page, or an empty batch when the key is
/// absent or not an array.
pub fn extract_records<'a>(page: &'a Value, key: &str) -> &'a [Value] {
    page.get(key).and_then(Value::as_array).map_or(&[], Vec::as_slice)
}

fn last_segment(endpoint: &str) -> &str {
    endpoint.rsplit('/').next().unwrap_or(endpoint)
}
