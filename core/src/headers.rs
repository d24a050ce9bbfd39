#![deny(missing_docs)]

//! # Header Directives
//!
//! Parses the `key1=value1&key2=value2` header directive accepted on the
//! command line and in `NDC_OAS_HEADERS`.

use indexmap::IndexMap;

/// Parses a header directive into an ordered map.
///
/// Everything after the first `=` belongs to the value. Absent or empty input
/// yields an empty map; a later duplicate key wins.
pub fn parse_headers(directive: Option<&str>) -> IndexMap<String, String> {
    let mut headers = IndexMap::new();
    let Some(directive) = directive.filter(|d| !d.is_empty()) else {
        return headers;
    };
    for pair in directive.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        headers.insert(key.to_string(), value.to_string());
    }
    headers
}

/// Joins repeated header arguments into a single directive.
///
/// Returns `None` when there is nothing to join.
pub fn join_header_args<S: AsRef<str>>(args: &[S]) -> Option<String> {
    let parts: Vec<&str> = args
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join("&"))
}
