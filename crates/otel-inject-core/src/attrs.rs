//! Resource-attribute string merging
//!
//! `OTEL_RESOURCE_ATTRIBUTES` encodes a comma-separated list of `key=value`
//! tokens. Users may already have set it on their containers, possibly with
//! trailing separators or malformed tokens; whatever is there is kept
//! byte-for-byte and only provably absent keys are appended after it.

use std::collections::HashSet;

/// Merge candidate attributes into an existing attribute string.
///
/// Candidates are appended in the order given, skipping any whose key
/// already appears in `existing` or was appended earlier in the same call.
/// Existing content is never reordered or rewritten; an empty `existing`
/// yields exactly the joined candidate list with no leading separator.
pub fn merge(existing: &str, candidates: &[(String, String)]) -> String {
    let mut present: HashSet<&str> = existing
        .split(',')
        .filter(|token| !token.is_empty())
        .map(token_key)
        .collect();

    let mut merged = String::from(existing);
    for (key, value) in candidates {
        if !present.insert(key.as_str()) {
            continue;
        }
        if !merged.is_empty() && !merged.ends_with(',') {
            merged.push(',');
        }
        merged.push_str(key);
        merged.push('=');
        merged.push_str(value);
    }
    merged
}

/// The key part of a `key=value` token. A token without `=` counts whole,
/// so a malformed entry still blocks a same-named append.
fn token_key(token: &str) -> &str {
    token.split_once('=').map_or(token, |(key, _)| key)
}
