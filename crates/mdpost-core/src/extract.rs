//! Image reference extraction from Markdown text.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Matches `![alt](target)`; only the target capture is used.
fn image_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"!\[.*?\]\((.*?)\)").expect("image pattern"))
}

/// Extracts the distinct image targets of a document in first-seen order.
///
/// Duplicate occurrences of an identical reference collapse to one entry
/// (one download job); the downstream rewrite is a global replace keyed by
/// the reference value, so order carries no meaning beyond determinism.
/// Empty targets (`![x]()`) are skipped.
pub fn extract_image_refs(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut refs = Vec::new();
    for cap in image_pattern().captures_iter(text) {
        let target = &cap[1];
        if target.is_empty() {
            continue;
        }
        if seen.insert(target.to_string()) {
            refs.push(target.to_string());
        }
    }
    refs
}
