//! Reference-to-URL resolution.

/// True if the reference carries an explicit HTTP(S) scheme.
pub fn is_absolute_url(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Resolves an image reference into a fetchable URL.
///
/// Absolute references pass through unchanged. A scheme-less reference is
/// joined against `prefix` (standard base+relative joining) when one is
/// configured. Resolution never fails: when there is no prefix, or the
/// prefix/reference cannot be joined, the reference is returned as-is and
/// will fail at fetch time, producing a per-asset Failure outcome.
pub fn resolve_reference(reference: &str, prefix: Option<&str>) -> String {
    if is_absolute_url(reference) {
        return reference.to_string();
    }
    let Some(prefix) = prefix else {
        return reference.to_string();
    };
    match url::Url::parse(prefix).and_then(|base| base.join(reference)) {
        Ok(joined) => joined.to_string(),
        Err(e) => {
            tracing::debug!(reference, prefix, "prefix join failed: {}", e);
            reference.to_string()
        }
    }
}
