//! URL modeling: reference resolution and local filename derivation.
//!
//! Turns a raw image reference into an absolute fetch URL and derives a
//! filesystem-safe base filename from the URL path, independent of query
//! strings and percent-encoding.

mod path;
mod resolve;
mod sanitize;

pub use path::filename_from_url_path;
pub use resolve::{is_absolute_url, resolve_reference};
pub use sanitize::sanitize_filename;

/// Stem used when the URL path yields no usable filename (e.g. `https://x.com/`).
/// The extension inferrer appends the extension afterwards.
const DEFAULT_STEM: &str = "image";

/// Derives a sanitized base filename for saving an asset fetched from `url`.
///
/// Takes the last path segment (the URL query never participates),
/// percent-decodes it, then replaces every character in
/// `\ / * ? : " < > |` with `_`. A decoded segment that smuggles in a path
/// separator or query marker is therefore neutralized rather than split.
///
/// # Examples
///
/// - `https://x.com/a%20b.PNG?x=1` → `a b.PNG`
/// - `https://x.com/a%2Fb*c%3F.jpg` → `a_b_c_.jpg`
pub fn derive_filename(url: &str) -> String {
    let segment = match filename_from_url_path(url) {
        Some(s) => s,
        None => return DEFAULT_STEM.to_string(),
    };
    let decoded = urlencoding::decode(&segment)
        .map(|s| s.into_owned())
        .unwrap_or(segment);
    let sanitized = sanitize_filename(&decoded);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_STEM.to_string()
    } else {
        sanitized
    }
}
