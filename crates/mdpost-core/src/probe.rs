//! HEAD probe for extension inference.
//!
//! When a derived filename has no extension, a header-only request against
//! the resolved URL decides one from the declared `Content-Type`. This is a
//! best-effort heuristic: on timeout, transport error, or an unrecognized
//! subtype the result is `png`, so the pipeline never blocks on a probe.

use std::str;
use std::time::Duration;

/// Fallback extension when the probe fails or the subtype is unrecognized.
const DEFAULT_EXTENSION: &str = "png";

/// Image subtypes whose name doubles as the file extension.
const KNOWN_SUBTYPES: &[&str] = &["jpeg", "png", "gif", "webp"];

/// Probes `url` with a HEAD request (following redirects) and returns the
/// extension to use, without the leading dot. Never fails; every error path
/// degrades to `png`. Runs in the current thread; call from `spawn_blocking`
/// when used from async code.
pub fn infer_extension(url: &str, timeout: Duration) -> String {
    match probe_content_type(url, timeout) {
        Ok(lines) => extension_from_headers(&lines),
        Err(e) => {
            tracing::debug!(url, "extension probe failed: {}", e);
            DEFAULT_EXTENSION.to_string()
        }
    }
}

/// Performs the HEAD request and collects raw response header lines.
fn probe_content_type(url: &str, timeout: Duration) -> Result<Vec<String>, curl::Error> {
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(true)?;
    easy.connect_timeout(timeout)?;
    easy.timeout(timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.perform()?;
    }

    Ok(headers)
}

/// Picks the extension from collected header lines: the subtype of the last
/// `Content-Type` header (redirect chains repeat headers), if recognized.
pub(crate) fn extension_from_headers(lines: &[String]) -> String {
    let mut subtype: Option<String> = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                // "image/jpeg; charset=binary" -> "jpeg"
                let sub = value
                    .rsplit('/')
                    .next()
                    .unwrap_or("")
                    .split(';')
                    .next()
                    .unwrap_or("")
                    .trim()
                    .to_ascii_lowercase();
                subtype = Some(sub);
            }
        }
    }
    match subtype {
        Some(s) if KNOWN_SUBTYPES.contains(&s.as_str()) => s,
        _ => DEFAULT_EXTENSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn recognized_subtypes() {
        assert_eq!(
            extension_from_headers(&lines(&["Content-Type: image/jpeg"])),
            "jpeg"
        );
        assert_eq!(
            extension_from_headers(&lines(&["content-type: image/webp"])),
            "webp"
        );
        assert_eq!(
            extension_from_headers(&lines(&["Content-Type: image/gif; charset=binary"])),
            "gif"
        );
    }

    #[test]
    fn unrecognized_subtype_defaults_to_png() {
        assert_eq!(
            extension_from_headers(&lines(&["Content-Type: image/svg+xml"])),
            "png"
        );
        assert_eq!(
            extension_from_headers(&lines(&["Content-Type: text/html"])),
            "png"
        );
    }

    #[test]
    fn missing_header_defaults_to_png() {
        assert_eq!(extension_from_headers(&lines(&["HTTP/1.1 200 OK"])), "png");
        assert_eq!(extension_from_headers(&[]), "png");
    }

    #[test]
    fn last_content_type_wins_across_redirects() {
        let l = lines(&[
            "HTTP/1.1 302 Found",
            "Content-Type: text/html",
            "HTTP/1.1 200 OK",
            "Content-Type: image/gif",
        ]);
        assert_eq!(extension_from_headers(&l), "gif");
    }

    #[test]
    fn probe_against_unreachable_host_defaults_to_png() {
        // Reserved TEST-NET address; connect fails fast within the timeout.
        let ext = infer_extension("http://192.0.2.1/x", Duration::from_millis(300));
        assert_eq!(ext, "png");
    }
}
