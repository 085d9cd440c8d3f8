//! Localization of a single asset: filename derivation, extension
//! inference, unique-path reservation, streamed fetch.

use std::path::Path;
use std::time::Duration;

use crate::downloader::fetch_asset;
use crate::error::AssetError;
use crate::probe::infer_extension;
use crate::rewrite::{AssetReport, DownloadOutcome};
use crate::storage::reserve_unique;
use crate::url_model::derive_filename;

/// Per-call network timeouts, taken from the config.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FetchLimits {
    pub probe_timeout: Duration,
    pub fetch_timeout: Duration,
}

/// Downloads one resolved asset into `asset_dir`. Blocking (curl); run under
/// `spawn_blocking`. Never returns an error: every failure is folded into a
/// `Failure` outcome so sibling assets are unaffected.
pub(crate) fn localize_asset(
    reference: String,
    url: String,
    stem: &str,
    asset_dir: &Path,
    limits: FetchLimits,
) -> AssetReport {
    let mut filename = derive_filename(&url);
    if Path::new(&filename).extension().is_none() {
        let ext = infer_extension(&url, limits.probe_timeout);
        filename = format!("{filename}.{ext}");
    }

    let writer = match reserve_unique(asset_dir, &filename) {
        Ok(w) => w,
        Err(e) => {
            return AssetReport {
                reference,
                outcome: DownloadOutcome::Failure {
                    reason: AssetError::Storage(e).to_string(),
                },
            }
        }
    };

    match fetch_asset(&url, &writer, limits.fetch_timeout) {
        Ok(bytes) => {
            let relative_path = format!("{}/{}", stem, writer.file_name());
            tracing::debug!(url = %url, bytes, path = %relative_path, "asset saved");
            AssetReport {
                reference,
                outcome: DownloadOutcome::Success { relative_path },
            }
        }
        Err(e) => {
            writer.discard();
            AssetReport {
                reference,
                outcome: DownloadOutcome::Failure {
                    reason: e.to_string(),
                },
            }
        }
    }
}
