//! Per-asset error type.
//!
//! An asset that fails to localize never fails the whole document; the error
//! is rendered into a `DownloadOutcome::Failure` reason and the original
//! reference is left untouched in the document text.

use thiserror::Error;

/// Error from fetching and persisting a single asset (curl failure, non-200
/// status, or storage failure).
#[derive(Debug, Error)]
pub enum AssetError {
    /// Curl reported an error (timeout, DNS, connection, malformed URL, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-200 status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Disk write failed (e.g. disk full, permission denied).
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
}
