//! Pipeline orchestration: per-document conversion and batch runs.
//!
//! One document is one independent worker. Within a worker, asset fetches
//! run on a bounded pool; per-asset failures are recorded, never fatal. Only
//! output-directory creation, document read, and the final write can fail a
//! run, and each failure is confined to its own document.

mod assets;
mod batch;
mod progress;
mod run;

pub use batch::{convert_batch, DocumentOutcome};
pub use progress::{asset_percent, ProgressEvent, ProgressReporter, ProgressSender};
pub use run::convert_document;

use crate::front_matter::FrontMatter;
use std::path::PathBuf;

/// Everything the external caller supplies for one document.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Path of the Markdown document to convert.
    pub document: PathBuf,
    /// Metadata for the front-matter block. An empty title falls back to
    /// the document's filename stem.
    pub front_matter: FrontMatter,
    /// Blog root; defaults to the document's parent directory.
    pub output_root: Option<PathBuf>,
    /// Prefix for resolving scheme-less image references.
    pub url_prefix: Option<String>,
}

/// Terminal result of a successful run. A run with failed assets is still
/// a success; the count is surfaced here and in the final progress event.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub document: PathBuf,
    pub output_path: PathBuf,
    pub asset_dir: PathBuf,
    pub total_assets: usize,
    pub failed_assets: usize,
}

/// Phases of one document run, in order. Logged on each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pending,
    ExtractingReferences,
    DownloadingAssets,
    Rewriting,
    WritingOutput,
    Completed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Pending => "pending",
            Phase::ExtractingReferences => "extracting-references",
            Phase::DownloadingAssets => "downloading-assets",
            Phase::Rewriting => "rewriting",
            Phase::WritingOutput => "writing-output",
            Phase::Completed => "completed",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
