//! Document rewriting: replace localized references, keep failed ones.

/// Outcome of localizing one asset.
#[derive(Debug, Clone)]
pub enum DownloadOutcome {
    /// Asset saved; `relative_path` is `<stem>/<filename>`.
    Success { relative_path: String },
    /// Asset failed; the original reference stays in the document.
    Failure { reason: String },
}

/// One extracted reference paired with its outcome.
#[derive(Debug, Clone)]
pub struct AssetReport {
    pub reference: String,
    pub outcome: DownloadOutcome,
}

impl AssetReport {
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, DownloadOutcome::Failure { .. })
    }
}

/// Applies all successful outcomes to the document text.
///
/// Each replacement is a global literal substring replace keyed by the
/// original reference value; if the reference string recurs outside image
/// syntax it is replaced there too. Failed references are left byte-for-byte
/// unchanged. This non-anchored semantics is a compatibility contract.
pub fn rewrite_document(text: &str, reports: &[AssetReport]) -> String {
    let mut out = text.to_string();
    for report in reports {
        if let DownloadOutcome::Success { relative_path } = &report.outcome {
            out = out.replace(&report.reference, relative_path);
        }
    }
    out
}
