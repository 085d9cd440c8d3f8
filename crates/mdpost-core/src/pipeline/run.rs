//! One document, end to end.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::config::MdpostConfig;
use crate::control::ConvertCancelled;
use crate::document::SourceDocument;
use crate::extract::extract_image_refs;
use crate::rewrite::{rewrite_document, AssetReport, DownloadOutcome};
use crate::url_model::{is_absolute_url, resolve_reference};

use super::assets::{localize_asset, FetchLimits};
use super::progress::{asset_percent, ProgressReporter};
use super::{ConvertRequest, ConvertSummary, Phase};

/// Converts one document into a post bundle under
/// `<outputRoot>/source/_posts/`: downloads every referenced image into the
/// per-post asset directory, rewrites the references, prepends front matter,
/// and writes `<stem>.md`.
///
/// Per-asset failures are recorded and reported, never fatal. Fatal errors
/// (directory creation, document read, final write, cancellation) abort this
/// document only.
pub async fn convert_document(
    req: &ConvertRequest,
    cfg: &MdpostConfig,
    progress: &ProgressReporter,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<ConvertSummary> {
    let mut phase = Phase::Pending;
    tracing::debug!(document = %req.document.display(), %phase, "run started");

    let doc = SourceDocument::load(&req.document)?;

    let output_root: PathBuf = match &req.output_root {
        Some(root) => root.clone(),
        None => req
            .document
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    let posts_dir = output_root.join("source").join("_posts");
    fs::create_dir_all(&posts_dir)
        .with_context(|| format!("failed to create posts directory: {}", posts_dir.display()))?;
    let asset_dir = posts_dir.join(&doc.stem);
    fs::create_dir_all(&asset_dir)
        .with_context(|| format!("failed to create asset directory: {}", asset_dir.display()))?;

    phase = Phase::ExtractingReferences;
    tracing::debug!(document = %req.document.display(), %phase, "extracting");
    let references = extract_image_refs(&doc.text);
    let total = references.len();
    progress
        .emit(format!("found {} image reference(s)", total), 0)
        .await;

    phase = Phase::DownloadingAssets;
    tracing::debug!(document = %req.document.display(), %phase, total, "downloading");
    let prefix = req.url_prefix.as_deref().or(cfg.url_prefix.as_deref());
    let mut queue: VecDeque<(String, String)> = VecDeque::with_capacity(total);
    for reference in references {
        let url = resolve_reference(&reference, prefix);
        if !is_absolute_url(&reference) && url != reference {
            progress
                .emit(format!("applied URL prefix: {} -> {}", reference, url), 0)
                .await;
        }
        queue.push_back((reference, url));
    }

    let limits = FetchLimits {
        probe_timeout: cfg.probe_timeout(),
        fetch_timeout: cfg.fetch_timeout(),
    };
    let max_fetches = cfg.max_concurrent_fetches.max(1);
    let mut join_set: JoinSet<AssetReport> = JoinSet::new();
    let mut reports: Vec<AssetReport> = Vec::with_capacity(total);
    let mut succeeded = 0usize;
    let mut cancelled = false;

    loop {
        while join_set.len() < max_fetches && !cancelled {
            if cancel
                .as_ref()
                .is_some_and(|token| token.load(Ordering::Relaxed))
            {
                cancelled = true;
                break;
            }
            let Some((reference, url)) = queue.pop_front() else {
                break;
            };
            let stem = doc.stem.clone();
            let dir = asset_dir.clone();
            join_set.spawn_blocking(move || localize_asset(reference, url, &stem, &dir, limits));
        }

        if join_set.is_empty() {
            break;
        }
        let Some(res) = join_set.join_next().await else {
            break;
        };
        let report = res.map_err(|e| anyhow::anyhow!("asset task join: {}", e))?;
        match &report.outcome {
            DownloadOutcome::Success { relative_path } => {
                succeeded += 1;
                progress
                    .emit(
                        format!("downloaded {}", relative_path),
                        asset_percent(succeeded, total),
                    )
                    .await;
            }
            DownloadOutcome::Failure { reason } => {
                progress
                    .emit(
                        format!("download failed: {} for {}", reason, report.reference),
                        0,
                    )
                    .await;
            }
        }
        reports.push(report);
    }

    if cancelled {
        progress
            .emit(format!("cancelled: {}", doc.stem), 0)
            .await;
        tracing::info!(document = %req.document.display(), "run cancelled");
        return Err(anyhow::Error::new(ConvertCancelled));
    }

    let failed_assets = reports.iter().filter(|r| r.is_failure()).count();
    if failed_assets > 0 {
        progress
            .emit(
                format!(
                    "{} image(s) failed to download; original references kept",
                    failed_assets
                ),
                0,
            )
            .await;
    }

    phase = Phase::Rewriting;
    tracing::debug!(document = %req.document.display(), %phase, "rewriting");
    let body = rewrite_document(&doc.text, &reports);
    let mut front_matter = req.front_matter.clone();
    if front_matter.title.is_empty() {
        front_matter.title = doc.stem.clone();
    }
    let final_text = front_matter.prepend_to(&body);

    phase = Phase::WritingOutput;
    tracing::debug!(document = %req.document.display(), %phase, "writing");
    let output_path = posts_dir.join(format!("{}.md", doc.stem));
    fs::write(&output_path, final_text)
        .with_context(|| format!("failed to write output: {}", output_path.display()))?;

    phase = Phase::Completed;
    tracing::debug!(document = %req.document.display(), %phase, failed_assets, "run finished");
    progress
        .emit(
            format!(
                "completed {}: {} asset(s), {} failed",
                doc.stem, total, failed_assets
            ),
            100,
        )
        .await;

    Ok(ConvertSummary {
        document: req.document.clone(),
        output_path,
        asset_dir,
        total_assets: total,
        failed_assets,
    })
}
