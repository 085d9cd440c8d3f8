//! `mdpost convert` – run the pipeline over one or more documents.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use mdpost_core::config::MdpostConfig;
use mdpost_core::control::ConvertControl;
use mdpost_core::front_matter::FrontMatter;
use mdpost_core::pipeline::{convert_batch, ConvertRequest, ProgressEvent, ProgressReporter};
use std::path::PathBuf;
use std::sync::Arc;

pub async fn run_convert(
    cfg: &MdpostConfig,
    files: Vec<PathBuf>,
    title: Option<String>,
    date: Option<String>,
    categories: Vec<String>,
    tags: Vec<String>,
    output_root: Option<PathBuf>,
    url_prefix: Option<String>,
    jobs: usize,
) -> Result<()> {
    let date = match date {
        Some(d) => {
            NaiveDate::parse_from_str(&d, "%Y-%m-%d")
                .with_context(|| format!("invalid date (expected YYYY-MM-DD): {d}"))?;
            d
        }
        None => chrono::Local::now().format("%Y-%m-%d").to_string(),
    };
    let output_root = output_root.or_else(|| cfg.output_root.clone());

    let requests: Vec<ConvertRequest> = files
        .iter()
        .map(|file| ConvertRequest {
            document: file.clone(),
            front_matter: FrontMatter {
                // Empty title falls back to the document stem per file.
                title: title.clone().unwrap_or_default(),
                date: date.clone(),
                categories: categories.clone(),
                tags: tags.clone(),
            },
            output_root: output_root.clone(),
            url_prefix: url_prefix.clone(),
        })
        .collect();

    let (progress_tx, mut progress_rx) = tokio::sync::mpsc::channel::<ProgressEvent>(64);
    let printer = tokio::spawn(async move {
        while let Some(event) = progress_rx.recv().await {
            println!("[{:>3}%] {}", event.percent, event.message);
        }
    });

    let control = Arc::new(ConvertControl::new());
    {
        let control = Arc::clone(&control);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("\ninterrupted: cancelling running documents");
                control.cancel_all();
            }
        });
    }

    let total = requests.len();
    let outcomes = convert_batch(
        requests,
        cfg,
        ProgressReporter::new(Some(progress_tx)),
        jobs,
        Some(control),
    )
    .await;
    // All reporter clones are gone once the batch returns; the printer
    // drains the channel and exits.
    let _ = printer.await;

    let mut failed = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(summary) => println!(
                "wrote {} ({} asset(s), {} failed)",
                summary.output_path.display(),
                summary.total_assets,
                summary.failed_assets
            ),
            Err(e) => {
                failed += 1;
                eprintln!("failed {}: {:#}", outcome.document.display(), e);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} document(s) failed", failed, total);
    }
    Ok(())
}
