//! Run multiple documents as independent concurrent workers.
//!
//! Keeps up to `max_concurrent` documents running at once; when one
//! finishes, the next queued document starts until the queue is empty.
//! Documents share no mutable state and write to disjoint asset
//! directories, so there is no cross-document locking.

use anyhow::Result;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::config::MdpostConfig;
use crate::control::ConvertControl;

use super::progress::ProgressReporter;
use super::{ConvertRequest, ConvertSummary};

/// Terminal outcome of one document in a batch.
#[derive(Debug)]
pub struct DocumentOutcome {
    pub document: PathBuf,
    pub result: Result<ConvertSummary>,
}

impl DocumentOutcome {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Converts `requests` with up to `max_concurrent` documents in flight.
/// One document failing never stops the others; every document gets an
/// outcome. When `control` is `Some`, each running document is registered
/// for cooperative cancellation.
pub async fn convert_batch(
    requests: Vec<ConvertRequest>,
    cfg: &MdpostConfig,
    progress: ProgressReporter,
    max_concurrent: usize,
    control: Option<Arc<ConvertControl>>,
) -> Vec<DocumentOutcome> {
    let max_concurrent = max_concurrent.max(1);
    let mut queue: VecDeque<ConvertRequest> = requests.into();
    let mut outcomes = Vec::with_capacity(queue.len());
    let mut join_set: JoinSet<DocumentOutcome> = JoinSet::new();

    loop {
        while join_set.len() < max_concurrent {
            let Some(req) = queue.pop_front() else {
                break;
            };
            let cfg = cfg.clone();
            let progress = progress.clone();
            let control = control.clone();
            join_set.spawn(async move {
                let token = control.as_ref().map(|c| c.register(&req.document));
                let result = super::convert_document(&req, &cfg, &progress, token).await;
                if let Some(c) = &control {
                    c.unregister(&req.document);
                }
                if let Err(e) = &result {
                    progress
                        .emit(format!("failed {}: {:#}", req.document.display(), e), 0)
                        .await;
                }
                DocumentOutcome {
                    document: req.document,
                    result,
                }
            });
        }

        if join_set.is_empty() {
            break;
        }
        let Some(res) = join_set.join_next().await else {
            break;
        };
        match res {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => tracing::error!("document task join: {}", e),
        }
    }

    outcomes
}
