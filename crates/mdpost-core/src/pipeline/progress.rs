//! Progress reporting for document conversion.
//!
//! The pipeline emits free-text events with a percentage derived from
//! completed-over-total asset count. Consumers (the CLI, tests) receive them
//! over a tokio mpsc channel; a reporter without a sender is a no-op.

/// One progress event: a human-readable message and a percent in 0..=100.
#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub message: String,
    pub percent: u8,
}

pub type ProgressSender = tokio::sync::mpsc::Sender<ProgressEvent>;

/// Cheap handle the pipeline threads through every stage.
#[derive(Clone, Default)]
pub struct ProgressReporter {
    tx: Option<ProgressSender>,
}

impl ProgressReporter {
    pub fn new(tx: Option<ProgressSender>) -> Self {
        Self { tx }
    }

    /// Send an event; a closed or absent channel drops it silently.
    pub async fn emit(&self, message: impl Into<String>, percent: u8) {
        if let Some(tx) = &self.tx {
            let _ = tx
                .send(ProgressEvent {
                    message: message.into(),
                    percent: percent.min(100),
                })
                .await;
        }
    }
}

/// Percent of completed assets over the total, clamped to 0..=100.
/// A document with no assets is complete by definition.
pub fn asset_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((completed * 100 / total).min(100)) as u8
}
