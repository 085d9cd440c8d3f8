//! Cooperative per-document cancellation.
//!
//! The batch runner registers each running document with a cancel token.
//! A caller (e.g. the CLI on Ctrl-C) can request cancellation; the document
//! worker checks the token between asset fetches and stops scheduling new
//! ones. Already-written asset files stay in place.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Error returned when a document run is stopped by the caller.
#[derive(Debug)]
pub struct ConvertCancelled;

impl std::fmt::Display for ConvertCancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conversion cancelled")
    }
}

impl std::error::Error for ConvertCancelled {}

/// Shared registry of document path -> cancel token.
#[derive(Default)]
pub struct ConvertControl {
    docs: RwLock<HashMap<PathBuf, Arc<AtomicBool>>>,
}

impl ConvertControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a running document; returns the token to pass into its run.
    pub fn register(&self, document: &Path) -> Arc<AtomicBool> {
        let token = Arc::new(AtomicBool::new(false));
        self.docs
            .write()
            .unwrap()
            .insert(document.to_path_buf(), Arc::clone(&token));
        token
    }

    /// Unregister a document (call when its run finishes, success or failure).
    pub fn unregister(&self, document: &Path) {
        self.docs.write().unwrap().remove(document);
    }

    /// Request cancellation of one document's run.
    pub fn request_cancel(&self, document: &Path) {
        if let Some(token) = self.docs.read().unwrap().get(document) {
            token.store(true, Ordering::Relaxed);
        }
    }

    /// Request cancellation of every registered document.
    pub fn cancel_all(&self) {
        for token in self.docs.read().unwrap().values() {
            token.store(true, Ordering::Relaxed);
        }
    }
}
