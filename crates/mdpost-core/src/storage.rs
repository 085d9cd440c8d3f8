//! Asset file storage: exclusive-create writer and unique-path reservation.
//!
//! A saved asset gets a fresh path inside the post's asset directory.
//! Reservation uses exclusive creation (`create_new`) so concurrent fetches
//! within one document cannot race to the same "next available" suffix.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(unix)]
use std::os::unix::fs::FileExt;

/// Writer for one asset file. Safe to clone and use from multiple tasks;
/// each `write_at` is independent (pwrite-style).
#[derive(Clone)]
pub struct AssetWriter {
    file: Arc<File>,
    path: PathBuf,
}

impl AssetWriter {
    /// Create the file exclusively; fails with `AlreadyExists` if the path
    /// is taken. This is the collision resolver's atomicity guarantee.
    fn create_new(path: &Path) -> io::Result<Self> {
        let file = File::options().write(true).create_new(true).open(path)?;
        Ok(Self {
            file: Arc::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Write `data` at `offset` without moving a shared cursor.
    #[cfg(unix)]
    pub fn write_at(&self, offset: u64, data: &[u8]) -> io::Result<()> {
        self.file.write_all_at(data, offset)
    }

    /// Fallback for non-Unix: seek + write on a cloned handle.
    #[cfg(not(unix))]
    pub fn write_at(&self, offset: u64, data: &[u8]) -> io::Result<()> {
        use std::io::{Seek, SeekFrom, Write};
        let mut f = self.file.try_clone()?;
        f.seek(SeekFrom::Start(offset))?;
        f.write_all(data)
    }

    /// Sync file data to disk after a completed download.
    pub fn sync(&self) -> io::Result<()> {
        self.file.sync_all()
    }

    /// Final on-disk path of the asset.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The reserved filename (final path component).
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Remove the reserved file after a failed download so a dead
    /// placeholder does not shadow a later retry of the same filename.
    pub fn discard(self) {
        drop(self.file);
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), "could not remove partial asset: {}", e);
        }
    }
}

/// Reserves a unique path for `filename` inside `dir` and returns a writer
/// holding it. If `dir/filename` is taken, tries `name_1.ext`, `name_2.ext`,
/// ... until creation succeeds.
pub fn reserve_unique(dir: &Path, filename: &str) -> io::Result<AssetWriter> {
    let mut counter = 0u32;
    loop {
        let candidate = if counter == 0 {
            filename.to_string()
        } else {
            suffixed(filename, counter)
        };
        match AssetWriter::create_new(&dir.join(&candidate)) {
            Ok(writer) => return Ok(writer),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => counter += 1,
            Err(e) => return Err(e),
        }
    }
}

/// `a.png` + 2 → `a_2.png`; `noext` + 1 → `noext_1`.
fn suffixed(filename: &str, counter: u32) -> String {
    let p = Path::new(filename);
    let stem = p
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());
    match p.extension() {
        Some(ext) => format!("{}_{}.{}", stem, counter, ext.to_string_lossy()),
        None => format!("{}_{}", stem, counter),
    }
}
