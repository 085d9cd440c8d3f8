//! Source document loading.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Immutable input to one pipeline run: the document path, its raw text, and
/// the filename stem that names both the asset directory and the output file.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub stem: String,
    pub text: String,
}

impl SourceDocument {
    /// Read the document from disk. Fails if the file is unreadable or has no
    /// usable filename stem.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read document: {}", path.display()))?;
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .with_context(|| format!("document has no filename stem: {}", path.display()))?
            .to_string();
        Ok(Self {
            path: path.to_path_buf(),
            stem,
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reads_text_and_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my-post.md");
        fs::write(&path, "# hello\n").unwrap();
        let doc = SourceDocument::load(&path).unwrap();
        assert_eq!(doc.stem, "my-post");
        assert_eq!(doc.text, "# hello\n");
        assert_eq!(doc.path, path);
    }

    #[test]
    fn load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SourceDocument::load(&dir.path().join("nope.md")).unwrap_err();
        assert!(err.to_string().contains("failed to read document"));
    }
}
