//! File storage under the configured root directory.

use std::io;
use std::path::{Path, PathBuf};

/// Returns whether `name` may be used as a file name under the store root.
///
/// Rejects empty names, absolute paths, any `..` sequence and backslashes.
/// Names that fail the predicate must never reach the filesystem.
pub fn is_safe_filename(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if name.starts_with('/') {
        return false;
    }
    if name.contains("..") || name.contains('\\') {
        return false;
    }
    true
}

/// Read/write access to plain files directly under one root directory.
///
/// Cloned into each connection task; the root never changes after startup.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Reads the full contents of `name`. Callers check `is_safe_filename`
    /// before getting here.
    pub async fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        tokio::fs::read(self.resolve(name)).await
    }

    /// Returns the size of `name` without opening or reading it.
    pub async fn size(&self, name: &str) -> io::Result<u64> {
        let meta = tokio::fs::metadata(self.resolve(name)).await?;
        Ok(meta.len())
    }

    /// Creates or truncates `name` and writes `contents` to it.
    ///
    /// A failure after truncation may leave a partially written file; there
    /// is no recovery, and concurrent writers to the same name race at the
    /// filesystem with last-writer-wins.
    pub async fn write(&self, name: &str, contents: &[u8]) -> io::Result<()> {
        tokio::fs::write(self.resolve(name), contents).await
    }
}
