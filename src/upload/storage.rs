//! Persistence of accepted uploads on the local filesystem.
//!
//! # Responsibilities
//! - Create the upload directory once at startup
//! - Derive the stored filename from a generated id and the original
//!   file's extension
//! - Write file contents without blocking the runtime
//!
//! # Design Decisions
//! - Stored files are never mutated or deleted by this service
//! - Extensions come from `Path::extension` on the submitted filename, so
//!   path separators in a hostile filename cannot influence the target path

use std::path::{Path, PathBuf};

/// Handle to the upload directory.
///
/// Cheap to clone; the path is resolved once at startup and constant for
/// the lifetime of the process.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Create a store rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the upload directory if it does not exist yet.
    ///
    /// Called once at startup, before the listener accepts traffic.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// The directory files are stored in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the contents of one accepted file.
    ///
    /// The stored name is `{id}{extension}`; returns the full path written.
    pub async fn save(&self, stored_name: &str, data: &[u8]) -> std::io::Result<PathBuf> {
        let path = self.dir.join(stored_name);
        tokio::fs::write(&path, data).await?;
        Ok(path)
    }
}

/// Extension of a submitted filename, including the leading dot.
///
/// Empty when the final path component has no extension ("notes" or
/// ".hidden"). Only the final component is considered, so directory
/// separators in the submitted name are ignored.
pub fn file_extension(filename: &str) -> String {
    match Path::new(filename).extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of_plain_filename() {
        assert_eq!(file_extension("report.pdf"), ".pdf");
    }

    #[test]
    fn test_extension_takes_last_dot() {
        assert_eq!(file_extension("archive.tar.gz"), ".gz");
    }

    #[test]
    fn test_no_extension_is_empty() {
        assert_eq!(file_extension("notes"), "");
    }

    #[test]
    fn test_leading_dot_only_is_not_an_extension() {
        assert_eq!(file_extension(".hidden"), "");
    }

    #[test]
    fn test_extension_ignores_directory_components() {
        assert_eq!(file_extension("evil.pdf/../../trap"), "");
    }

    #[tokio::test]
    async fn test_ensure_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::new(tmp.path().join("uploads"));

        store.ensure_dir().await.unwrap();
        store.ensure_dir().await.unwrap();
        assert!(store.dir().is_dir());
    }

    #[tokio::test]
    async fn test_save_writes_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::new(tmp.path());

        let path = store.save("abc.pdf", b"%PDF-1.4").await.unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_save_into_missing_dir_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::new(tmp.path().join("never-created"));

        assert!(store.save("abc.pdf", b"%PDF-1.4").await.is_err());
    }
}
