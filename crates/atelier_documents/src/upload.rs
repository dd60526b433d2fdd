//! Transient storage for uploaded documents.

use atelier_core::extension_of;
use atelier_error::{DocumentError, DocumentErrorKind};
use derive_getters::Getters;
use std::path::{Path, PathBuf};
use tempfile::TempPath;
use tracing::{debug, instrument};

/// An uploaded file waiting for extraction.
///
/// Consumed by [`crate::extract_text`], which removes the file. The file is
/// also removed when the document is dropped unconsumed, e.g. when a request
/// is abandoned mid-extraction.
#[derive(Debug, Getters)]
pub struct UploadedDocument {
    /// The file on disk, deleted on drop
    #[getter(skip)]
    file: TempPath,
    /// File name the client sent
    original_name: String,
    /// Lowercased extension of the original name, with its dot
    extension: String,
}

impl UploadedDocument {
    fn new(file: TempPath, original_name: impl Into<String>) -> Self {
        let original_name = original_name.into();
        Self {
            file,
            extension: extension_of(&original_name),
            original_name,
        }
    }

    /// Where the upload was written.
    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Take the removal guard, leaving the caller responsible for the file.
    pub(crate) fn into_temp_path(self) -> TempPath {
        self.file
    }
}

/// Directory uploads are written to under random names.
#[derive(Debug, Clone)]
pub struct UploadArea {
    dir: PathBuf,
}

impl UploadArea {
    /// Creates an upload area rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The upload directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), DocumentError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| io_error(&self.dir, e))
    }

    /// Write an uploaded file under a fresh random name.
    ///
    /// A failed write leaves nothing behind.
    #[instrument(skip(self, bytes), fields(bytes = bytes.len()))]
    pub async fn save(
        &self,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<UploadedDocument, DocumentError> {
        let file = tempfile::Builder::new()
            .prefix("upload_")
            .tempfile_in(&self.dir)
            .map_err(|e| io_error(&self.dir, e))?
            .into_temp_path();
        tokio::fs::write(&file, bytes)
            .await
            .map_err(|e| io_error(&file, e))?;
        debug!(path = %file.display(), "Stored upload");
        Ok(UploadedDocument::new(file, original_name))
    }
}

#[track_caller]
pub(crate) fn io_error(path: &Path, e: std::io::Error) -> DocumentError {
    DocumentError::new(DocumentErrorKind::Io(format!("{}: {}", path.display(), e)))
}
