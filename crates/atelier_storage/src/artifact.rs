//! Decoding and persisting base64 media returned by the model runtime.

use atelier_core::MediaKind;
use atelier_error::{StorageError, StorageErrorKind};
use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use derive_getters::Getters;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info, instrument, warn};

/// Standard alphabet, padding optional.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a base64 payload, ignoring embedded ASCII whitespace.
///
/// # Examples
///
/// ```
/// use atelier_storage::decode_base64;
///
/// assert_eq!(decode_base64("aGk=").unwrap(), b"hi");
/// assert_eq!(decode_base64("aG\nk").unwrap(), b"hi");
/// assert!(decode_base64("not base64!").is_err());
/// ```
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>, StorageError> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    LENIENT
        .decode(compact.as_bytes())
        .map_err(|e| StorageError::new(StorageErrorKind::Decode(e.to_string())))
}

/// A media file written under the static root.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PersistedArtifact {
    /// File name, also the relative URL it is served under
    file_name: String,
    /// Absolute or root-relative path on disk
    path: PathBuf,
    /// Image or audio
    kind: MediaKind,
    /// Decoded size in bytes
    size: usize,
}

impl PersistedArtifact {
    /// Relative URL for clients.
    pub fn url(&self) -> &str {
        &self.file_name
    }
}

/// Writes artifacts as `<prefix>_<millis>.<ext>` under a fixed directory.
///
/// Timestamps come from a per-store monotonic clock, so two calls in the same
/// millisecond still get distinct names. Files are created exclusively; an
/// existing file with the same name is an error, never overwritten.
#[derive(Debug)]
pub struct ArtifactStore {
    root: PathBuf,
    last_timestamp: AtomicI64,
}

impl ArtifactStore {
    /// Creates a store writing into `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            last_timestamp: AtomicI64::new(0),
        }
    }

    /// The directory artifacts are written to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if it does not exist yet.
    pub async fn ensure_root(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Io(format!(
                "cannot create {}: {}",
                self.root.display(),
                e
            )))
        })
    }

    /// Next timestamp, strictly greater than every one issued before.
    fn next_timestamp(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        match self
            .last_timestamp
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            }) {
            Ok(last) | Err(last) => now.max(last + 1),
        }
    }

    /// Decode `encoded` and write it to a fresh file.
    ///
    /// Nothing is written when decoding fails.
    ///
    /// # Errors
    ///
    /// [`StorageErrorKind::Decode`] for invalid base64, [`StorageErrorKind::Io`]
    /// when the file cannot be created or written.
    #[instrument(skip(self, encoded), fields(kind = %kind, encoded_len = encoded.len()))]
    pub async fn persist(
        &self,
        encoded: &str,
        kind: MediaKind,
    ) -> Result<PersistedArtifact, StorageError> {
        let bytes = decode_base64(encoded).inspect_err(|e| {
            warn!(error = %e.kind, "Rejected media payload");
        })?;

        let file_name = format!(
            "{}_{}.{}",
            kind.prefix(),
            self.next_timestamp(),
            kind.extension()
        );
        let path = self.root.join(&file_name);
        debug!(path = %path.display(), bytes = bytes.len(), "Writing artifact");

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                error!(path = %path.display(), error = %e, "Failed to create artifact");
                StorageError::new(StorageErrorKind::Io(format!("{}: {}", file_name, e)))
            })?;

        if let Err(e) = write_all(&mut file, &bytes).await {
            error!(path = %path.display(), error = %e, "Failed to write artifact");
            drop(file);
            if let Err(cleanup) = tokio::fs::remove_file(&path).await {
                warn!(path = %path.display(), error = %cleanup, "Failed to remove partial artifact");
            }
            return Err(StorageError::new(StorageErrorKind::Io(format!(
                "{}: {}",
                file_name, e
            ))));
        }

        info!(file = %file_name, bytes = bytes.len(), "Persisted artifact");
        Ok(PersistedArtifact {
            file_name,
            path,
            kind,
            size: bytes.len(),
        })
    }
}

async fn write_all(file: &mut tokio::fs::File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await
}
