//! Turning an upload into model input.

use crate::upload::io_error;
use crate::{UploadedDocument, docx, pdf};
use atelier_core::{DocumentFormat, MAX_DOCUMENT_CHARS};
use atelier_error::{DocumentError, DocumentErrorKind};
use tempfile::TempPath;
use tracing::{debug, error, info, instrument, warn};

/// Longest prefix of `text` with at most `max` characters.
///
/// # Examples
///
/// ```
/// use atelier_documents::truncate_chars;
///
/// assert_eq!(truncate_chars("héllo", 2), "hé");
/// assert_eq!(truncate_chars("hi", 16_000), "hi");
/// ```
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Extract plain text from an upload, then delete it.
///
/// The upload is removed whatever the outcome: unsupported extension, parser
/// failure, success, or the returned future being dropped. The text is cut
/// to [`MAX_DOCUMENT_CHARS`] characters.
///
/// # Errors
///
/// - [`DocumentErrorKind::UnsupportedFormat`] unless the name ends in `.pdf`/`.docx`
/// - [`DocumentErrorKind::Extraction`] when the parser rejects the file
/// - [`DocumentErrorKind::Io`] when the upload cannot be read or removed
#[instrument(skip(document), fields(name = %document.original_name()))]
pub async fn extract_text(document: UploadedDocument) -> Result<String, DocumentError> {
    let extracted = extract_raw(&document).await;
    let removed = discard(document.into_temp_path()).await;

    let text = extracted.inspect_err(|e| {
        warn!(error = %e.kind, "Document extraction failed");
    })?;
    removed?;

    let total = text.chars().count();
    let kept = truncate_chars(&text, MAX_DOCUMENT_CHARS);
    if total > MAX_DOCUMENT_CHARS {
        info!(total, kept = MAX_DOCUMENT_CHARS, "Truncated extracted text");
    }
    Ok(kept.to_string())
}

async fn extract_raw(document: &UploadedDocument) -> Result<String, DocumentError> {
    let format = DocumentFormat::from_extension(document.extension()).ok_or_else(|| {
        DocumentError::new(DocumentErrorKind::UnsupportedFormat(
            document.extension().clone(),
        ))
    })?;

    let bytes = tokio::fs::read(document.path())
        .await
        .map_err(|e| io_error(document.path(), e))?;
    debug!(%format, bytes = bytes.len(), "Parsing document");

    // Parsers are synchronous and may panic on hostile input.
    let parsed = tokio::task::spawn_blocking(move || match format {
        DocumentFormat::Pdf => pdf::extract(&bytes),
        DocumentFormat::Docx => docx::extract(&bytes),
    })
    .await;

    match parsed {
        Ok(result) => result,
        Err(e) => {
            error!(%format, error = %e, "Document parser aborted");
            Err(DocumentError::new(DocumentErrorKind::Extraction(format!(
                "{} parser aborted",
                format
            ))))
        }
    }
}

async fn discard(file: TempPath) -> Result<(), DocumentError> {
    let removed = tokio::fs::remove_file(&file).await;
    match removed {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
            error!(path = %file.display(), error = %e, "Failed to remove upload");
            // Dropping the guard retries the removal.
            Err(io_error(&file, e))
        }
        _ => {
            debug!(path = %file.display(), "Removed upload");
            // Already gone; the guard has nothing left to delete.
            if let Err(e) = file.keep() {
                debug!(error = %e, "Upload guard already released");
            }
            Ok(())
        }
    }
}
