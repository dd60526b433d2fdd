//! PDF text extraction.

use atelier_error::{DocumentError, DocumentErrorKind};

/// Extract the text layer of a PDF held in memory.
pub fn extract(bytes: &[u8]) -> Result<String, DocumentError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| DocumentError::new(DocumentErrorKind::Extraction(e.to_string())))
}
