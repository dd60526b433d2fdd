//! Document extraction error types.

/// Kinds of document extraction errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DocumentErrorKind {
    /// Extension is neither `.pdf` nor `.docx`
    #[display("Unsupported file type")]
    UnsupportedFormat(String),
    /// The parser rejected the file
    #[display("Failed to extract document text: {}", _0)]
    Extraction(String),
    /// Reading, writing or removing the upload failed
    #[display("Upload I/O error: {}", _0)]
    Io(String),
}

/// Document error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Document Error: {} at line {} in {}", kind, line, file)]
pub struct DocumentError {
    /// The kind of error that occurred
    pub kind: DocumentErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DocumentError {
    /// Create a new document error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DocumentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
