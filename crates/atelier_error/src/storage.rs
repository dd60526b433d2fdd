//! Artifact storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StorageErrorKind {
    /// Payload was not valid base64
    #[display("Invalid base64 payload: {}", _0)]
    Decode(String),
    /// I/O error while writing the artifact
    #[display("I/O error: {}", _0)]
    Io(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use atelier_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Decode("bad byte".to_string()));
/// assert!(format!("{}", err).contains("Invalid base64"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
