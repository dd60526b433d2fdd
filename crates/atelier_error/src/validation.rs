//! Input validation error types.

/// Required inputs that were missing or blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Chat or image prompt was empty
    #[display("Missing prompt")]
    MissingPrompt,
    /// Speech text was empty
    #[display("Missing text")]
    MissingText,
    /// No `doc` field in the upload
    #[display("Missing document")]
    MissingDocument,
    /// Extraction produced nothing but whitespace
    #[display("Document contains no extractable text")]
    EmptyDocument,
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use atelier_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::MissingPrompt);
/// assert_eq!(err.kind.to_string(), "Missing prompt");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// What was missing
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
