//! Model runtime error types.

/// Failures talking to the model runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum BackendErrorKind {
    /// Connection or transport failure
    #[display("{}", _0)]
    Transport(String),
    /// Runtime answered with a non-success status
    #[display("Model runtime returned {}: {}", status, message)]
    Status {
        /// HTTP status code
        status: u16,
        /// Upstream error message
        message: String,
    },
    /// Body was not the JSON shape the endpoint documents
    #[display("Malformed model runtime response: {}", _0)]
    InvalidResponse(String),
    /// None of the probed media fields carried a payload
    #[display("No {} returned from model runtime", _0)]
    NoArtifactReturned(String),
}

/// Backend error with source location.
///
/// # Examples
///
/// ```
/// use atelier_error::{BackendError, BackendErrorKind};
///
/// let err = BackendError::new(BackendErrorKind::Transport("connection refused".into()));
/// assert!(err.to_string().contains("connection refused"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Backend Error: {} at line {} in {}", kind, line, file)]
pub struct BackendError {
    /// The kind of error that occurred
    pub kind: BackendErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl BackendError {
    /// Create a new BackendError at the current location.
    #[track_caller]
    pub fn new(kind: BackendErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
