//! Gateway client and renderer error types.

/// Kinds of client-side errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ClientErrorKind {
    /// Could not reach the gateway
    #[display("{}", _0)]
    Transport(String),
    /// Gateway answered with its error envelope
    #[display("{}", message)]
    Gateway {
        /// HTTP status code
        status: u16,
        /// The `error` field of the envelope
        message: String,
    },
    /// Success body did not match the operation's reply shape
    #[display("Unexpected gateway reply: {}", _0)]
    InvalidReply(String),
    /// Local file could not be read for upload
    #[display("Cannot read {}", _0)]
    Io(String),
    /// An exchange only runs once
    #[display("Exchange already started")]
    ExchangeReused,
}

/// Client error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Client Error: {} at line {} in {}", kind, line, file)]
pub struct ClientError {
    /// The kind of error that occurred
    pub kind: ClientErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ClientError {
    /// Create a new client error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ClientErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
