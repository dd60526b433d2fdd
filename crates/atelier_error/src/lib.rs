//! Error types for the Atelier inference gateway.
//!
//! Each domain gets a location-tracked error struct wrapping a kind enum. The
//! kind carries the user-facing text; the struct adds where the error was raised.

mod backend;
mod client;
mod config;
mod document;
mod storage;
mod validation;

pub use backend::{BackendError, BackendErrorKind};
pub use client::{ClientError, ClientErrorKind};
pub use config::ConfigError;
pub use document::{DocumentError, DocumentErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum AtelierErrorKind {
    /// Missing or blank input
    #[display("{}", _0)]
    Validation(ValidationError),
    /// Upload handling or text extraction
    #[display("{}", _0)]
    Document(DocumentError),
    /// Model runtime failure
    #[display("{}", _0)]
    Backend(BackendError),
    /// Artifact decoding or persistence
    #[display("{}", _0)]
    Storage(StorageError),
    /// Configuration error
    #[display("{}", _0)]
    Config(ConfigError),
    /// Gateway client or renderer
    #[display("{}", _0)]
    Client(ClientError),
}

/// Atelier error with kind discrimination.
#[derive(Debug)]
pub struct AtelierError(Box<AtelierErrorKind>);

impl AtelierError {
    /// Create a new error from a kind.
    pub fn new(kind: AtelierErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AtelierErrorKind {
        &self.0
    }

    /// The message meant for API callers, without the source location.
    pub fn public_message(&self) -> String {
        match self.kind() {
            AtelierErrorKind::Validation(e) => e.kind.to_string(),
            AtelierErrorKind::Document(e) => e.kind.to_string(),
            AtelierErrorKind::Backend(e) => e.kind.to_string(),
            AtelierErrorKind::Storage(e) => e.kind.to_string(),
            AtelierErrorKind::Config(e) => e.message.clone(),
            AtelierErrorKind::Client(e) => e.kind.to_string(),
        }
    }
}

impl std::fmt::Display for AtelierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Atelier Error: {}", self.0)
    }
}

impl std::error::Error for AtelierError {}

// Generic From implementation for any type that converts to AtelierErrorKind
impl<T> From<T> for AtelierError
where
    T: Into<AtelierErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Atelier operations.
pub type AtelierResult<T> = std::result::Result<T, AtelierError>;
