//! Mapping internal failures onto the `{error}` envelope.

use atelier_core::ErrorReply;
use atelier_error::{AtelierError, AtelierErrorKind, DocumentError, DocumentErrorKind};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

/// API error type
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status returned
    pub status: StatusCode,
    /// Text placed in the `error` field
    pub message: String,
}

impl ApiError {
    /// Error with an explicit status.
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }

    /// 400 Bad Request.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    /// 500 Internal Server Error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorReply {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<AtelierError> for ApiError {
    fn from(err: AtelierError) -> Self {
        let message = err.public_message();
        match err.kind() {
            AtelierErrorKind::Validation(_) => {
                warn!(error = %err, "Rejected request");
                ApiError::bad_request(message)
            }
            AtelierErrorKind::Document(e)
                if matches!(e.kind, DocumentErrorKind::UnsupportedFormat(_)) =>
            {
                warn!(error = %err, "Rejected upload");
                ApiError::bad_request(message)
            }
            _ => {
                error!(error = %err, "Request failed");
                ApiError::internal(message)
            }
        }
    }
}

impl From<DocumentError> for ApiError {
    fn from(err: DocumentError) -> Self {
        AtelierError::from(err).into()
    }
}
