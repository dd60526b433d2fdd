//! Inference dispatcher and HTTP gateway for Atelier.
//!
//! [`Dispatcher`] turns an [`atelier_core::Operation`] into a model runtime
//! call and a client-facing [`Outcome`]; [`create_router`] exposes one route
//! per operation kind and maps every failure to an `{error}` envelope.

mod api;
mod config;
mod dispatch;
mod error;
mod extract;
mod state;

pub use api::{DOCUMENT_FIELD, MAX_UPLOAD_BYTES, Reply, create_router};
pub use config::{DEFAULT_AUDIO_MODEL, DEFAULT_IMAGE_MODEL, GatewayConfig};
pub use dispatch::{CHAT_INSTRUCTION, Dispatcher, ModelSelection, Outcome, SUMMARY_INSTRUCTION};
pub use error::ApiError;
pub use extract::JsonOrForm;
pub use state::AppState;
