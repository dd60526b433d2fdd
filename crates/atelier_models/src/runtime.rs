//! The seam between the dispatcher and a model-serving backend.

use crate::{ChatCompletion, Generation, GenerationPayload};
use async_trait::async_trait;
use atelier_error::BackendError;

/// A model runtime exposing chat and generate endpoints.
///
/// Calls carry no timeout: local inference may take minutes and the caller
/// waits for as long as the runtime does.
#[async_trait]
pub trait ModelRuntime: Send + Sync {
    /// Run a chat completion and return the assistant text verbatim.
    async fn chat(&self, request: &ChatCompletion) -> Result<String, BackendError>;

    /// Run a generation and return the raw response body.
    async fn generate(&self, request: &Generation) -> Result<GenerationPayload, BackendError>;
}
