//! Client for an Ollama-compatible model runtime.

use crate::{ChatCompletion, ChatCompletionResponse, Generation, GenerationPayload, ModelRuntime};
use async_trait::async_trait;
use atelier_core::Role;
use atelier_error::{BackendError, BackendErrorKind};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, instrument, warn};

/// Error body the runtime returns with non-success statuses.
#[derive(Debug, serde::Deserialize)]
struct RuntimeErrorBody {
    error: String,
}

/// HTTP client for the runtime's `/api/chat` and `/api/generate` endpoints.
#[derive(Debug, Clone)]
pub struct OllamaRuntime {
    client: Client,
    host: String,
}

impl OllamaRuntime {
    /// Creates a client for the runtime at `host`, e.g. `http://127.0.0.1:11434`.
    #[instrument(skip_all)]
    pub fn new(host: impl AsRef<str>) -> Self {
        let host = host.as_ref().trim_end_matches('/').to_string();
        debug!(host = %host, "Created model runtime client");
        Self {
            client: Client::new(),
            host,
        }
    }

    /// Returns the runtime base URL.
    pub fn host(&self) -> &str {
        &self.host
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, BackendError> {
        let url = format!("{}{}", self.host, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = ?e, "Model runtime request failed");
                BackendError::new(BackendErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<RuntimeErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            error!(url = %url, status = %status, error = %message, "Model runtime error");
            return Err(BackendError::new(BackendErrorKind::Status {
                status: status.as_u16(),
                message,
            }));
        }

        Ok(response)
    }
}

#[async_trait]
impl ModelRuntime for OllamaRuntime {
    #[instrument(skip(self, request), fields(model = %request.model()))]
    async fn chat(&self, request: &ChatCompletion) -> Result<String, BackendError> {
        debug!(
            message_count = request.messages().len(),
            "Sending chat request"
        );
        let response = self.post("/api/chat", request).await?;
        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse chat response");
            BackendError::new(BackendErrorKind::InvalidResponse(e.to_string()))
        })?;
        if body.message.role != Role::Assistant {
            warn!(role = ?body.message.role, "Chat response not authored by the assistant");
        }
        debug!(chars = body.message.content.len(), "Received chat response");
        Ok(body.message.content)
    }

    #[instrument(skip(self, request), fields(model = %request.model(), format = %request.format()))]
    async fn generate(&self, request: &Generation) -> Result<GenerationPayload, BackendError> {
        debug!("Sending generate request");
        let response = self.post("/api/generate", request).await?;
        let body: serde_json::Value = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse generate response");
            BackendError::new(BackendErrorKind::InvalidResponse(e.to_string()))
        })?;
        Ok(GenerationPayload(body))
    }
}
