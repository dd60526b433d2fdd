//! Wire types for the model runtime's chat and generate endpoints.

use crate::probe::FieldProbe;
use atelier_core::{ChatMessage, Role};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ChatCompletion {
    /// Model identifier
    model: String,
    /// Always false; the gateway simulates streaming client-side
    stream: bool,
    /// Conversation messages
    messages: Vec<ChatMessage>,
}

impl ChatCompletion {
    /// Creates a non-streaming chat request.
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            stream: false,
            messages,
        }
    }
}

/// Response body of `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// The assistant's answer
    pub message: AssistantMessage,
}

/// The `message` object of a chat response.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    /// Author of the answer, `assistant` when the runtime omits it
    #[serde(default = "assistant_role")]
    pub role: Role,
    /// Generated content
    pub content: String,
}

fn assistant_role() -> Role {
    Role::Assistant
}

/// Request body for `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Generation {
    /// Model identifier
    model: String,
    /// Prompt or text to synthesise
    prompt: String,
    /// Always false
    stream: bool,
    /// Requested output format, e.g. `png` or `wav`
    format: String,
}

impl Generation {
    /// Creates a non-streaming generate request.
    pub fn new(
        model: impl Into<String>,
        prompt: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
            format: format.into(),
        }
    }
}

/// Untyped body returned by `POST /api/generate`.
///
/// The field carrying the media varies between runtime versions, so the body
/// is kept as JSON and searched with [`FieldProbe`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPayload(pub serde_json::Value);

impl GenerationPayload {
    /// First non-empty string found by the probes, in probe order.
    pub fn probe(&self, probes: &[FieldProbe]) -> Option<&str> {
        probes
            .iter()
            .filter_map(|probe| probe.read(&self.0))
            .find(|value| !value.is_empty())
    }
}
