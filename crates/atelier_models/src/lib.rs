//! Model runtime integration for Atelier.
//!
//! [`ModelRuntime`] is the seam the dispatcher calls through; [`OllamaRuntime`]
//! implements it over HTTP. Generate responses are searched for media with the
//! ordered probes in [`probe`].

mod dto;
mod ollama;
pub mod probe;
mod runtime;

pub use dto::{AssistantMessage, ChatCompletion, ChatCompletionResponse, Generation, GenerationPayload};
pub use ollama::OllamaRuntime;
pub use probe::{AUDIO_PROBES, FieldProbe, IMAGE_PROBES, probes_for};
pub use runtime::ModelRuntime;
