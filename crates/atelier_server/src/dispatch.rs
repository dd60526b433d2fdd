//! Maps each operation kind onto the model runtime.

use atelier_core::{ChatMessage, MediaKind, Operation};
use atelier_error::{AtelierResult, BackendError, BackendErrorKind};
use atelier_models::{ChatCompletion, Generation, ModelRuntime, probes_for};
use atelier_storage::{ArtifactStore, PersistedArtifact};
use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

/// System instruction for chat.
pub const CHAT_INSTRUCTION: &str = "You are a helpful assistant. Format your answers using **Markdown**. Use bullet points, numbered lists, bold key terms, and headings when appropriate. Be concise and structured.";

/// System instruction for document summaries.
pub const SUMMARY_INSTRUCTION: &str = "Summarise the following document in clear bullet points, numbered lists, bold key terms, and headings when appropriate. Be concise and structured.";

/// Model identifiers per output modality.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ModelSelection {
    /// Chat and summaries
    text: String,
    /// Image synthesis
    image: String,
    /// Speech synthesis
    audio: String,
}

impl ModelSelection {
    /// Creates a model selection.
    pub fn new(
        text: impl Into<String>,
        image: impl Into<String>,
        audio: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            image: image.into(),
            audio: audio.into(),
        }
    }
}

/// What a dispatched operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Chat answer, markdown
    Text(String),
    /// Persisted image or audio
    Artifact(PersistedArtifact),
    /// Document summary, markdown
    Summary(String),
}

/// Stateless mapping from [`Operation`] to backend request, call and result.
#[derive(Debug)]
pub struct Dispatcher<R> {
    runtime: R,
    store: ArtifactStore,
    models: ModelSelection,
}

impl<R: ModelRuntime> Dispatcher<R> {
    /// Creates a dispatcher over `runtime`, persisting media into `store`.
    pub fn new(runtime: R, store: ArtifactStore, models: ModelSelection) -> Self {
        Self {
            runtime,
            store,
            models,
        }
    }

    /// The artifact store media is written to.
    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// The configured models.
    pub fn models(&self) -> &ModelSelection {
        &self.models
    }

    /// Validate, call the runtime, and map the response.
    ///
    /// Blank input fails before any backend call.
    #[instrument(skip(self, operation), fields(kind = %operation.kind(), input_chars = operation.input().chars().count()))]
    pub async fn dispatch(&self, operation: Operation) -> AtelierResult<Outcome> {
        operation.validate().inspect_err(|e| {
            warn!(error = %e.kind, "Rejected operation");
        })?;

        let outcome = match operation {
            Operation::Chat { prompt } => Outcome::Text(self.chat(prompt).await?),
            Operation::ImageSynthesis { prompt } => Outcome::Artifact(self.image(prompt).await?),
            Operation::DocumentSummary { text } => Outcome::Summary(self.summary(text).await?),
            Operation::SpeechSynthesis { text } => Outcome::Artifact(self.speech(text).await?),
        };
        info!("Operation completed");
        Ok(outcome)
    }

    async fn chat(&self, prompt: String) -> AtelierResult<String> {
        self.complete(CHAT_INSTRUCTION, prompt).await
    }

    async fn summary(&self, text: String) -> AtelierResult<String> {
        self.complete(SUMMARY_INSTRUCTION, text).await
    }

    async fn image(&self, prompt: String) -> AtelierResult<PersistedArtifact> {
        self.synthesise(MediaKind::Image, &self.models.image, prompt)
            .await
    }

    async fn speech(&self, text: String) -> AtelierResult<PersistedArtifact> {
        self.synthesise(MediaKind::Audio, &self.models.audio, text)
            .await
    }

    async fn complete(&self, instruction: &str, content: String) -> AtelierResult<String> {
        let request = ChatCompletion::new(
            self.models.text.clone(),
            vec![ChatMessage::system(instruction), ChatMessage::user(content)],
        );
        debug!(model = %request.model(), "Dispatching chat completion");
        Ok(self.runtime.chat(&request).await?)
    }

    async fn synthesise(
        &self,
        kind: MediaKind,
        model: &str,
        prompt: String,
    ) -> AtelierResult<PersistedArtifact> {
        let request = Generation::new(model, prompt, kind.format());
        debug!(model = %model, %kind, "Dispatching generation");
        let payload = self.runtime.generate(&request).await?;

        let encoded = payload.probe(probes_for(kind)).ok_or_else(|| {
            warn!(%kind, "Generate response carried no media field");
            BackendError::new(BackendErrorKind::NoArtifactReturned(kind.noun().to_string()))
        })?;

        Ok(self.store.persist(encoded, kind).await?)
    }
}
