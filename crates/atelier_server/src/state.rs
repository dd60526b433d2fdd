//! Shared handler state.

use crate::{Dispatcher, GatewayConfig, ModelSelection};
use atelier_documents::UploadArea;
use atelier_error::AtelierResult;
use atelier_models::{ModelRuntime, OllamaRuntime};
use atelier_storage::ArtifactStore;
use std::sync::Arc;
use tracing::{info, instrument};

/// API server state.
#[derive(Debug)]
pub struct AppState<R> {
    /// Operation dispatcher
    pub dispatcher: Arc<Dispatcher<R>>,
    /// Upload directory for summaries
    pub uploads: Arc<UploadArea>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
            uploads: Arc::clone(&self.uploads),
        }
    }
}

impl<R: ModelRuntime> AppState<R> {
    /// Creates a new API state.
    pub fn new(dispatcher: Dispatcher<R>, uploads: UploadArea) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            uploads: Arc::new(uploads),
        }
    }
}

impl AppState<OllamaRuntime> {
    /// Wire the HTTP runtime, artifact store and upload area from config,
    /// creating the static and upload directories if needed.
    #[instrument(skip_all)]
    pub async fn from_config(config: &GatewayConfig) -> AtelierResult<Self> {
        let store = ArtifactStore::new(config.static_dir());
        store.ensure_root().await?;
        let uploads = UploadArea::new(config.upload_dir());
        uploads.ensure_dir().await?;

        let models = ModelSelection::new(
            config.text_model(),
            config.image_model(),
            config.audio_model(),
        );
        let runtime = OllamaRuntime::new(config.ollama_host());
        info!(
            static_dir = %store.root().display(),
            upload_dir = %uploads.dir().display(),
            "Gateway state ready"
        );
        Ok(Self::new(Dispatcher::new(runtime, store, models), uploads))
    }
}
