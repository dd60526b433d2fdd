//! HTTP routes: one per operation kind, plus health and static files.

use crate::{ApiError, AppState, JsonOrForm, Outcome};
use atelier_core::{
    ArtifactReply, ChatReply, Operation, PromptBody, SummaryReply, TextBody,
};
use atelier_documents::{UploadedDocument, extract_text};
use atelier_error::{AtelierError, ValidationError, ValidationErrorKind};
use atelier_models::ModelRuntime;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{debug, instrument};

/// Largest accepted summarise upload.
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Multipart field carrying the document.
pub const DOCUMENT_FIELD: &str = "doc";

/// Success body; each variant serializes to its route's documented shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    /// `{bot}`
    Chat(ChatReply),
    /// `{url}`
    Artifact(ArtifactReply),
    /// `{summary}`
    Summary(SummaryReply),
}

impl From<Outcome> for Reply {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Text(bot) => Reply::Chat(ChatReply { bot }),
            Outcome::Artifact(artifact) => Reply::Artifact(ArtifactReply {
                url: artifact.url().to_string(),
            }),
            Outcome::Summary(summary) => Reply::Summary(SummaryReply { summary }),
        }
    }
}

/// Creates the API router.
///
/// Unmatched GETs are served from the artifact store's root directory.
pub fn create_router<R: ModelRuntime + 'static>(state: AppState<R>) -> Router {
    let static_files = ServeDir::new(state.dispatcher.store().root());

    Router::new()
        .route("/health", get(health_check))
        .route("/api/chat", post(chat::<R>))
        .route("/api/image", post(image::<R>))
        .route(
            "/api/summarise",
            post(summarise::<R>).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/audio", post(audio::<R>))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

async fn run<R: ModelRuntime>(
    state: &AppState<R>,
    operation: Operation,
) -> Result<Json<Reply>, ApiError> {
    let outcome = state.dispatcher.dispatch(operation).await?;
    Ok(Json(outcome.into()))
}

#[instrument(skip_all)]
async fn chat<R: ModelRuntime>(
    State(state): State<AppState<R>>,
    JsonOrForm(body): JsonOrForm<PromptBody>,
) -> Result<Json<Reply>, ApiError> {
    run(&state, Operation::Chat { prompt: body.prompt }).await
}

#[instrument(skip_all)]
async fn image<R: ModelRuntime>(
    State(state): State<AppState<R>>,
    JsonOrForm(body): JsonOrForm<PromptBody>,
) -> Result<Json<Reply>, ApiError> {
    run(&state, Operation::ImageSynthesis { prompt: body.prompt }).await
}

#[instrument(skip_all)]
async fn audio<R: ModelRuntime>(
    State(state): State<AppState<R>>,
    JsonOrForm(body): JsonOrForm<TextBody>,
) -> Result<Json<Reply>, ApiError> {
    run(&state, Operation::SpeechSynthesis { text: body.text }).await
}

#[instrument(skip_all)]
async fn summarise<R: ModelRuntime>(
    State(state): State<AppState<R>>,
    mut multipart: Multipart,
) -> Result<Json<Reply>, ApiError> {
    let document = receive_document(&state, &mut multipart).await?;
    let text = extract_text(document).await?;
    run(&state, Operation::DocumentSummary { text }).await
}

/// Store the `doc` field in the upload area.
async fn receive_document<R>(
    state: &AppState<R>,
    multipart: &mut Multipart,
) -> Result<UploadedDocument, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::new(e.status(), e.body_text()))?
    {
        if field.name() != Some(DOCUMENT_FIELD) {
            continue;
        }
        let original_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::new(e.status(), e.body_text()))?;
        debug!(name = %original_name, bytes = bytes.len(), "Received document");
        return Ok(state.uploads.save(&original_name, &bytes).await?);
    }

    Err(AtelierError::from(ValidationError::new(ValidationErrorKind::MissingDocument)).into())
}
