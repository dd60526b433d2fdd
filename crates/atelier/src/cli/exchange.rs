//! Client command handlers: one rendered exchange against a gateway.

use crate::terminal::TerminalSurface;
use atelier_client::{Exchange, GatewayClient, RecordingSurface, RenderOptions, RenderState};
use atelier_core::OperationKind;
use std::{io::IsTerminal, path::PathBuf, sync::Arc};
use tracing::instrument;

/// What the user asked the gateway for.
#[derive(Debug, Clone)]
pub enum ClientRequest {
    Chat(String),
    Image(String),
    Summarise(PathBuf),
    Speak(String),
}

impl ClientRequest {
    fn kind(&self) -> OperationKind {
        match self {
            ClientRequest::Chat(_) => OperationKind::Chat,
            ClientRequest::Image(_) => OperationKind::ImageSynthesis,
            ClientRequest::Summarise(_) => OperationKind::DocumentSummary,
            ClientRequest::Speak(_) => OperationKind::SpeechSynthesis,
        }
    }
}

/// Run one exchange and render it on stdout.
///
/// A terminal gets the indicator and the progressive reveal; anything else
/// gets only the final frame. Returns whether the exchange settled.
#[instrument(skip(request), fields(kind = %request.kind()))]
pub async fn handle_exchange_command(gateway: &str, request: ClientRequest) -> anyhow::Result<bool> {
    let client = GatewayClient::new(gateway);
    let kind = request.kind();
    let call = async {
        match &request {
            ClientRequest::Chat(prompt) => client.chat(prompt).await,
            ClientRequest::Image(prompt) => client.image(prompt).await,
            ClientRequest::Summarise(path) => client.summarise(path).await,
            ClientRequest::Speak(text) => client.speech(text).await,
        }
    };

    let state = if std::io::stdout().is_terminal() {
        let surface = Arc::new(TerminalSurface::new());
        let state = Exchange::new(kind, Arc::clone(&surface), RenderOptions::default())
            .run(call)
            .await?;
        surface.finish();
        state
    } else {
        let surface = Arc::new(RecordingSurface::new());
        let state = Exchange::new(kind, Arc::clone(&surface), RenderOptions::default())
            .run(call)
            .await?;
        if let Some(frame) = surface.last() {
            println!("{}", frame.content());
        }
        state
    };

    Ok(state == RenderState::Settled)
}
