//! One request/reply cycle as the user sees it.

use crate::{GatewayReply, Surface, render::WaitingIndicator, render::reveal};
use atelier_core::OperationKind;
use atelier_error::{ClientError, ClientErrorKind};
use derive_getters::Getters;
use std::{future::Future, sync::Arc, time::Duration};
use tracing::{info, instrument, warn};

/// Where an exchange is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum RenderState {
    Idle,
    Waiting,
    Revealing,
    Settled,
    Failed,
}

/// Timing of the indicator and the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(default)]
pub struct RenderOptions {
    /// Indicator period
    tick: Duration,
    /// Delay between reveal frames
    reveal_step: Duration,
}

impl RenderOptions {
    /// Builder starting from the defaults.
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(300),
            reveal_step: Duration::from_millis(18),
        }
    }
}

/// Line shown before the error text when an exchange of `kind` fails.
pub fn failure_marker(kind: OperationKind) -> &'static str {
    match kind {
        OperationKind::Chat => "⚠️ Error: ",
        OperationKind::ImageSynthesis => "⚠️ Image failed: ",
        OperationKind::DocumentSummary => "❌ Failed: ",
        OperationKind::SpeechSynthesis => "❌ TTS failed: ",
    }
}

/// Drives one request through waiting, reveal and settling on a surface.
#[derive(Debug)]
pub struct Exchange<S: ?Sized> {
    kind: OperationKind,
    options: RenderOptions,
    state: RenderState,
    surface: Arc<S>,
}

impl<S> Exchange<S>
where
    S: Surface + ?Sized + 'static,
{
    /// A fresh, idle exchange.
    pub fn new(kind: OperationKind, surface: Arc<S>, options: RenderOptions) -> Self {
        Self {
            kind,
            options,
            state: RenderState::Idle,
            surface,
        }
    }

    /// Current state.
    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Operation kind this exchange renders.
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Show the indicator while `request` runs, then reveal its reply or
    /// show the failure line.
    ///
    /// Returns the final state, [`RenderState::Settled`] or
    /// [`RenderState::Failed`]. A gateway failure is not an `Err`; it is
    /// rendered.
    ///
    /// # Errors
    ///
    /// [`ClientErrorKind::ExchangeReused`] if this exchange has already run.
    #[instrument(skip(self, request), fields(kind = %self.kind))]
    pub async fn run<F>(&mut self, request: F) -> Result<RenderState, ClientError>
    where
        F: Future<Output = Result<GatewayReply, ClientError>>,
    {
        if self.state != RenderState::Idle {
            warn!(state = %self.state, "Exchange already started");
            return Err(ClientError::new(ClientErrorKind::ExchangeReused));
        }

        self.state = RenderState::Waiting;
        let indicator = WaitingIndicator::start(Arc::clone(&self.surface), self.options.tick);
        let outcome = request.await;
        indicator.cancel().await;

        match outcome {
            Ok(reply) => {
                self.state = RenderState::Revealing;
                let markup = reply.to_markup();
                reveal(&*self.surface, &markup, self.options.reveal_step).await;
                self.state = RenderState::Settled;
                info!("Exchange settled");
            }
            Err(e) => {
                warn!(error = %e, "Exchange failed");
                self.surface
                    .show_text(&format!("{}{}", failure_marker(self.kind), e.kind));
                self.state = RenderState::Failed;
            }
        }
        Ok(self.state)
    }
}
