//! The "still thinking" indicator.

use crate::Surface;
use std::{sync::Arc, time::Duration};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Glyph shown in front of the dots.
pub const WAITING_GLYPH: &str = "💭 ";

/// Number of distinct indicator states: zero to three dots.
pub const INDICATOR_STATES: usize = 4;

/// Text of indicator state `n`, for `n` in `0..INDICATOR_STATES`.
pub fn indicator_text(n: usize) -> String {
    format!("{}{}", WAITING_GLYPH, ".".repeat(n % INDICATOR_STATES))
}

/// A background task cycling the waiting text on a surface.
///
/// The first state is shown immediately, then one state per period. Dropping
/// the indicator aborts the task; [`WaitingIndicator::cancel`] also waits for
/// it to finish so no update lands afterwards.
#[derive(Debug)]
pub struct WaitingIndicator {
    task: Option<JoinHandle<()>>,
}

impl WaitingIndicator {
    /// Start cycling on `surface` every `period` (at least one millisecond).
    pub fn start<S>(surface: Arc<S>, period: Duration) -> Self
    where
        S: Surface + ?Sized + 'static,
    {
        let period = period.max(Duration::from_millis(1));
        let task = tokio::spawn(async move {
            let mut ticks = tokio::time::interval(period);
            let mut state = 0usize;
            loop {
                ticks.tick().await;
                trace!(state, "Indicator tick");
                surface.show_text(&indicator_text(state));
                state = (state + 1) % INDICATOR_STATES;
            }
        });
        debug!(?period, "Waiting indicator started");
        Self { task: Some(task) }
    }

    /// Stop the indicator and wait until its task has ended.
    pub async fn cancel(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            // Cancelled is the expected outcome.
            let _ = task.await;
            debug!("Waiting indicator stopped");
        }
    }
}

impl Drop for WaitingIndicator {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}
