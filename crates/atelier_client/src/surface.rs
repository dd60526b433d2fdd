//! Display sinks the renderer writes into.

use std::sync::Mutex;

/// Somewhere a rendered exchange becomes visible.
///
/// Each call replaces what the surface currently shows for the exchange.
/// Methods take `&self` because the waiting indicator task and the exchange
/// share one surface.
pub trait Surface: Send + Sync {
    /// Show plain text, e.g. the waiting indicator or an error line.
    fn show_text(&self, text: &str);

    /// Show markup. Always tag-complete.
    fn show_markup(&self, markup: &str);
}

/// One update pushed to a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Passed to [`Surface::show_text`]
    Text(String),
    /// Passed to [`Surface::show_markup`]
    Markup(String),
}

impl Frame {
    /// The displayed string, whatever its kind.
    pub fn content(&self) -> &str {
        match self {
            Frame::Text(s) | Frame::Markup(s) => s,
        }
    }
}

/// Keeps every frame in order. Useful for tests and transcripts.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    frames: Mutex<Vec<Frame>>,
}

impl RecordingSurface {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames so far.
    pub fn frames(&self) -> Vec<Frame> {
        self.frames
            .lock()
            .map(|frames| frames.clone())
            .unwrap_or_default()
    }

    /// The most recent frame.
    pub fn last(&self) -> Option<Frame> {
        self.frames
            .lock()
            .ok()
            .and_then(|frames| frames.last().cloned())
    }

    fn push(&self, frame: Frame) {
        if let Ok(mut frames) = self.frames.lock() {
            frames.push(frame);
        }
    }
}

impl Surface for RecordingSurface {
    fn show_text(&self, text: &str) {
        self.push(Frame::Text(text.to_string()));
    }

    fn show_markup(&self, markup: &str) {
        self.push(Frame::Markup(markup.to_string()));
    }
}
