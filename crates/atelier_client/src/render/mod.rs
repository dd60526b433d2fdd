//! Incremental rendering of gateway replies.
//!
//! No network access happens here: an [`Exchange`] is handed the request
//! future and a [`crate::Surface`] to draw on.

mod exchange;
mod indicator;
mod markdown;
mod reveal;

pub use exchange::{Exchange, RenderOptions, RenderOptionsBuilder, RenderState, failure_marker};
pub use indicator::{INDICATOR_STATES, WAITING_GLYPH, WaitingIndicator, indicator_text};
pub use markdown::markdown_to_html;
pub use reveal::{TagAwareReveal, reveal};
