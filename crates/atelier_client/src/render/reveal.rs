//! Character-by-character reveal that never shows half a tag.

use crate::Surface;
use std::time::Duration;
use tracing::{debug, instrument};

/// Successive visible prefixes of a markup string.
///
/// Text characters are revealed one per step. From a `<` up to its matching
/// `>` nothing new is yielded; the whole tag then appears in one step. A
/// trailing `<` without a `>` is never yielded.
///
/// # Examples
///
/// ```
/// use atelier_client::render::TagAwareReveal;
///
/// let frames: Vec<&str> = TagAwareReveal::new("<b>hi</b>").collect();
/// assert_eq!(frames, ["<b>", "<b>h", "<b>hi", "<b>hi</b>"]);
/// ```
#[derive(Debug, Clone)]
pub struct TagAwareReveal<'a> {
    markup: &'a str,
    chars: std::str::CharIndices<'a>,
}

impl<'a> TagAwareReveal<'a> {
    /// Reveal `markup` from the empty string.
    pub fn new(markup: &'a str) -> Self {
        Self {
            markup,
            chars: markup.char_indices(),
        }
    }
}

impl<'a> Iterator for TagAwareReveal<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let mut in_tag = false;
        for (at, c) in self.chars.by_ref() {
            match c {
                '<' if !in_tag => in_tag = true,
                '>' if in_tag => return Some(&self.markup[..at + 1]),
                _ if in_tag => {}
                _ => return Some(&self.markup[..at + c.len_utf8()]),
            }
        }
        None
    }
}

/// Clear the surface, then show each frame of `markup` one `step` apart.
#[instrument(skip(surface, markup), fields(len = markup.len()))]
pub async fn reveal<S: Surface + ?Sized>(surface: &S, markup: &str, step: Duration) {
    surface.show_markup("");
    let mut frames = 0usize;
    for frame in TagAwareReveal::new(markup) {
        tokio::time::sleep(step).await;
        surface.show_markup(frame);
        frames += 1;
    }
    debug!(frames, "Reveal complete");
}
