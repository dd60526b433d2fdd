//! Terminal surface that redraws the exchange in place.

use atelier_client::Surface;
use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::{
    io::{Stdout, Write},
    sync::Mutex,
};
use tracing::debug;

/// Rows occupied by the last frame, so the next one can overwrite it.
#[derive(Debug)]
pub struct TerminalSurface {
    out: Mutex<(Stdout, u16)>,
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self {
            out: Mutex::new((std::io::stdout(), 0)),
        }
    }
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave the cursor on a fresh line below the final frame.
    pub fn finish(&self) {
        if let Ok(mut guard) = self.out.lock() {
            let (out, rows) = &mut *guard;
            if writeln!(out).and_then(|_| out.flush()).is_err() {
                debug!("Terminal write failed");
            }
            *rows = 0;
        }
    }

    fn redraw(&self, content: &str) {
        let Ok(mut guard) = self.out.lock() else {
            return;
        };
        let (out, rows) = &mut *guard;
        let width = crossterm::terminal::size().map(|(w, _)| w.max(1)).unwrap_or(80);

        let result = (|| -> std::io::Result<()> {
            queue!(out, MoveToColumn(0))?;
            if *rows > 1 {
                queue!(out, MoveUp(*rows - 1))?;
            }
            queue!(out, Clear(ClearType::FromCursorDown))?;
            for (i, line) in content.split('\n').enumerate() {
                if i > 0 {
                    queue!(out, Print("\r\n"))?;
                }
                queue!(out, Print(line))?;
            }
            out.flush()
        })();

        match result {
            Ok(()) => *rows = rows_for(content, width),
            Err(e) => debug!(error = %e, "Terminal write failed"),
        }
    }
}

impl Surface for TerminalSurface {
    fn show_text(&self, text: &str) {
        self.redraw(text);
    }

    fn show_markup(&self, markup: &str) {
        self.redraw(markup);
    }
}

/// Terminal rows `content` occupies at `width` columns.
fn rows_for(content: &str, width: u16) -> u16 {
    let width = usize::from(width);
    let rows: usize = content
        .split('\n')
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_for_wraps_long_lines() {
        assert_eq!(rows_for("", 80), 1);
        assert_eq!(rows_for("abc", 80), 1);
        assert_eq!(rows_for(&"x".repeat(81), 80), 2);
        assert_eq!(rows_for("a\nb\n", 80), 3);
    }
}
