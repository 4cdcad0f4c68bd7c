//! Clipboard access behind a minimal writer interface.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

#[derive(Debug)]
pub enum ClipboardError {
    Unavailable(String),
    SetFailed(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unavailable(s) => write!(f, "clipboard unavailable: {}", s),
            ClipboardError::SetFailed(s) => write!(f, "clipboard write failed: {}", s),
        }
    }
}

/// Anything that can receive plain text for pasting.
pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
pub struct SystemClipboard(ClipboardContext);

impl SystemClipboard {
    /// Fails when no clipboard is reachable (e.g. a headless session).
    pub fn new() -> Result<Self, ClipboardError> {
        ClipboardContext::new()
            .map(Self)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.0
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError::SetFailed(e.to_string()))?;
        // Read back to make the paste server latch the contents, then scrub
        // the returned copy.
        if let Ok(mut retrieved) = self.0.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

#[cfg(test)]
pub use fake::MemoryClipboard;
