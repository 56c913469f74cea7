//! Clipboard readers
//!
//! [`SystemClipboard`] reads the desktop clipboard through `arboard` on a
//! blocking thread. [`FixedClipboard`] returns a canned answer, for tests and
//! for hosts with no clipboard.

use super::ClipboardReader;
use std::future::Future;
use thiserror::Error;
use tracing::debug;

/// Clipboard read failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The platform clipboard refused the read
    #[error("system clipboard failed: {0}")]
    System(String),

    /// The clipboard holds no text
    #[error("clipboard is empty")]
    Empty,

    /// The read did not finish in time
    #[error("clipboard read timed out after {ms} ms")]
    TimedOut { ms: u64 },
}

/// Desktop clipboard via `arboard`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard
    }

    fn read_blocking() -> Result<String, ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::System(e.to_string()))?;
        match clipboard.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Err(ClipboardError::Empty),
            Err(e) => Err(ClipboardError::System(e.to_string())),
        }
    }
}

impl ClipboardReader for SystemClipboard {
    fn read_text(&self) -> impl Future<Output = Result<String, ClipboardError>> + Send {
        async {
            debug!("reading system clipboard");
            tokio::task::spawn_blocking(Self::read_blocking)
                .await
                .map_err(|e| ClipboardError::System(e.to_string()))?
        }
    }
}

/// Clipboard with a preset answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClipboard {
    answer: Result<String, ClipboardError>,
}

impl FixedClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        FixedClipboard {
            answer: Ok(text.into()),
        }
    }

    pub fn failing(error: ClipboardError) -> Self {
        FixedClipboard { answer: Err(error) }
    }

    pub fn empty() -> Self {
        Self::failing(ClipboardError::Empty)
    }
}

impl ClipboardReader for FixedClipboard {
    fn read_text(&self) -> impl Future<Output = Result<String, ClipboardError>> + Send {
        let answer = self.answer.clone();
        async move { answer }
    }
}
