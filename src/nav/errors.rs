//! Error types for the add-friend paste path
//!
//! Neither variant ever reaches the caller of an input method: the
//! dispatcher folds both into the `paste_error` flag of the add-friend
//! screen. They exist so the reason can be logged.

use super::hex::HexCodeError;
use crate::services::ClipboardError;
use thiserror::Error;

/// Why a paste attempt did not produce a friend code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasteError {
    /// The clipboard held text, but not a friend code
    #[error("clipboard text is not a friend code: {0}")]
    Validation(#[from] HexCodeError),

    /// The clipboard could not be read at all
    #[error("clipboard read failed: {0}")]
    Collaborator(#[from] ClipboardError),
}
