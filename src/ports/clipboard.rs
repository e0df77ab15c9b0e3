//! Clipboard Port - best-effort copy of share links.

use thiserror::Error;

/// Errors that can occur while copying
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("No clipboard available")]
    Unavailable,

    #[error("Clipboard program could not be started: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Clipboard program failed: {0}")]
    Failed(String),
}

/// Port for placing text on the system clipboard
///
/// Callers must treat every error as "show the text for manual copying".
pub trait Clipboard: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError>;
}
