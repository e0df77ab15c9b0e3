//! Clipboard adapter for environments without one.

use crate::ports::{Clipboard, ClipboardError};

/// Always fails, so callers fall back to manual copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn copy_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}
