//! Clipboard configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Clipboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClipboardConfig {
    /// Program line that reads text on stdin and exits, e.g. `wl-copy`.
    /// Unset means share links are always shown for manual copy.
    #[serde(default)]
    pub command: Option<String>,

    /// How long the program may run before sharing falls back to manual copy
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    2_000
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            command: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ClipboardConfig {
    /// Get the copy timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Validate clipboard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if matches!(&self.command, Some(cmd) if cmd.trim().is_empty()) {
            return Err(ValidationError::BlankClipboardCommand);
        }
        if self.timeout_ms == 0 {
            return Err(ValidationError::ZeroClipboardTimeout);
        }
        Ok(())
    }
}
