//! Clipboard Adapters
//!
//! - **CommandClipboard** - pipes text into a system clipboard program
//! - **UnavailableClipboard** - no clipboard; every copy falls back to manual

mod command_clipboard;
mod unavailable;

pub use command_clipboard::CommandClipboard;
pub use unavailable::UnavailableClipboard;
