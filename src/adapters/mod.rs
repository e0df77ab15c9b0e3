//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Key-value stores for the local snapshot (file, in-memory)
//! - `clipboard` - System clipboard access (external command, unavailable)
//! - `terminal` - Line-oriented front end and text presenter

pub mod clipboard;
pub mod storage;
pub mod terminal;

pub use clipboard::{CommandClipboard, UnavailableClipboard};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
pub use terminal::{run_session, TerminalPresenter};
