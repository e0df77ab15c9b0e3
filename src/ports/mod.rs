//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - persistence of the local snapshot
//! - `Clipboard` - best-effort copy of share links
//! - `DecisionPresenter` - rendering of state, recommendations and notices

mod clipboard;
mod key_value_store;
mod presenter;

pub use clipboard::{Clipboard, ClipboardError};
pub use key_value_store::{KeyValueStore, StorageError};
pub use presenter::{DecisionPresenter, Notice};
