//! Snapshot module - portable encodings of a full decision.
//!
//! - `SnapshotDocument` - wire shape shared with the browser build
//! - `SnapshotCodec` - JSON blob for storage, base64 payload for links
//! - `ShareLink` - `#d=` fragment handling

mod codec;
mod document;
mod errors;
mod share_link;

pub use codec::SnapshotCodec;
pub use document::{EntryDocument, SnapshotDocument};
pub use errors::SnapshotError;
pub use share_link::{ShareLink, FRAGMENT_PREFIX};
