//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (weights, sides, IDs, errors)
//! - `decision` - Item store, lock gate and score aggregation
//! - `recommendation` - Bucketing and flavor text
//! - `snapshot` - Storage blobs and share-link payloads

pub mod decision;
pub mod foundation;
pub mod recommendation;
pub mod snapshot;
