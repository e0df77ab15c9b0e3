//! Decision module - the pros/cons lists, their locks, and score aggregation.
//!
//! # Components
//!
//! - `Entry` - one weighted pro or con
//! - `LockGate` - per-side "I'm done" flags
//! - `Decision` - aggregate root owning topic, lists and locks
//! - `Totals` / `ScoreBoard` - sums and what may be shown of them

mod aggregate;
mod entry;
mod lock_gate;
mod totals;

pub use aggregate::Decision;
pub use entry::Entry;
pub use lock_gate::LockGate;
pub use totals::{signed, ScoreBoard, Totals, HIDDEN_SCORE_PROMPT, HIDDEN_TOTAL_LABEL};
