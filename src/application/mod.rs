//! Application layer - command dispatch and session lifecycle.
//!
//! Front ends translate user input into `DecisionCommand`s and hand them to
//! the `DecisionController`, which owns the decision and talks to the ports.

mod commands;
mod controller;

pub use commands::{CommandOutcome, DecisionCommand, ShareOutcome};
pub use controller::{
    DecisionController, SessionSettings, DEFAULT_SHARE_BASE_URL, DEFAULT_STORAGE_KEY,
};
