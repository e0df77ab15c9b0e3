//! Decision Duck - pros/cons decision support with lock-gated scoring.
//!
//! Users list weighted pros and cons. Totals stay hidden until both lists
//! are marked done; then a net score is bucketed into a recommendation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
