//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Decision Duck domain.

mod errors;
mod ids;
mod side;
mod weight;

pub use errors::ValidationError;
pub use ids::EntryId;
pub use side::Side;
pub use weight::Weight;
