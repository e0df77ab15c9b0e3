//! Recommendation module - buckets a revealed net score and dresses it up.
//!
//! All functions are pure apart from the caller-supplied random source.

mod bucket;
mod engine;
mod phrases;

pub use bucket::{Bucket, LEAN_NET_THRESHOLD, MIN_STRONG_ENTRIES, STRONG_NET_THRESHOLD};
pub use engine::{Recommendation, RecommendationEngine};
pub use phrases::{phrases, BucketPhrases};
