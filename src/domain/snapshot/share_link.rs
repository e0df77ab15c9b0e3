//! Shareable links of the form `<base>#d=<payload>`.

use super::{SnapshotCodec, SnapshotError};
use crate::domain::decision::Decision;

/// Fragment marker that precedes the encoded payload.
pub const FRAGMENT_PREFIX: &str = "#d=";

/// Builds and reads share links.
pub struct ShareLink;

impl ShareLink {
    /// Builds a link to `base_url` carrying the decision in its fragment.
    /// An existing fragment on `base_url` is replaced.
    pub fn build(base_url: &str, decision: &Decision) -> Result<String, SnapshotError> {
        let base = base_url.split('#').next().unwrap_or(base_url);
        let payload = SnapshotCodec::encode(decision)?;
        Ok(format!("{}{}{}", base, FRAGMENT_PREFIX, payload))
    }

    /// Returns the payload of a full link or a bare `#d=` fragment.
    pub fn payload(link: &str) -> Option<&str> {
        let start = link.find(FRAGMENT_PREFIX)? + FRAGMENT_PREFIX.len();
        let payload = link[start..].trim();
        (!payload.is_empty()).then_some(payload)
    }

    /// Decodes the decision carried by a link.
    pub fn open(link: &str) -> Result<Decision, SnapshotError> {
        let payload = Self::payload(link).ok_or(SnapshotError::MissingPayload)?;
        SnapshotCodec::decode(payload)
    }
}
