//! Snapshot codec errors.

use thiserror::Error;

/// Why a payload could not be turned back into a decision.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot payload is empty")]
    Empty,

    #[error("Link carries no '#d=' payload")]
    MissingPayload,

    #[error("Snapshot payload is not base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Snapshot payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Snapshot payload is not JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot root must be a JSON object")]
    NotAnObject,
}
