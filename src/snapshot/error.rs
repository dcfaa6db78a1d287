//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
