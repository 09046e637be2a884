//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur while exporting a snapshot for the view layer or
/// importing one it handed back
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The store's collections could not be rendered as JSON
    #[error("Snapshot export failed: {0}")]
    SerializationFailed(String),

    /// Text from the view layer is not a well-formed snapshot document
    #[error("Snapshot import failed: {0}")]
    DeserializationFailed(String),

    /// The document was written by a different snapshot format
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
