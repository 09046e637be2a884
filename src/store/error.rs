//! Store errors.

use thiserror::Error;

/// Non-fatal conditions reported by store operations.
///
/// An operation that returns one of these has left the store untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("No device with id '{id}'")]
    UnknownDevice { id: String },

    #[error("No policy with id '{id}'")]
    UnknownPolicy { id: String },
}
