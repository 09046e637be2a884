//! Seed violations.

use thiserror::Error;

/// Invariant broken by seed data handed to the store
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeedViolation {
    #[error("Duplicate device id '{id}'")]
    DuplicateDeviceId { id: String },

    #[error("Duplicate policy id '{id}'")]
    DuplicatePolicyId { id: String },

    #[error("Duplicate log entry id {id}")]
    DuplicateLogId { id: u64 },

    #[error("Log entry {id} is newer than the entry before it; logs must be newest-first")]
    LogsNotNewestFirst { id: u64 },

    #[error("Device '{id}' has a blank name")]
    BlankDeviceName { id: String },

    #[error("Policy '{id}' has a blank name")]
    BlankPolicyName { id: String },
}
