//! Build errors for the store builder.

use crate::validation::SeedViolation;
use thiserror::Error;

/// Errors that can occur when building a store.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Seed data is invalid ({} violation(s)): {}", .violations.len(), join(.violations))]
    InvalidSeed { violations: Vec<SeedViolation> },

    #[error("Name pool is empty. Provide at least one name in the config")]
    EmptyNamePool,

    #[error("Model pool is empty. Provide at least one model in the config")]
    EmptyModelPool,
}

fn join(violations: &[SeedViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
