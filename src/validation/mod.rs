//! Seed validation that reports every violation at once.
//!
//! Seed data is checked with Stillwater's `Validation` type, so a caller
//! handing the store a broken seed learns about all duplicate ids and blank
//! names in a single pass rather than one per attempt.
//!
//! # Example
//!
//! ```rust
//! use classdesk::core::{Device, DeviceStatus};
//! use classdesk::validation::validate_seed;
//!
//! let devices = vec![
//!     Device::new("1", "Zhang Wei", "IPHONE 15", DeviceStatus::Connected, "now"),
//!     Device::new("1", "", "IPAD AIR", DeviceStatus::Connected, "now"),
//! ];
//!
//! let result = validate_seed(&devices, &[], &[]);
//! assert!(result.is_failure());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{validate_seed, SeedValidation};
pub use violations::SeedViolation;
