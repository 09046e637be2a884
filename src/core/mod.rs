//! Core console model types.
//!
//! This module contains the plain data of the console:
//! - Devices and their connectivity status
//! - Content policies
//! - The append-only activity log
//!
//! Nothing here reads the clock or a random source; callers pass those in.

mod device;
mod log;
mod policy;

pub use device::{BulkStatus, Device, DeviceStatus};
pub use log::{ActivityLog, Category, LogDraft, LogEntry, Outcome, Risk, TIME_FORMAT};
pub use policy::Policy;
