//! Classdesk: state-management core for a classroom device console
//!
//! Classdesk owns the three collections a classroom console shows (student
//! devices, content policies and the activity log) and funnels every change
//! through a small set of operations on [`StateStore`]. Each successful
//! operation appends exactly one derived entry to the front of the log.
//!
//! # Core Concepts
//!
//! - **Devices**: connectivity status with a binary toggle rule
//! - **Policies**: named on/off restriction rules
//! - **Activity log**: append-only, newest-first record of actions
//! - **Environment**: injectable clock and random source for deterministic tests
//!
//! # Example
//!
//! ```rust
//! use chrono::DateTime;
//! use classdesk::env::{ManualClock, ScriptedRandom};
//! use classdesk::{BulkStatus, DeviceStatus, StoreBuilder};
//!
//! let start = DateTime::parse_from_rfc3339("2026-10-19T09:30:00+08:00").unwrap();
//! let mut store = StoreBuilder::new()
//!     .clock(ManualClock::new(start))
//!     .random(ScriptedRandom::new(vec![0]))
//!     .build()
//!     .unwrap();
//!
//! store.toggle_device("1").unwrap();
//! assert_eq!(store.device("1").unwrap().status, DeviceStatus::Disconnected);
//! assert_eq!(store.logs().latest().unwrap().action, "manual network cut");
//!
//! store.set_all_status(BulkStatus::Connected);
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.summary.connected, snapshot.summary.total);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod env;
pub mod seed;
pub mod snapshot;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, StoreBuilder};
pub use config::ConsoleConfig;
pub use core::{BulkStatus, Device, DeviceStatus, LogDraft, LogEntry, Policy};
pub use snapshot::Snapshot;
pub use store::{StateStore, StoreError};
