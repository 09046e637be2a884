//! Read-only snapshots of the store for the presentation layer.
//!
//! A snapshot is a plain serializable copy of all three collections plus the
//! dashboard counters derived from them. The view re-reads one after every
//! mutation and renders from it.

use crate::core::{ActivityLog, Device, DeviceStatus, LogEntry, Outcome, Policy};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Counters shown on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total: usize,
    pub connected: usize,
    pub disconnected: usize,
    pub inactive: usize,
    pub active_policies: usize,
    /// Log entries whose outcome was `blocked`
    pub blocked_events: usize,
}

impl DashboardSummary {
    pub fn collect(devices: &[Device], policies: &[Policy], logs: &ActivityLog) -> Self {
        let count = |status: DeviceStatus| devices.iter().filter(|d| d.status == status).count();
        Self {
            total: devices.len(),
            connected: count(DeviceStatus::Connected),
            disconnected: count(DeviceStatus::Disconnected),
            inactive: count(DeviceStatus::Inactive),
            active_policies: policies.iter().filter(|p| p.active).count(),
            blocked_events: logs.by_outcome(Outcome::Blocked).len(),
        }
    }
}

/// Serializable copy of the store at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Log entries appended since the store was built
    pub revision: u64,

    /// When the snapshot was taken
    pub taken_at: DateTime<FixedOffset>,

    pub devices: Vec<Device>,

    pub policies: Vec<Policy>,

    /// Log entries, newest-first
    pub logs: Vec<LogEntry>,

    pub summary: DashboardSummary,
}

impl Snapshot {
    pub fn new(
        revision: u64,
        taken_at: DateTime<FixedOffset>,
        devices: Vec<Device>,
        policies: Vec<Policy>,
        logs: Vec<LogEntry>,
        summary: DashboardSummary,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            revision,
            taken_at,
            devices,
            policies,
            logs,
            summary,
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Parse a snapshot, rejecting versions this build does not understand.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }
}
