//! Student devices and their connectivity status.
//!
//! Status changes are pure functions on `DeviceStatus`; the store applies
//! them and records the matching log entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Connectivity status of a tracked device.
///
/// # Example
///
/// ```rust
/// use classdesk::core::DeviceStatus;
///
/// assert_eq!(DeviceStatus::Connected.toggled(), DeviceStatus::Disconnected);
/// assert_eq!(DeviceStatus::Disconnected.toggled(), DeviceStatus::Connected);
/// assert_eq!(DeviceStatus::Inactive.toggled(), DeviceStatus::Connected);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Connected,
    Disconnected,
    Inactive,
}

impl DeviceStatus {
    /// Get the status name as used in snapshots and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::Inactive => "inactive",
        }
    }

    /// Check if the device currently has network access.
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Binary flip used by a single-device toggle.
    ///
    /// `Connected` goes to `Disconnected`; every other status, including
    /// `Inactive`, goes to `Connected`.
    pub fn toggled(&self) -> Self {
        if self.is_connected() {
            Self::Disconnected
        } else {
            Self::Connected
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Status accepted by a bulk update across the whole collection.
///
/// `Inactive` is not a valid bulk target, so it is not representable here.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkStatus {
    Connected,
    Disconnected,
}

impl From<BulkStatus> for DeviceStatus {
    fn from(status: BulkStatus) -> Self {
        match status {
            BulkStatus::Connected => DeviceStatus::Connected,
            BulkStatus::Disconnected => DeviceStatus::Disconnected,
        }
    }
}

/// A tracked student-owned endpoint.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Stable identifier, unique within the store
    pub id: String,
    /// Student display name
    pub name: String,
    /// Hardware model label
    pub model: String,
    pub status: DeviceStatus,
    /// Human-readable last-activity text, e.g. "now" or "10 min ago"
    pub last_active: String,
}

impl Device {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        model: impl Into<String>,
        status: DeviceStatus,
        last_active: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            model: model.into(),
            status,
            last_active: last_active.into(),
        }
    }
}
