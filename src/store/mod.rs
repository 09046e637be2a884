//! The console state store.
//!
//! [`StateStore`] owns the device, policy and log collections. Every
//! mutation goes through one of its operations, and every successful
//! operation appends exactly one derived entry to the front of the log.
//! The presentation layer re-reads the collections (or a [`Snapshot`])
//! after each call.

mod error;

pub use error::StoreError;

use crate::config::ConsoleConfig;
use crate::core::{ActivityLog, BulkStatus, Device, DeviceStatus, LogDraft, LogEntry, Policy};
use crate::env::{Clock, RandomSource, SystemClock, ThreadRandom};
use crate::seed;
use crate::snapshot::{DashboardSummary, Snapshot};

pub const ACTION_NETWORK_RESTORED: &str = "network restored";
pub const ACTION_NETWORK_CUT: &str = "manual network cut";
pub const ACTION_ALL_CONNECTED: &str = "all devices connected";
pub const ACTION_ALL_DISCONNECTED: &str = "all devices disconnected";
pub const ACTION_DEVICE_PAIRED: &str = "new device paired via pairing code";

/// Owned state of one console session.
///
/// # Example
///
/// ```rust
/// use classdesk::core::{BulkStatus, DeviceStatus};
/// use classdesk::store::StateStore;
///
/// let mut store = StateStore::with_seed();
/// let logged = store.logs().len();
///
/// store.toggle_device("1").unwrap();
/// assert_eq!(store.device("1").unwrap().status, DeviceStatus::Disconnected);
///
/// store.set_all_status(BulkStatus::Connected);
/// assert!(store.devices().iter().all(|d| d.status.is_connected()));
///
/// assert_eq!(store.logs().len(), logged + 2);
/// ```
pub struct StateStore<C: Clock = SystemClock, R: RandomSource = ThreadRandom> {
    devices: Vec<Device>,
    policies: Vec<Policy>,
    logs: ActivityLog,
    config: ConsoleConfig,
    clock: C,
    random: R,
    revision: u64,
    last_device_id: u64,
}

impl StateStore {
    /// Store over the built-in sample data, wall clock and thread RNG.
    pub fn with_seed() -> Self {
        Self::from_parts(
            seed::devices(),
            seed::policies(),
            ActivityLog::from_entries(seed::logs()),
            ConsoleConfig::default(),
            SystemClock,
            ThreadRandom,
        )
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::with_seed()
    }
}

impl<C: Clock, R: RandomSource> StateStore<C, R> {
    /// Assemble a store from already-validated parts.
    pub(crate) fn from_parts(
        devices: Vec<Device>,
        policies: Vec<Policy>,
        logs: ActivityLog,
        config: ConsoleConfig,
        clock: C,
        random: R,
    ) -> Self {
        tracing::info!(
            devices = devices.len(),
            policies = policies.len(),
            logs = logs.len(),
            "console store ready"
        );
        Self {
            devices,
            policies,
            logs,
            config,
            clock,
            random,
            revision: 0,
            last_device_id: 0,
        }
    }

    /// Flip one device between connected and disconnected.
    ///
    /// A `Connected` device is cut; any other status, `Inactive` included,
    /// is brought back to `Connected`. The device's last-active text is left
    /// as it was. Returns the new status.
    pub fn toggle_device(&mut self, id: &str) -> Result<DeviceStatus, StoreError> {
        let Some(device) = self.devices.iter_mut().find(|d| d.id == id) else {
            tracing::warn!(device_id = id, "toggle requested for unknown device");
            return Err(StoreError::UnknownDevice { id: id.to_string() });
        };

        device.status = device.status.toggled();
        let status = device.status;
        let action = if status.is_connected() {
            ACTION_NETWORK_RESTORED
        } else {
            ACTION_NETWORK_CUT
        };
        let draft = LogDraft::admin_action(device.name.clone(), action);

        tracing::debug!(device_id = id, %status, "device toggled");
        self.add_log(draft);
        Ok(status)
    }

    /// Put every device into the same status and log it once for the class.
    pub fn set_all_status(&mut self, status: BulkStatus) {
        let target = DeviceStatus::from(status);
        for device in &mut self.devices {
            device.status = target;
        }

        let action = match status {
            BulkStatus::Connected => ACTION_ALL_CONNECTED,
            BulkStatus::Disconnected => ACTION_ALL_DISCONNECTED,
        };
        let draft = LogDraft::admin_action(self.config.class_label.clone(), action);

        tracing::info!(status = %target, devices = self.devices.len(), "bulk status applied");
        self.add_log(draft);
    }

    /// Flip a policy's active flag. Returns the new flag.
    pub fn toggle_policy(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(policy) = self.policies.iter_mut().find(|p| p.id == id) else {
            tracing::warn!(policy_id = id, "toggle requested for unknown policy");
            return Err(StoreError::UnknownPolicy { id: id.to_string() });
        };

        let active = policy.toggle();
        let action = if active {
            format!("policy enabled: {}", policy.name)
        } else {
            format!("policy disabled: {}", policy.name)
        };
        let draft = LogDraft::admin_action(self.config.admin_label.clone(), action);

        tracing::debug!(policy_id = id, active, "policy toggled");
        self.add_log(draft);
        Ok(active)
    }

    /// Pair a synthetic device drawn from the configured pools.
    ///
    /// The new id is the clock's millisecond timestamp, bumped until it is
    /// above every id this store has issued and unused in the collection.
    pub fn add_simulated_device(&mut self) -> Device {
        let name = self.draw(Pool::Name);
        let model = self.draw(Pool::Model);
        let id = self.fresh_device_id();

        let device = Device::new(
            id,
            name,
            model,
            DeviceStatus::Connected,
            self.config.last_active_now.clone(),
        );
        self.devices.push(device.clone());

        tracing::debug!(device_id = %device.id, name = %device.name, "simulated device paired");
        self.add_log(LogDraft::admin_action(
            device.name.clone(),
            ACTION_DEVICE_PAIRED,
        ));
        device
    }

    /// Stamp a draft with a fresh id and the current time, then prepend it.
    pub fn add_log(&mut self, draft: LogDraft) -> &LogEntry {
        let now = self.clock.now();
        self.revision += 1;
        self.logs.record(draft, &now)
    }

    fn draw(&mut self, pool: Pool) -> String {
        let pool = match pool {
            Pool::Name => &self.config.name_pool,
            Pool::Model => &self.config.model_pool,
        };
        if pool.is_empty() {
            return String::new();
        }
        let index = self.random.pick(pool.len());
        pool.get(index).cloned().unwrap_or_default()
    }

    fn fresh_device_id(&mut self) -> String {
        let millis = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or(0);
        let mut candidate = millis.max(self.last_device_id.saturating_add(1));
        while self.devices.iter().any(|d| d.id == candidate.to_string()) {
            candidate += 1;
        }
        self.last_device_id = candidate;
        candidate.to_string()
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    /// Activity log, newest-first.
    pub fn logs(&self) -> &ActivityLog {
        &self.logs
    }

    pub fn device(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    pub fn policy(&self, id: &str) -> Option<&Policy> {
        self.policies.iter().find(|p| p.id == id)
    }

    pub fn active_policy_count(&self) -> usize {
        self.policies.iter().filter(|p| p.active).count()
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Number of log entries appended since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::collect(&self.devices, &self.policies, &self.logs)
    }

    /// Serializable copy of the current state for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.revision,
            self.clock.now(),
            self.devices.clone(),
            self.policies.clone(),
            self.logs.entries(),
            self.summary(),
        )
    }
}

#[derive(Clone, Copy)]
enum Pool {
    Name,
    Model,
}
