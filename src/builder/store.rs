//! Builder for constructing state stores.

use crate::builder::error::BuildError;
use crate::config::ConsoleConfig;
use crate::core::{ActivityLog, Device, LogEntry, Policy};
use crate::env::{Clock, RandomSource, SystemClock, ThreadRandom};
use crate::seed;
use crate::store::StateStore;
use crate::validation::validate_seed;
use stillwater::validation::Validation;

/// Builder for constructing state stores with a fluent API.
///
/// # Example
///
/// ```rust
/// use chrono::DateTime;
/// use classdesk::builder::StoreBuilder;
/// use classdesk::env::{ManualClock, ScriptedRandom};
///
/// let start = DateTime::parse_from_rfc3339("2026-10-19T09:30:00+08:00").unwrap();
/// let mut store = StoreBuilder::new()
///     .clock(ManualClock::new(start))
///     .random(ScriptedRandom::new(vec![0, 0]))
///     .build()
///     .unwrap();
///
/// let device = store.add_simulated_device();
/// assert_eq!(device.name, "Liu Yang");
/// assert_eq!(device.model, "IPHONE 14");
/// ```
pub struct StoreBuilder<C: Clock = SystemClock, R: RandomSource = ThreadRandom> {
    devices: Vec<Device>,
    policies: Vec<Policy>,
    logs: Vec<LogEntry>,
    config: ConsoleConfig,
    clock: C,
    random: R,
}

impl StoreBuilder {
    /// Create a builder over the built-in sample data.
    pub fn new() -> Self {
        Self {
            devices: seed::devices(),
            policies: seed::policies(),
            logs: seed::logs(),
            config: ConsoleConfig::default(),
            clock: SystemClock,
            random: ThreadRandom,
        }
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, R: RandomSource> StoreBuilder<C, R> {
    /// Replace the seed devices.
    pub fn devices(mut self, devices: Vec<Device>) -> Self {
        self.devices = devices;
        self
    }

    /// Replace the seed policies.
    pub fn policies(mut self, policies: Vec<Policy>) -> Self {
        self.policies = policies;
        self
    }

    /// Replace the seed log entries, given newest-first.
    pub fn logs(mut self, logs: Vec<LogEntry>) -> Self {
        self.logs = logs;
        self
    }

    pub fn config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a different time source.
    pub fn clock<C2: Clock>(self, clock: C2) -> StoreBuilder<C2, R> {
        StoreBuilder {
            devices: self.devices,
            policies: self.policies,
            logs: self.logs,
            config: self.config,
            clock,
            random: self.random,
        }
    }

    /// Use a different random source.
    pub fn random<R2: RandomSource>(self, random: R2) -> StoreBuilder<C, R2> {
        StoreBuilder {
            devices: self.devices,
            policies: self.policies,
            logs: self.logs,
            config: self.config,
            clock: self.clock,
            random,
        }
    }

    /// Build the store.
    /// Returns an error listing every seed violation, or if a pool is empty.
    pub fn build(self) -> Result<StateStore<C, R>, BuildError> {
        if self.config.name_pool.is_empty() {
            return Err(BuildError::EmptyNamePool);
        }
        if self.config.model_pool.is_empty() {
            return Err(BuildError::EmptyModelPool);
        }

        if let Validation::Failure(errors) =
            validate_seed(&self.devices, &self.policies, &self.logs)
        {
            let violations: Vec<_> = errors.iter().cloned().collect();
            tracing::warn!(count = violations.len(), "rejected invalid seed");
            return Err(BuildError::InvalidSeed { violations });
        }

        Ok(StateStore::from_parts(
            self.devices,
            self.policies,
            ActivityLog::from_entries(self.logs),
            self.config,
            self.clock,
            self.random,
        ))
    }
}
