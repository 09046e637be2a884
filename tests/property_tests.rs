//! Property-based tests for the console store.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated device collections and operation sequences.

use chrono::{DateTime, FixedOffset};
use classdesk::env::{ManualClock, SeededRandom};
use classdesk::{BulkStatus, Device, DeviceStatus, StateStore, StoreBuilder};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    ToggleDevice(usize),
    SetAll(BulkStatus),
    TogglePolicy(usize),
    AddDevice,
}

prop_compose! {
    fn arbitrary_status()(variant in 0..3u8) -> DeviceStatus {
        match variant {
            0 => DeviceStatus::Connected,
            1 => DeviceStatus::Disconnected,
            _ => DeviceStatus::Inactive,
        }
    }
}

prop_compose! {
    fn arbitrary_devices()(statuses in prop::collection::vec(arbitrary_status(), 1..8)) -> Vec<Device> {
        statuses
            .into_iter()
            .enumerate()
            .map(|(i, status)| Device::new((i + 1).to_string(), format!("Student {i}"), "IPAD AIR", status, "now"))
            .collect()
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..10usize).prop_map(Op::ToggleDevice),
        prop_oneof![Just(BulkStatus::Connected), Just(BulkStatus::Disconnected)].prop_map(Op::SetAll),
        (0..6usize).prop_map(Op::TogglePolicy),
        Just(Op::AddDevice),
    ]
}

fn start() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2026-10-19T09:30:00+08:00").unwrap()
}

fn store_with(devices: Vec<Device>, seed: u64) -> StateStore<ManualClock, SeededRandom> {
    StoreBuilder::new()
        .devices(devices)
        .clock(ManualClock::new(start()))
        .random(SeededRandom::new(seed))
        .build()
        .unwrap()
}

fn apply(store: &mut StateStore<ManualClock, SeededRandom>, op: &Op) {
    match op {
        Op::ToggleDevice(i) => {
            let id = store.devices()[i % store.devices().len()].id.clone();
            store.toggle_device(&id).unwrap();
        }
        Op::SetAll(status) => store.set_all_status(*status),
        Op::TogglePolicy(i) => {
            let id = store.policies()[i % store.policies().len()].id.clone();
            store.toggle_policy(&id).unwrap();
        }
        Op::AddDevice => {
            store.add_simulated_device();
        }
    }
}

proptest! {
    #[test]
    fn toggle_changes_only_target(devices in arbitrary_devices(), pick in 0..8usize) {
        let mut store = store_with(devices.clone(), 1);
        let target = &devices[pick % devices.len()];

        let status = store.toggle_device(&target.id).unwrap();

        prop_assert_eq!(status, target.status.toggled());
        for (old, new) in devices.iter().zip(store.devices()) {
            if old.id == target.id {
                prop_assert_eq!(new.status, status);
            } else {
                prop_assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn double_toggle_ends_disconnected_or_restored(devices in arbitrary_devices(), pick in 0..8usize) {
        let mut store = store_with(devices.clone(), 1);
        let target = &devices[pick % devices.len()];

        store.toggle_device(&target.id).unwrap();
        let status = store.toggle_device(&target.id).unwrap();

        let expected = match target.status {
            DeviceStatus::Connected => DeviceStatus::Connected,
            DeviceStatus::Disconnected => DeviceStatus::Disconnected,
            DeviceStatus::Inactive => DeviceStatus::Disconnected,
        };
        prop_assert_eq!(status, expected);
    }

    #[test]
    fn bulk_connect_then_disconnect(devices in arbitrary_devices()) {
        let mut store = store_with(devices, 1);

        store.set_all_status(BulkStatus::Connected);
        store.set_all_status(BulkStatus::Disconnected);

        prop_assert!(store.devices().iter().all(|d| d.status == DeviceStatus::Disconnected));
    }

    #[test]
    fn every_operation_logs_once_at_front(
        devices in arbitrary_devices(),
        ops in prop::collection::vec(arbitrary_op(), 1..20),
    ) {
        let mut store = store_with(devices, 7);

        for op in &ops {
            let before = store.logs().len();
            let previous_head = store.logs().latest().map(|e| e.id);

            apply(&mut store, op);

            prop_assert_eq!(store.logs().len(), before + 1);
            let head = store.logs().latest().unwrap().id;
            if let Some(previous) = previous_head {
                prop_assert!(head > previous);
            }
        }

        let ids: Vec<u64> = store.logs().iter().map(|e| e.id).collect();
        prop_assert!(ids.windows(2).all(|w| w[0] > w[1]));
        prop_assert_eq!(store.revision(), ops.len() as u64);
    }

    #[test]
    fn simulated_devices_get_fresh_ids(devices in arbitrary_devices(), count in 1..10usize, seed in any::<u64>()) {
        let mut store = store_with(devices, seed);

        for _ in 0..count {
            let before: Vec<String> = store.devices().iter().map(|d| d.id.clone()).collect();
            let device = store.add_simulated_device();

            prop_assert_eq!(store.devices().len(), before.len() + 1);
            prop_assert!(!before.contains(&device.id));
            prop_assert!(store.config().name_pool.contains(&device.name));
            prop_assert!(store.config().model_pool.contains(&device.model));
        }
    }

    #[test]
    fn policy_toggle_tracks_active_count(pick in 0..6usize) {
        let mut store = store_with(classdesk::seed::devices(), 1);
        let id = store.policies()[pick].id.clone();
        let was_active = store.policies()[pick].active;
        let before = store.active_policy_count();

        store.toggle_policy(&id).unwrap();

        let expected = if was_active { before - 1 } else { before + 1 };
        prop_assert_eq!(store.active_policy_count(), expected);
        prop_assert_eq!(store.summary().active_policies, expected);
    }

    #[test]
    fn snapshot_matches_store(ops in prop::collection::vec(arbitrary_op(), 0..10)) {
        let mut store = store_with(classdesk::seed::devices(), 3);
        for op in &ops {
            apply(&mut store, op);
        }

        let snapshot = store.snapshot();

        prop_assert_eq!(snapshot.devices.as_slice(), store.devices());
        prop_assert_eq!(snapshot.logs.len(), store.logs().len());
        prop_assert_eq!(snapshot.summary.total, store.devices().len());
    }
}
