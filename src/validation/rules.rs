//! Seed invariants checked with Validation.

use crate::core::{Device, LogEntry, Policy};
use crate::validation::violations::SeedViolation;
use std::collections::HashSet;
use std::hash::Hash;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of validating a seed.
pub type SeedValidation = Validation<(), NonEmptyVec<SeedViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> SeedViolation) -> SeedValidation {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Push one failing check for every id seen more than once.
fn check_unique<'a, K, F>(ids: impl Iterator<Item = &'a K>, checks: &mut Vec<SeedValidation>, f: F)
where
    K: Eq + Hash + Clone + 'a,
    F: Fn(K) -> SeedViolation,
{
    let mut seen = HashSet::new();
    for id in ids {
        checks.push(check(seen.insert(id), || f(id.clone())));
    }
}

/// Check identifier uniqueness, newest-first log order and non-blank names
/// across a seed, accumulating ALL violations.
pub fn validate_seed(devices: &[Device], policies: &[Policy], logs: &[LogEntry]) -> SeedValidation {
    let mut checks: Vec<SeedValidation> = Vec::new();

    check_unique(devices.iter().map(|d| &d.id), &mut checks, |id| {
        SeedViolation::DuplicateDeviceId { id }
    });
    check_unique(policies.iter().map(|p| &p.id), &mut checks, |id| {
        SeedViolation::DuplicatePolicyId { id }
    });
    check_unique(logs.iter().map(|l| &l.id), &mut checks, |id| {
        SeedViolation::DuplicateLogId { id }
    });

    // Equal neighbours are already reported as duplicates.
    for pair in logs.windows(2) {
        checks.push(check(pair[0].id >= pair[1].id, || {
            SeedViolation::LogsNotNewestFirst { id: pair[1].id }
        }));
    }

    for device in devices {
        checks.push(check(!device.name.trim().is_empty(), || {
            SeedViolation::BlankDeviceName {
                id: device.id.clone(),
            }
        }));
    }

    for policy in policies {
        checks.push(check(!policy.name.trim().is_empty(), || {
            SeedViolation::BlankPolicyName {
                id: policy.id.clone(),
            }
        }));
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeviceStatus;
    use crate::seed;

    fn device(id: &str, name: &str) -> Device {
        Device::new(id, name, "IPAD AIR", DeviceStatus::Connected, "now")
    }

    #[test]
    fn builtin_seed_is_valid() {
        let result = validate_seed(&seed::devices(), &seed::policies(), &seed::logs());
        assert!(result.is_success());
    }

    #[test]
    fn empty_seed_is_valid() {
        assert!(validate_seed(&[], &[], &[]).is_success());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let devices = vec![device("1", "Zhang Wei"), device("1", " ")];
        let policies = vec![
            Policy::new("p1", "Safe search", "", true),
            Policy::new("p1", "", "", false),
        ];

        let result = validate_seed(&devices, &policies, &[]);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 4);

                let has_dup_device = errors
                    .iter()
                    .any(|e| matches!(e, SeedViolation::DuplicateDeviceId { .. }));
                let has_dup_policy = errors
                    .iter()
                    .any(|e| matches!(e, SeedViolation::DuplicatePolicyId { .. }));
                let has_blank_device = errors
                    .iter()
                    .any(|e| matches!(e, SeedViolation::BlankDeviceName { .. }));
                let has_blank_policy = errors
                    .iter()
                    .any(|e| matches!(e, SeedViolation::BlankPolicyName { .. }));

                assert!(has_dup_device);
                assert!(has_dup_policy);
                assert!(has_blank_device);
                assert!(has_blank_policy);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn duplicate_log_ids_are_reported() {
        let mut logs = seed::logs();
        logs.push(logs[0].clone());

        let result = validate_seed(&[], &[], &logs);
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors
                .iter()
                .any(|e| *e == SeedViolation::DuplicateLogId { id: 1 }));
        }
    }

    #[test]
    fn oldest_first_logs_are_reported() {
        let mut older = seed::logs().remove(0);
        let mut newer = older.clone();
        older.id = 1;
        newer.id = 5;

        let result = validate_seed(&[], &[], &[older, newer]);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors
                    .iter()
                    .any(|e| *e == SeedViolation::LogsNotNewestFirst { id: 5 }));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn each_repeat_is_reported() {
        let devices = vec![device("7", "A"), device("7", "B"), device("7", "C")];

        let result = validate_seed(&devices, &[], &[]);
        if let Validation::Failure(errors) = result {
            assert_eq!(errors.len(), 2);
        } else {
            panic!("Expected failures, got success");
        }
    }
}
