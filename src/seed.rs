//! Built-in sample data a fresh console starts from.

use crate::core::{Category, Device, DeviceStatus, LogEntry, Outcome, Policy, Risk};

pub fn devices() -> Vec<Device> {
    vec![
        Device::new("1", "Zhang Wei", "IPHONE 15", DeviceStatus::Connected, "now"),
        Device::new("2", "Wang Fang", "HUAWEI P60", DeviceStatus::Connected, "now"),
        Device::new("3", "Li Qiang", "XIAOMI 14", DeviceStatus::Inactive, "10 min ago"),
        Device::new("4", "Zhao Min", "IPAD AIR", DeviceStatus::Connected, "now"),
    ]
}

/// Six policies, four of them active.
pub fn policies() -> Vec<Policy> {
    vec![
        Policy::new("p1", "Block game sites", "Stop traffic to known game portals", true),
        Policy::new("p2", "Block short video", "Stop short-video apps during class", true),
        Policy::new("p3", "Safe search", "Force safe search on search engines", true),
        Policy::new("p4", "Study-hours lock", "Allow only learning apps in lessons", true),
        Policy::new("p5", "Block social media", "Stop chat and social feeds", false),
        Policy::new("p6", "Night curfew", "Cut all traffic after 22:00", false),
    ]
}

/// Newest-first.
pub fn logs() -> Vec<LogEntry> {
    vec![LogEntry {
        id: 1,
        subject: "Li Qiang".to_string(),
        action: "attempted to open a game site".to_string(),
        category: Category::Game,
        time: "08:45:12".to_string(),
        risk: Risk::High,
        outcome: Outcome::Blocked,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_policies_have_four_active() {
        let active = policies().iter().filter(|p| p.active).count();
        assert_eq!(policies().len(), 6);
        assert_eq!(active, 4);
    }

    #[test]
    fn seed_devices_mix_statuses() {
        let devices = devices();
        assert_eq!(devices.len(), 4);
        assert!(devices.iter().any(|d| d.status == DeviceStatus::Inactive));
    }
}
