//! Console configuration: display labels and synthetic-device pools.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse console config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Labels and pools used when the store derives log entries and devices.
///
/// Missing fields fall back to their defaults when loaded from JSON.
///
/// # Example
///
/// ```rust
/// use classdesk::config::ConsoleConfig;
///
/// let config = ConsoleConfig::from_json(r#"{ "class_label": "Class 3B" }"#).unwrap();
/// assert_eq!(config.class_label, "Class 3B");
/// assert_eq!(config.admin_label, "Administrator");
/// assert!(!config.name_pool.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Subject of aggregate log entries
    pub class_label: String,
    /// Subject of policy log entries
    pub admin_label: String,
    /// Names drawn for simulated devices
    pub name_pool: Vec<String>,
    /// Models drawn for simulated devices
    pub model_pool: Vec<String>,
    /// Last-active text for a device seen just now
    pub last_active_now: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            class_label: "Whole class".to_string(),
            admin_label: "Administrator".to_string(),
            name_pool: ["Liu Yang", "Chen Jing", "Yang Lei", "Huang Li", "Zhou Tao"]
                .into_iter()
                .map(String::from)
                .collect(),
            model_pool: ["IPHONE 14", "HUAWEI MATE 60", "XIAOMI 13", "OPPO FIND X7"]
                .into_iter()
                .map(String::from)
                .collect(),
            last_active_now: "now".to_string(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
