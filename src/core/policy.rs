//! Content and access policies.

use serde::{Deserialize, Serialize};

/// A named content/access restriction rule with an on/off state.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub name: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub active: bool,
}

impl Policy {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            active,
        }
    }

    /// Flip the active flag, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }
}
