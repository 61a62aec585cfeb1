use serde::{Deserialize, Serialize};

use super::normalize_name;

/// A species the user saved to their local roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
}

impl RosterEntry {
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize_name(name),
        }
    }
}
