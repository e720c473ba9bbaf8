use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status carried by every record. Soft delete flips a record to
/// `Inactive`; there is no reactivation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "INACTIVE")]
    Inactive,
}

impl EntityStatus {
    pub fn is_active(self) -> bool {
        matches!(self, EntityStatus::Active)
    }
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityStatus::Active => write!(f, "ACTIVE"),
            EntityStatus::Inactive => write!(f, "INACTIVE"),
        }
    }
}
