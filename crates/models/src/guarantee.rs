use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::status::EntityStatus;
use crate::CatalogRecord;

/// Collateral backing a loan type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guarantee {
    pub id: String,
    pub guarantee_type: String,
    pub description: String,
    pub value: Decimal,
    pub status: EntityStatus,
    pub version: i64,
}

impl CatalogRecord for Guarantee {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> EntityStatus {
        self.status
    }
}

/// Caller-supplied fields for creating a guarantee. Id, status and version
/// are always assigned by the service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuaranteeInput {
    pub guarantee_type: String,
    pub description: String,
    pub value: Decimal,
}

impl GuaranteeInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::new("description is required"));
        }
        if self.value <= Decimal::ZERO {
            return Err(ValidationError::new("value must be greater than zero"));
        }
        Ok(())
    }
}
