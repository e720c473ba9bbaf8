use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::status::EntityStatus;
use crate::CatalogRecord;

/// Fee definition referenced by loan offers. `calculation_method` decides
/// whether `amount` is a percentage or a fixed charge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommissionType {
    pub id: String,
    pub category: String,
    pub name: String,
    pub description: String,
    pub calculation_method: String,
    pub amount: Decimal,
    pub status: EntityStatus,
    pub version: i64,
}

impl CatalogRecord for CommissionType {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> EntityStatus {
        self.status
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommissionTypeInput {
    pub category: String,
    pub name: String,
    pub description: String,
    pub calculation_method: String,
    pub amount: Decimal,
}

impl CommissionTypeInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name is required"));
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::new("amount must be greater than zero"));
        }
        Ok(())
    }
}
