use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::status::EntityStatus;
use crate::CatalogRecord;

/// Insurance policy attached to loan offers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Insurance {
    pub id: String,
    pub insurance_type: String,
    pub company: String,
    pub insured_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: EntityStatus,
    pub version: i64,
}

impl CatalogRecord for Insurance {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> EntityStatus {
        self.status
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InsuranceInput {
    pub insurance_type: String,
    pub company: String,
    pub insured_amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl InsuranceInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.company.trim().is_empty() {
            return Err(ValidationError::new("company is required"));
        }
        if self.insured_amount <= Decimal::ZERO {
            return Err(ValidationError::new(
                "insured amount must be greater than zero",
            ));
        }
        Ok(())
    }
}
