use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::commission_type::CommissionType;
use crate::errors::ValidationError;
use crate::insurance::Insurance;
use crate::loan_type::LoanType;
use crate::status::EntityStatus;
use crate::CatalogRecord;

/// Concrete offer of a loan type: rate, amount and term ranges, plus the
/// insurance and commission attached to it.
///
/// Minimum/maximum ordering is not validated; both bounds only have to be
/// positive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanOffer {
    pub id: String,
    pub loan_type_id: String,
    pub currency_id: String,
    pub name: String,
    pub description: String,
    pub calculation_base: String,
    pub interest_rate: Decimal,
    pub minimum_amount: Decimal,
    pub maximum_amount: Decimal,
    pub minimum_term_months: i32,
    pub maximum_term_months: i32,
    pub amortization_type: String,
    pub insurance_id: String,
    pub commission_type_id: String,
    pub modified_at: DateTime<Utc>,
    pub status: EntityStatus,
    pub version: i64,
}

impl CatalogRecord for LoanOffer {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> EntityStatus {
        self.status
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoanOfferInput {
    pub loan_type_id: String,
    pub currency_id: String,
    pub name: String,
    pub description: String,
    pub calculation_base: String,
    pub interest_rate: Decimal,
    pub minimum_amount: Decimal,
    pub maximum_amount: Decimal,
    pub minimum_term_months: i32,
    pub maximum_term_months: i32,
    pub amortization_type: String,
    pub insurance_id: String,
    pub commission_type_id: String,
}

impl LoanOfferInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.currency_id.trim().is_empty() {
            return Err(ValidationError::new("currency id is required"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name is required"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::new("description is required"));
        }
        if self.amortization_type.trim().is_empty() {
            return Err(ValidationError::new("amortization type is required"));
        }
        if self.interest_rate <= Decimal::ZERO {
            return Err(ValidationError::new(
                "interest rate must be greater than zero",
            ));
        }
        if self.minimum_amount <= Decimal::ZERO {
            return Err(ValidationError::new(
                "minimum amount must be greater than zero",
            ));
        }
        if self.maximum_amount <= Decimal::ZERO {
            return Err(ValidationError::new(
                "maximum amount must be greater than zero",
            ));
        }
        if self.minimum_term_months <= 0 {
            return Err(ValidationError::new(
                "minimum term in months must be greater than zero",
            ));
        }
        if self.maximum_term_months <= 0 {
            return Err(ValidationError::new(
                "maximum term in months must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Loan offer as served to callers. Each relation is embedded independently;
/// a `None` means that lookup came back not-found and the response degraded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanOfferResponse {
    #[serde(flatten)]
    pub loan_offer: LoanOffer,
    pub loan_type: Option<LoanType>,
    pub insurance: Option<Insurance>,
    pub commission_type: Option<CommissionType>,
}
