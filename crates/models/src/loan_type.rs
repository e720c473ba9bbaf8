use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::guarantee::Guarantee;
use crate::status::EntityStatus;
use crate::CatalogRecord;

/// Loan product definition. References an active guarantee; the amortization
/// scheme is fixed at creation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanType {
    pub id: String,
    pub currency_id: String,
    pub name: String,
    pub description: String,
    pub requirements: String,
    pub client_type: String,
    pub amortization_scheme: String,
    pub guarantee_id: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub status: EntityStatus,
    pub version: i64,
}

impl CatalogRecord for LoanType {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> EntityStatus {
        self.status
    }
}

/// Mutable fields accepted on create and update. Id, status, version and the
/// creation timestamp never come from the caller; the amortization scheme is
/// forced on create.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoanTypeInput {
    pub currency_id: String,
    pub name: String,
    pub description: String,
    pub requirements: String,
    pub client_type: String,
    pub guarantee_id: String,
}

impl LoanTypeInput {
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
        if self.requirements.trim().is_empty() {
            return Err(ValidationError::new("requirements are required"));
        }
        Ok(())
    }
}

/// Loan type as served to callers, with the referenced guarantee embedded
/// when its lookup succeeded. `guarantee: None` is the degraded form for a
/// dangling reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanTypeResponse {
    #[serde(flatten)]
    pub loan_type: LoanType,
    pub guarantee: Option<Guarantee>,
}
