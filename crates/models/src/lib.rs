//! Entity records for the loan-product catalog.
//! - Plain serde structs with explicit field-by-field marshalling, no runtime reflection.
//! - Input payloads carry only caller-suppliable fields.
//! - Response shapes embed related records as explicit `Option` fields.

pub mod commission_type;
pub mod errors;
pub mod guarantee;
pub mod insurance;
pub mod loan_offer;
pub mod loan_type;
pub mod status;
pub mod validation;

pub use commission_type::{CommissionType, CommissionTypeInput};
pub use guarantee::{Guarantee, GuaranteeInput};
pub use insurance::{Insurance, InsuranceInput};
pub use loan_offer::{LoanOffer, LoanOfferInput, LoanOfferResponse};
pub use loan_type::{LoanType, LoanTypeInput, LoanTypeResponse};
pub use status::EntityStatus;

/// Store-visible envelope shared by every catalog record.
pub trait CatalogRecord {
    fn id(&self) -> &str;
    fn status(&self) -> EntityStatus;
}
