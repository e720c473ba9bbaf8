use std::sync::Arc;

use service::catalog::{
    CommissionTypeService, GuaranteeService, InsuranceService, LoanOfferService, LoanTypeService,
};

/// Shared handles to the five entity services.
#[derive(Clone)]
pub struct ServerState {
    pub guarantees: Arc<GuaranteeService>,
    pub insurances: Arc<InsuranceService>,
    pub commission_types: Arc<CommissionTypeService>,
    pub loan_types: Arc<LoanTypeService>,
    pub loan_offers: Arc<LoanOfferService>,
}
