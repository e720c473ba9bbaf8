//! Response assembly with graceful degradation.
//!
//! A relation is embedded when its point lookup succeeds and omitted when the
//! lookup comes back not-found; a dangling reference must not break reading
//! the owning record. Inactive relations still embed, since point reads
//! ignore status. Anything other than a not-found propagates.

use tracing::warn;

use models::{LoanOffer, LoanOfferResponse, LoanType, LoanTypeResponse};

use crate::catalog::{CommissionTypeService, GuaranteeService, InsuranceService, LoanTypeService};
use crate::errors::ServiceError;

pub async fn compose_loan_type(
    guarantees: &GuaranteeService,
    loan_type: LoanType,
) -> Result<LoanTypeResponse, ServiceError> {
    let guarantee = match guarantees.find_by_id(&loan_type.guarantee_id).await {
        Ok(guarantee) => Some(guarantee),
        Err(ServiceError::NotFound(_)) => {
            warn!(
                loan_type_id = %loan_type.id,
                guarantee_id = %loan_type.guarantee_id,
                "guarantee not found, serving loan type without it"
            );
            None
        }
        Err(e) => return Err(e),
    };
    Ok(LoanTypeResponse { loan_type, guarantee })
}

pub async fn compose_loan_offer(
    loan_types: &LoanTypeService,
    insurances: &InsuranceService,
    commission_types: &CommissionTypeService,
    loan_offer: LoanOffer,
) -> Result<LoanOfferResponse, ServiceError> {
    let loan_type = match loan_types.find_by_id(&loan_offer.loan_type_id).await {
        Ok(loan_type) => Some(loan_type),
        Err(ServiceError::NotFound(_)) => {
            warn!(
                loan_offer_id = %loan_offer.id,
                loan_type_id = %loan_offer.loan_type_id,
                "loan type not found, serving loan offer without it"
            );
            None
        }
        Err(e) => return Err(e),
    };
    let insurance = match insurances.find_by_id(&loan_offer.insurance_id).await {
        Ok(insurance) => Some(insurance),
        Err(ServiceError::NotFound(_)) => {
            warn!(
                loan_offer_id = %loan_offer.id,
                insurance_id = %loan_offer.insurance_id,
                "insurance not found, serving loan offer without it"
            );
            None
        }
        Err(e) => return Err(e),
    };
    let commission_type = match commission_types
        .find_by_id(&loan_offer.commission_type_id)
        .await
    {
        Ok(commission) => Some(commission),
        Err(ServiceError::NotFound(_)) => {
            warn!(
                loan_offer_id = %loan_offer.id,
                commission_type_id = %loan_offer.commission_type_id,
                "commission type not found, serving loan offer without it"
            );
            None
        }
        Err(e) => return Err(e),
    };

    Ok(LoanOfferResponse { loan_offer, loan_type, insurance, commission_type })
}
