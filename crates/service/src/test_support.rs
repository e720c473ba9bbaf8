//! Shared fixtures for service-layer tests: a fully wired catalog over
//! throwaway temp-file collections, plus valid baseline inputs.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use models::{
    CommissionType, CommissionTypeInput, Guarantee, GuaranteeInput, Insurance, InsuranceInput,
    LoanOffer, LoanOfferInput, LoanType, LoanTypeInput,
};

use crate::catalog::{
    CommissionTypeService, GuaranteeService, InsuranceService, LoanOfferService, LoanTypeService,
};
use crate::storage::JsonCollection;

pub struct TestCatalog {
    pub guarantees: Arc<GuaranteeService>,
    pub insurances: Arc<InsuranceService>,
    pub commission_types: Arc<CommissionTypeService>,
    pub loan_types: Arc<LoanTypeService>,
    pub loan_offers: Arc<LoanOfferService>,
}

fn temp_file(prefix: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("{prefix}_{}.json", Uuid::new_v4()))
}

/// Wire the full service graph over temp-file collections.
pub async fn catalog() -> TestCatalog {
    let guarantees = GuaranteeService::new(
        JsonCollection::<Guarantee>::open(temp_file("catalog_guarantees"))
            .await
            .unwrap(),
    );
    let insurances = InsuranceService::new(
        JsonCollection::<Insurance>::open(temp_file("catalog_insurances"))
            .await
            .unwrap(),
    );
    let commission_types = CommissionTypeService::new(
        JsonCollection::<CommissionType>::open(temp_file("catalog_commission_types"))
            .await
            .unwrap(),
    );
    let loan_types = LoanTypeService::new(
        JsonCollection::<LoanType>::open(temp_file("catalog_loan_types"))
            .await
            .unwrap(),
        Arc::clone(&guarantees),
    );
    let loan_offers = LoanOfferService::new(
        JsonCollection::<LoanOffer>::open(temp_file("catalog_loan_offers"))
            .await
            .unwrap(),
        Arc::clone(&loan_types),
        Arc::clone(&insurances),
        Arc::clone(&commission_types),
    );

    TestCatalog { guarantees, insurances, commission_types, loan_types, loan_offers }
}

pub fn personal_guarantee() -> GuaranteeInput {
    GuaranteeInput {
        guarantee_type: "PERSONAL".to_string(),
        description: "aval personal".to_string(),
        value: Decimal::new(5000, 0),
    }
}

pub fn life_insurance() -> InsuranceInput {
    InsuranceInput {
        insurance_type: "LIFE".to_string(),
        company: "Aseguradora del Sur".to_string(),
        insured_amount: Decimal::new(120_000, 0),
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    }
}

pub fn origination_fee() -> CommissionTypeInput {
    CommissionTypeInput {
        category: "ORIGINATION".to_string(),
        name: "Origination fee".to_string(),
        description: "Charged once at disbursement".to_string(),
        calculation_method: "PERCENTAGE".to_string(),
        amount: Decimal::new(15, 1),
    }
}

pub fn consumer_loan_type(guarantee_id: &str) -> LoanTypeInput {
    LoanTypeInput {
        currency_id: "USD".to_string(),
        name: "Consumer loan".to_string(),
        description: "General-purpose consumer credit".to_string(),
        requirements: "Proof of income, national id".to_string(),
        client_type: "INDIVIDUAL".to_string(),
        guarantee_id: guarantee_id.to_string(),
    }
}

pub fn standard_offer(
    loan_type_id: &str,
    insurance_id: &str,
    commission_type_id: &str,
) -> LoanOfferInput {
    LoanOfferInput {
        loan_type_id: loan_type_id.to_string(),
        currency_id: "USD".to_string(),
        name: "Standard consumer offer".to_string(),
        description: "12 to 48 month consumer credit".to_string(),
        calculation_base: "30/360".to_string(),
        interest_rate: Decimal::new(1275, 2),
        minimum_amount: Decimal::new(1000, 0),
        maximum_amount: Decimal::new(25_000, 0),
        minimum_term_months: 12,
        maximum_term_months: 48,
        amortization_type: "FRENCH".to_string(),
        insurance_id: insurance_id.to_string(),
        commission_type_id: commission_type_id.to_string(),
    }
}
