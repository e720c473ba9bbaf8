use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use models::validation::{value_in_set, CALCULATION_BASES};
use models::{EntityStatus, LoanOffer, LoanOfferInput};

use crate::catalog::{CommissionTypeService, InsuranceService, LoanTypeService};
use crate::errors::ServiceError;
use crate::storage::DocumentStore;

/// Loan offers reference a loan type, an insurance policy and a commission
/// type; each must exist and be active at create time and whenever the
/// reference changes on update. The three checks run independently, in order,
/// and the first failure wins.
pub struct LoanOfferService {
    store: Arc<dyn DocumentStore<LoanOffer>>,
    loan_types: Arc<LoanTypeService>,
    insurances: Arc<InsuranceService>,
    commission_types: Arc<CommissionTypeService>,
}

impl LoanOfferService {
    pub fn new(
        store: Arc<dyn DocumentStore<LoanOffer>>,
        loan_types: Arc<LoanTypeService>,
        insurances: Arc<InsuranceService>,
        commission_types: Arc<CommissionTypeService>,
    ) -> Arc<Self> {
        Arc::new(Self { store, loan_types, insurances, commission_types })
    }

    pub async fn find_all(&self) -> Vec<LoanOffer> {
        self.store.find_by_status(EntityStatus::Active).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<LoanOffer, ServiceError> {
        self.store
            .find_by_id(id)
            .await
            .ok_or_else(|| ServiceError::not_found("loan offer", id))
    }

    async fn loan_type_reference_error(&self, loan_type_id: &str) -> Option<String> {
        match self.loan_types.find_by_id(loan_type_id).await {
            Ok(loan_type) if loan_type.status.is_active() => None,
            Ok(_) => Some("loan type is inactive".to_string()),
            Err(ServiceError::NotFound(_)) => {
                Some("referenced loan type does not exist".to_string())
            }
            Err(e) => Some(e.to_string()),
        }
    }

    async fn insurance_reference_error(&self, insurance_id: &str) -> Option<String> {
        match self.insurances.find_by_id(insurance_id).await {
            Ok(insurance) if insurance.status.is_active() => None,
            Ok(_) => Some("insurance is inactive".to_string()),
            Err(ServiceError::NotFound(_)) => {
                Some("referenced insurance does not exist".to_string())
            }
            Err(e) => Some(e.to_string()),
        }
    }

    async fn commission_type_reference_error(&self, commission_type_id: &str) -> Option<String> {
        match self.commission_types.find_by_id(commission_type_id).await {
            Ok(commission) if commission.status.is_active() => None,
            Ok(_) => Some("commission type is inactive".to_string()),
            Err(ServiceError::NotFound(_)) => {
                Some("referenced commission type does not exist".to_string())
            }
            Err(e) => Some(e.to_string()),
        }
    }

    pub async fn create(&self, input: LoanOfferInput) -> Result<LoanOffer, ServiceError> {
        input
            .validate()
            .map_err(|e| ServiceError::Create(e.to_string()))?;
        if let Some(reason) = self.loan_type_reference_error(&input.loan_type_id).await {
            return Err(ServiceError::Create(reason));
        }
        if let Some(reason) = self.insurance_reference_error(&input.insurance_id).await {
            return Err(ServiceError::Create(reason));
        }
        if let Some(reason) = self
            .commission_type_reference_error(&input.commission_type_id)
            .await
        {
            return Err(ServiceError::Create(reason));
        }
        if !value_in_set(CALCULATION_BASES, &input.calculation_base) {
            return Err(ServiceError::Create("calculation base is not valid".into()));
        }

        let record = LoanOffer {
            id: Uuid::new_v4().to_string(),
            loan_type_id: input.loan_type_id,
            currency_id: input.currency_id,
            name: input.name,
            description: input.description,
            calculation_base: input.calculation_base,
            interest_rate: input.interest_rate,
            minimum_amount: input.minimum_amount,
            maximum_amount: input.maximum_amount,
            minimum_term_months: input.minimum_term_months,
            maximum_term_months: input.maximum_term_months,
            amortization_type: input.amortization_type,
            insurance_id: input.insurance_id,
            commission_type_id: input.commission_type_id,
            modified_at: Utc::now(),
            status: EntityStatus::Active,
            version: 1,
        };

        let saved = self
            .store
            .save(record)
            .await
            .map_err(|e| ServiceError::Create(format!("failed to persist loan offer: {e}")))?;
        info!(id = %saved.id, name = %saved.name, "created loan offer");
        Ok(saved)
    }

    /// References are only re-validated when changed relative to the stored
    /// record; the calculation base is re-validated unconditionally.
    pub async fn update(&self, id: &str, input: LoanOfferInput) -> Result<LoanOffer, ServiceError> {
        let mut existing = self.find_by_id(id).await?;

        input
            .validate()
            .map_err(|e| ServiceError::Update(e.to_string()))?;
        if existing.loan_type_id != input.loan_type_id {
            if let Some(reason) = self.loan_type_reference_error(&input.loan_type_id).await {
                return Err(ServiceError::Update(reason));
            }
        }
        if existing.insurance_id != input.insurance_id {
            if let Some(reason) = self.insurance_reference_error(&input.insurance_id).await {
                return Err(ServiceError::Update(reason));
            }
        }
        if existing.commission_type_id != input.commission_type_id {
            if let Some(reason) = self
                .commission_type_reference_error(&input.commission_type_id)
                .await
            {
                return Err(ServiceError::Update(reason));
            }
        }
        if !value_in_set(CALCULATION_BASES, &input.calculation_base) {
            return Err(ServiceError::Update("calculation base is not valid".into()));
        }

        existing.loan_type_id = input.loan_type_id;
        existing.currency_id = input.currency_id;
        existing.name = input.name;
        existing.description = input.description;
        existing.calculation_base = input.calculation_base;
        existing.interest_rate = input.interest_rate;
        existing.minimum_amount = input.minimum_amount;
        existing.maximum_amount = input.maximum_amount;
        existing.minimum_term_months = input.minimum_term_months;
        existing.maximum_term_months = input.maximum_term_months;
        existing.amortization_type = input.amortization_type;
        existing.insurance_id = input.insurance_id;
        existing.commission_type_id = input.commission_type_id;
        existing.modified_at = Utc::now();
        existing.version += 1;

        let saved = self
            .store
            .save(existing)
            .await
            .map_err(|e| ServiceError::Update(format!("failed to persist loan offer: {e}")))?;
        info!(id = %saved.id, version = saved.version, "updated loan offer");
        Ok(saved)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let mut record = self.find_by_id(id).await?;
        record.status = EntityStatus::Inactive;
        record.modified_at = Utc::now();
        record.version += 1;

        self.store
            .save(record)
            .await
            .map_err(|e| {
                error!(id = %id, error = %e, "failed to soft-delete loan offer");
                ServiceError::Delete(format!("failed to delete loan offer: {e}"))
            })?;
        info!(id = %id, "soft-deleted loan offer");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_support::{
        catalog, consumer_loan_type, life_insurance, origination_fee, personal_guarantee,
        standard_offer, TestCatalog,
    };

    struct Seeded {
        cat: TestCatalog,
        loan_type_id: String,
        insurance_id: String,
        commission_type_id: String,
    }

    async fn seeded() -> Seeded {
        let cat = catalog().await;
        let guarantee = cat.guarantees.create(personal_guarantee()).await.unwrap();
        let loan_type = cat
            .loan_types
            .create(consumer_loan_type(&guarantee.id))
            .await
            .unwrap();
        let insurance = cat.insurances.create(life_insurance()).await.unwrap();
        let commission = cat
            .commission_types
            .create(origination_fee())
            .await
            .unwrap();
        Seeded {
            cat,
            loan_type_id: loan_type.id,
            insurance_id: insurance.id,
            commission_type_id: commission.id,
        }
    }

    #[tokio::test]
    async fn create_then_find_is_active_version_one() -> Result<(), anyhow::Error> {
        let s = seeded().await;
        let created = s
            .cat
            .loan_offers
            .create(standard_offer(
                &s.loan_type_id,
                &s.insurance_id,
                &s.commission_type_id,
            ))
            .await?;

        let found = s.cat.loan_offers.find_by_id(&created.id).await?;
        assert_eq!(found.status, EntityStatus::Active);
        assert_eq!(found.version, 1);
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_missing_insurance() {
        let s = seeded().await;

        let err = s
            .cat
            .loan_offers
            .create(standard_offer(
                &s.loan_type_id,
                "no-such-insurance",
                &s.commission_type_id,
            ))
            .await
            .unwrap_err();
        match err {
            ServiceError::Create(msg) => assert!(msg.contains("insurance does not exist")),
            other => panic!("expected create error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_rejects_inactive_insurance() -> Result<(), anyhow::Error> {
        let s = seeded().await;
        s.cat.insurances.delete(&s.insurance_id).await?;

        let err = s
            .cat
            .loan_offers
            .create(standard_offer(
                &s.loan_type_id,
                &s.insurance_id,
                &s.commission_type_id,
            ))
            .await
            .unwrap_err();
        match err {
            ServiceError::Create(msg) => assert!(msg.contains("insurance is inactive")),
            other => panic!("expected create error, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_inactive_loan_type() -> Result<(), anyhow::Error> {
        let s = seeded().await;
        s.cat.loan_types.delete(&s.loan_type_id).await?;

        let err = s
            .cat
            .loan_offers
            .create(standard_offer(
                &s.loan_type_id,
                &s.insurance_id,
                &s.commission_type_id,
            ))
            .await
            .unwrap_err();
        match err {
            ServiceError::Create(msg) => assert!(msg.contains("loan type is inactive")),
            other => panic!("expected create error, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_unknown_calculation_base_and_persists_nothing() {
        let s = seeded().await;
        let mut input = standard_offer(&s.loan_type_id, &s.insurance_id, &s.commission_type_id);
        input.calculation_base = "99/999".to_string();

        let err = s.cat.loan_offers.create(input).await.unwrap_err();
        match err {
            ServiceError::Create(msg) => assert!(msg.contains("calculation base")),
            other => panic!("expected create error, got {other:?}"),
        }
        assert!(s.cat.loan_offers.find_all().await.is_empty());
    }

    #[tokio::test]
    async fn update_copies_fields_and_bumps_version() -> Result<(), anyhow::Error> {
        let s = seeded().await;
        let created = s
            .cat
            .loan_offers
            .create(standard_offer(
                &s.loan_type_id,
                &s.insurance_id,
                &s.commission_type_id,
            ))
            .await?;

        let mut input = standard_offer(&s.loan_type_id, &s.insurance_id, &s.commission_type_id);
        input.name = "Promotional offer".to_string();
        input.calculation_base = "31/365".to_string();
        let updated = s.cat.loan_offers.update(&created.id, input).await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.version, 2);
        assert_eq!(updated.name, "Promotional offer");
        assert_eq!(updated.calculation_base, "31/365");
        assert!(updated.modified_at > created.modified_at);
        Ok(())
    }

    #[tokio::test]
    async fn update_validates_changed_reference_as_update_error() -> Result<(), anyhow::Error> {
        let s = seeded().await;
        let created = s
            .cat
            .loan_offers
            .create(standard_offer(
                &s.loan_type_id,
                &s.insurance_id,
                &s.commission_type_id,
            ))
            .await?;

        let input = standard_offer(&s.loan_type_id, "no-such-insurance", &s.commission_type_id);
        let err = s.cat.loan_offers.update(&created.id, input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Update(_)));
        Ok(())
    }

    #[tokio::test]
    async fn update_skips_unchanged_references() -> Result<(), anyhow::Error> {
        let s = seeded().await;
        let created = s
            .cat
            .loan_offers
            .create(standard_offer(
                &s.loan_type_id,
                &s.insurance_id,
                &s.commission_type_id,
            ))
            .await?;
        // all three references go inactive, but the update keeps them
        s.cat.loan_types.delete(&s.loan_type_id).await?;
        s.cat.insurances.delete(&s.insurance_id).await?;
        s.cat.commission_types.delete(&s.commission_type_id).await?;

        let updated = s
            .cat
            .loan_offers
            .update(
                &created.id,
                standard_offer(&s.loan_type_id, &s.insurance_id, &s.commission_type_id),
            )
            .await?;
        assert_eq!(updated.version, 2);
        Ok(())
    }

    #[tokio::test]
    async fn delete_flips_status_and_bumps_version() -> Result<(), anyhow::Error> {
        let s = seeded().await;
        let created = s
            .cat
            .loan_offers
            .create(standard_offer(
                &s.loan_type_id,
                &s.insurance_id,
                &s.commission_type_id,
            ))
            .await?;

        s.cat.loan_offers.delete(&created.id).await?;

        let found = s.cat.loan_offers.find_by_id(&created.id).await?;
        assert_eq!(found.status, EntityStatus::Inactive);
        assert_eq!(found.version, 2);
        Ok(())
    }
}
