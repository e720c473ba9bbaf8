use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use models::validation::{value_in_set, COMMISSION_CALCULATION_METHODS, COMMISSION_CATEGORIES};
use models::{CommissionType, CommissionTypeInput, EntityStatus};

use crate::errors::ServiceError;
use crate::storage::DocumentStore;

/// Commission types support create and soft delete only.
pub struct CommissionTypeService {
    store: Arc<dyn DocumentStore<CommissionType>>,
}

impl CommissionTypeService {
    pub fn new(store: Arc<dyn DocumentStore<CommissionType>>) -> Arc<Self> {
        Arc::new(Self { store })
    }

    pub async fn find_all(&self) -> Vec<CommissionType> {
        self.store.find_by_status(EntityStatus::Active).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<CommissionType, ServiceError> {
        self.store
            .find_by_id(id)
            .await
            .ok_or_else(|| ServiceError::not_found("commission type", id))
    }

    pub async fn create(&self, input: CommissionTypeInput) -> Result<CommissionType, ServiceError> {
        input
            .validate()
            .map_err(|e| ServiceError::Create(e.to_string()))?;
        if !value_in_set(COMMISSION_CATEGORIES, &input.category) {
            return Err(ServiceError::Create(
                "commission category is not valid".into(),
            ));
        }
        if !value_in_set(COMMISSION_CALCULATION_METHODS, &input.calculation_method) {
            return Err(ServiceError::Create(
                "commission calculation method is not valid".into(),
            ));
        }

        let record = CommissionType {
            id: Uuid::new_v4().to_string(),
            category: input.category,
            name: input.name,
            description: input.description,
            calculation_method: input.calculation_method,
            amount: input.amount,
            status: EntityStatus::Active,
            version: 1,
        };

        let saved = self
            .store
            .save(record)
            .await
            .map_err(|e| ServiceError::Create(format!("failed to persist commission type: {e}")))?;
        info!(id = %saved.id, category = %saved.category, "created commission type");
        Ok(saved)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let mut record = self.find_by_id(id).await?;
        record.status = EntityStatus::Inactive;
        record.version += 1;

        self.store
            .save(record)
            .await
            .map_err(|e| {
                error!(id = %id, error = %e, "failed to soft-delete commission type");
                ServiceError::Delete(format!("failed to delete commission type: {e}"))
            })?;
        info!(id = %id, "soft-deleted commission type");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    use crate::storage::JsonCollection;

    async fn service() -> Arc<CommissionTypeService> {
        let path = std::env::temp_dir()
            .join(format!("catalog_commission_types_{}.json", Uuid::new_v4()));
        let store = JsonCollection::<CommissionType>::open(path).await.unwrap();
        CommissionTypeService::new(store)
    }

    fn origination_fee() -> CommissionTypeInput {
        CommissionTypeInput {
            category: "ORIGINATION".to_string(),
            name: "Origination fee".to_string(),
            description: "Charged once at disbursement".to_string(),
            calculation_method: "PERCENTAGE".to_string(),
            amount: Decimal::new(15, 1),
        }
    }

    #[tokio::test]
    async fn create_then_find_is_active_version_one() -> Result<(), anyhow::Error> {
        let svc = service().await;
        let created = svc.create(origination_fee()).await?;

        let found = svc.find_by_id(&created.id).await?;
        assert_eq!(found.status, EntityStatus::Active);
        assert_eq!(found.version, 1);
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_unknown_category() {
        let svc = service().await;
        let mut input = origination_fee();
        input.category = "SURPRISE".to_string();

        let err = svc.create(input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Create(_)));
    }

    #[tokio::test]
    async fn create_rejects_unknown_calculation_method() {
        let svc = service().await;
        let mut input = origination_fee();
        input.calculation_method = "LOGARITHMIC".to_string();

        let err = svc.create(input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Create(_)));
    }

    #[tokio::test]
    async fn delete_flips_status_and_bumps_version() -> Result<(), anyhow::Error> {
        let svc = service().await;
        let created = svc.create(origination_fee()).await?;

        svc.delete(&created.id).await?;

        let found = svc.find_by_id(&created.id).await?;
        assert_eq!(found.status, EntityStatus::Inactive);
        assert_eq!(found.version, 2);
        Ok(())
    }
}
