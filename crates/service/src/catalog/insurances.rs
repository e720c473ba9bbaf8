use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use models::validation::{value_in_set, INSURANCE_TYPES};
use models::{EntityStatus, Insurance, InsuranceInput};

use crate::errors::ServiceError;
use crate::storage::DocumentStore;

/// Insurance policies support create and soft delete only.
pub struct InsuranceService {
    store: Arc<dyn DocumentStore<Insurance>>,
}

impl InsuranceService {
    pub fn new(store: Arc<dyn DocumentStore<Insurance>>) -> Arc<Self> {
        Arc::new(Self { store })
    }

    pub async fn find_all(&self) -> Vec<Insurance> {
        self.store.find_by_status(EntityStatus::Active).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Insurance, ServiceError> {
        self.store
            .find_by_id(id)
            .await
            .ok_or_else(|| ServiceError::not_found("insurance", id))
    }

    pub async fn create(&self, input: InsuranceInput) -> Result<Insurance, ServiceError> {
        input
            .validate()
            .map_err(|e| ServiceError::Create(e.to_string()))?;
        if !value_in_set(INSURANCE_TYPES, &input.insurance_type) {
            return Err(ServiceError::Create("insurance type is not valid".into()));
        }

        let record = Insurance {
            id: Uuid::new_v4().to_string(),
            insurance_type: input.insurance_type,
            company: input.company,
            insured_amount: input.insured_amount,
            start_date: input.start_date,
            end_date: input.end_date,
            status: EntityStatus::Active,
            version: 1,
        };

        let saved = self
            .store
            .save(record)
            .await
            .map_err(|e| ServiceError::Create(format!("failed to persist insurance: {e}")))?;
        info!(id = %saved.id, insurance_type = %saved.insurance_type, "created insurance");
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
                error!(id = %id, error = %e, "failed to soft-delete insurance");
                ServiceError::Delete(format!("failed to delete insurance: {e}"))
            })?;
        info!(id = %id, "soft-deleted insurance");
        Ok(())
    }
}
