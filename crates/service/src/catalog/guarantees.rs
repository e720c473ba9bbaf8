use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use models::validation::{value_in_set, GUARANTEE_TYPES};
use models::{EntityStatus, Guarantee, GuaranteeInput};

use crate::errors::ServiceError;
use crate::storage::DocumentStore;

/// Guarantees support create and soft delete only; there is no update path.
pub struct GuaranteeService {
    store: Arc<dyn DocumentStore<Guarantee>>,
}

impl GuaranteeService {
    pub fn new(store: Arc<dyn DocumentStore<Guarantee>>) -> Arc<Self> {
        Arc::new(Self { store })
    }

    pub async fn find_all(&self) -> Vec<Guarantee> {
        self.store.find_by_status(EntityStatus::Active).await
    }

    /// Point read by id; inactive records are still findable.
    pub async fn find_by_id(&self, id: &str) -> Result<Guarantee, ServiceError> {
        self.store
            .find_by_id(id)
            .await
            .ok_or_else(|| ServiceError::not_found("guarantee", id))
    }

    pub async fn create(&self, input: GuaranteeInput) -> Result<Guarantee, ServiceError> {
        input
            .validate()
            .map_err(|e| ServiceError::Create(e.to_string()))?;
        if !value_in_set(GUARANTEE_TYPES, &input.guarantee_type) {
            return Err(ServiceError::Create("guarantee type is not valid".into()));
        }

        let record = Guarantee {
            id: Uuid::new_v4().to_string(),
            guarantee_type: input.guarantee_type,
            description: input.description,
            value: input.value,
            status: EntityStatus::Active,
            version: 1,
        };

        let saved = self
            .store
            .save(record)
            .await
            .map_err(|e| ServiceError::Create(format!("failed to persist guarantee: {e}")))?;
        info!(id = %saved.id, guarantee_type = %saved.guarantee_type, "created guarantee");
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
                error!(id = %id, error = %e, "failed to soft-delete guarantee");
                ServiceError::Delete(format!("failed to delete guarantee: {e}"))
            })?;
        info!(id = %id, "soft-deleted guarantee");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    use crate::storage::JsonCollection;

    async fn service() -> Arc<GuaranteeService> {
        let path = std::env::temp_dir()
            .join(format!("catalog_guarantees_{}.json", Uuid::new_v4()));
        let store = JsonCollection::<Guarantee>::open(path).await.unwrap();
        GuaranteeService::new(store)
    }

    fn personal_guarantee() -> GuaranteeInput {
        GuaranteeInput {
            guarantee_type: "PERSONAL".to_string(),
            description: "aval personal".to_string(),
            value: Decimal::new(5000, 0),
        }
    }

    #[tokio::test]
    async fn create_then_find_is_active_version_one() -> Result<(), anyhow::Error> {
        let svc = service().await;
        let created = svc.create(personal_guarantee()).await?;

        let found = svc.find_by_id(&created.id).await?;
        assert_eq!(found.status, EntityStatus::Active);
        assert_eq!(found.version, 1);
        assert_eq!(found.guarantee_type, "PERSONAL");
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_unknown_type() {
        let svc = service().await;
        let mut input = personal_guarantee();
        input.guarantee_type = "VERBAL".to_string();

        let err = svc.create(input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Create(_)));
    }

    #[tokio::test]
    async fn create_rejects_non_positive_value() {
        let svc = service().await;
        let mut input = personal_guarantee();
        input.value = Decimal::ZERO;

        let err = svc.create(input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Create(_)));
    }

    #[tokio::test]
    async fn delete_keeps_record_findable_as_inactive() -> Result<(), anyhow::Error> {
        let svc = service().await;
        let created = svc.create(personal_guarantee()).await?;

        svc.delete(&created.id).await?;

        let found = svc.find_by_id(&created.id).await?;
        assert_eq!(found.status, EntityStatus::Inactive);
        assert_eq!(found.version, 2);
        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_propagates_not_found() {
        let svc = service().await;
        let err = svc.delete("no-such-id").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn find_all_hides_inactive() -> Result<(), anyhow::Error> {
        let svc = service().await;
        let keep = svc.create(personal_guarantee()).await?;
        let gone = svc.create(personal_guarantee()).await?;
        svc.delete(&gone.id).await?;

        let all = svc.find_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, keep.id);
        Ok(())
    }
}
