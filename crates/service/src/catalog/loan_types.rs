use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use models::validation::{value_in_set, CLIENT_TYPES, FRENCH_AMORTIZATION};
use models::{EntityStatus, LoanType, LoanTypeInput};

use crate::catalog::GuaranteeService;
use crate::errors::ServiceError;
use crate::storage::DocumentStore;

/// Loan types reference a guarantee that must exist and be active at create
/// time, and whenever the reference changes on update.
pub struct LoanTypeService {
    store: Arc<dyn DocumentStore<LoanType>>,
    guarantees: Arc<GuaranteeService>,
}

impl LoanTypeService {
    pub fn new(
        store: Arc<dyn DocumentStore<LoanType>>,
        guarantees: Arc<GuaranteeService>,
    ) -> Arc<Self> {
        Arc::new(Self { store, guarantees })
    }

    pub async fn find_all(&self) -> Vec<LoanType> {
        self.store.find_by_status(EntityStatus::Active).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<LoanType, ServiceError> {
        self.store
            .find_by_id(id)
            .await
            .ok_or_else(|| ServiceError::not_found("loan type", id))
    }

    /// Why the guarantee reference cannot be used, if it cannot. A nested
    /// not-found never escapes as `NotFound`; it becomes the caller's
    /// contextual create/update error.
    async fn guarantee_reference_error(&self, guarantee_id: &str) -> Option<String> {
        match self.guarantees.find_by_id(guarantee_id).await {
            Ok(guarantee) if guarantee.status.is_active() => None,
            Ok(_) => Some("guarantee is inactive".to_string()),
            Err(ServiceError::NotFound(_)) => {
                Some("referenced guarantee does not exist".to_string())
            }
            Err(e) => Some(e.to_string()),
        }
    }

    pub async fn create(&self, input: LoanTypeInput) -> Result<LoanType, ServiceError> {
        input
            .validate()
            .map_err(|e| ServiceError::Create(e.to_string()))?;
        if let Some(reason) = self.guarantee_reference_error(&input.guarantee_id).await {
            return Err(ServiceError::Create(reason));
        }
        if !value_in_set(CLIENT_TYPES, &input.client_type) {
            return Err(ServiceError::Create("client type is not valid".into()));
        }

        let now = Utc::now();
        let record = LoanType {
            id: Uuid::new_v4().to_string(),
            currency_id: input.currency_id,
            name: input.name,
            description: input.description,
            requirements: input.requirements,
            client_type: input.client_type,
            amortization_scheme: FRENCH_AMORTIZATION.to_string(),
            guarantee_id: input.guarantee_id,
            created_at: now,
            modified_at: now,
            status: EntityStatus::Active,
            version: 1,
        };

        let saved = self
            .store
            .save(record)
            .await
            .map_err(|e| ServiceError::Create(format!("failed to persist loan type: {e}")))?;
        info!(id = %saved.id, name = %saved.name, "created loan type");
        Ok(saved)
    }

    /// The guarantee reference is only re-validated when it changed relative
    /// to the stored record; the client type is re-validated unconditionally.
    pub async fn update(&self, id: &str, input: LoanTypeInput) -> Result<LoanType, ServiceError> {
        let mut existing = self.find_by_id(id).await?;

        input
            .validate()
            .map_err(|e| ServiceError::Update(e.to_string()))?;
        if existing.guarantee_id != input.guarantee_id {
            if let Some(reason) = self.guarantee_reference_error(&input.guarantee_id).await {
                return Err(ServiceError::Update(reason));
            }
        }
        if !value_in_set(CLIENT_TYPES, &input.client_type) {
            return Err(ServiceError::Update("client type is not valid".into()));
        }

        existing.currency_id = input.currency_id;
        existing.name = input.name;
        existing.description = input.description;
        existing.requirements = input.requirements;
        existing.client_type = input.client_type;
        existing.guarantee_id = input.guarantee_id;
        existing.modified_at = Utc::now();
        existing.version += 1;

        let saved = self
            .store
            .save(existing)
            .await
            .map_err(|e| ServiceError::Update(format!("failed to persist loan type: {e}")))?;
        info!(id = %saved.id, version = saved.version, "updated loan type");
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
                error!(id = %id, error = %e, "failed to soft-delete loan type");
                ServiceError::Delete(format!("failed to delete loan type: {e}"))
            })?;
        info!(id = %id, "soft-deleted loan type");
        Ok(())
    }
}
