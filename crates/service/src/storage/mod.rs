use async_trait::async_trait;

use models::{CatalogRecord, EntityStatus};

use crate::errors::ServiceError;

pub mod json_collection;

pub use json_collection::JsonCollection;

/// Point-read/point-write document collection for one entity type.
///
/// No cross-entity transactions: a save is atomic only for its own record.
#[async_trait]
pub trait DocumentStore<R>: Send + Sync
where
    R: CatalogRecord + Clone + Send + Sync + 'static,
{
    /// Fetch a record by id regardless of its status.
    async fn find_by_id(&self, id: &str) -> Option<R>;

    /// All records currently carrying the given status.
    async fn find_by_status(&self, status: EntityStatus) -> Vec<R>;

    /// Insert or replace the record under its id.
    async fn save(&self, record: R) -> Result<R, ServiceError>;

    /// Every record in the collection, active or not.
    async fn list_all(&self) -> Vec<R>;
}
