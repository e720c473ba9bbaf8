use std::{collections::HashMap, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::{fs, sync::RwLock};

use models::{CatalogRecord, EntityStatus};

use crate::errors::ServiceError;
use crate::storage::DocumentStore;

/// JSON file-backed document collection.
///
/// Keeps the whole collection in memory as a `HashMap<id, record>` and writes
/// it through to one JSON file per entity type. Intended for catalog-sized
/// data where a database is overkill.
#[derive(Clone)]
pub struct JsonCollection<R> {
    inner: Arc<RwLock<HashMap<String, R>>>,
    file_path: PathBuf,
}

impl<R> JsonCollection<R>
where
    R: CatalogRecord + serde::Serialize + serde::de::DeserializeOwned + Clone + Send + Sync,
{
    /// Initialize the collection from a path. Creates the file with an empty
    /// map if missing.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let map: HashMap<String, R> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => {
                let empty: HashMap<String, R> = HashMap::new();
                fs::write(
                    &file_path,
                    serde_json::to_vec(&empty).map_err(|e| ServiceError::Storage(e.to_string()))?,
                )
                .await
                .map_err(|e| ServiceError::Storage(e.to_string()))?;
                empty
            }
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(map)), file_path }))
    }

    async fn persist(&self) -> Result<(), ServiceError> {
        let map = self.inner.read().await;
        let data = serde_json::to_vec(&*map).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl<R> DocumentStore<R> for JsonCollection<R>
where
    R: CatalogRecord + serde::Serialize + serde::de::DeserializeOwned + Clone + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: &str) -> Option<R> {
        let map = self.inner.read().await;
        map.get(id).cloned()
    }

    async fn find_by_status(&self, status: EntityStatus) -> Vec<R> {
        let map = self.inner.read().await;
        map.values().filter(|r| r.status() == status).cloned().collect()
    }

    async fn save(&self, record: R) -> Result<R, ServiceError> {
        let mut map = self.inner.write().await;
        map.insert(record.id().to_string(), record.clone());
        drop(map);
        self.persist().await?;
        Ok(record)
    }

    async fn list_all(&self) -> Vec<R> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }
}
