use thiserror::Error;

/// Error taxonomy for catalog operations.
///
/// `NotFound` is only ever raised for the record a caller asked for directly;
/// a not-found from a nested reference lookup is translated into the
/// contextual `Create`/`Update` kind by the referencing service. `Storage` is
/// raised by the store layer and re-wrapped at each fallible call site.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("create error: {0}")]
    Create(String),
    #[error("update error: {0}")]
    Update(String),
    #[error("delete error: {0}")]
    Delete(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: &str) -> Self {
        Self::NotFound(format!("{entity} with id {id} was not found"))
    }
}
