use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use models::{Guarantee, GuaranteeInput};

use crate::errors::JsonApiError;
use crate::state::ServerState;

pub async fn list(State(state): State<ServerState>) -> Json<Vec<Guarantee>> {
    let items = state.guarantees.find_all().await;
    info!(count = items.len(), "list guarantees");
    Json(items)
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Guarantee>, JsonApiError> {
    let record = state.guarantees.find_by_id(&id).await?;
    Ok(Json(record))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<GuaranteeInput>,
) -> Result<(StatusCode, Json<Guarantee>), JsonApiError> {
    let created = state.guarantees.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.guarantees.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
