use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use models::{CommissionType, CommissionTypeInput};

use crate::errors::JsonApiError;
use crate::state::ServerState;

pub async fn list(State(state): State<ServerState>) -> Json<Vec<CommissionType>> {
    let items = state.commission_types.find_all().await;
    info!(count = items.len(), "list commission types");
    Json(items)
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<CommissionType>, JsonApiError> {
    let record = state.commission_types.find_by_id(&id).await?;
    Ok(Json(record))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CommissionTypeInput>,
) -> Result<(StatusCode, Json<CommissionType>), JsonApiError> {
    let created = state.commission_types.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.commission_types.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
