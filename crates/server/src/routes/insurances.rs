use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use models::{Insurance, InsuranceInput};

use crate::errors::JsonApiError;
use crate::state::ServerState;

pub async fn list(State(state): State<ServerState>) -> Json<Vec<Insurance>> {
    let items = state.insurances.find_all().await;
    info!(count = items.len(), "list insurances");
    Json(items)
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Insurance>, JsonApiError> {
    let record = state.insurances.find_by_id(&id).await?;
    Ok(Json(record))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<InsuranceInput>,
) -> Result<(StatusCode, Json<Insurance>), JsonApiError> {
    let created = state.insurances.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.insurances.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
