use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use models::{LoanTypeInput, LoanTypeResponse};
use service::catalog::composition::compose_loan_type;

use crate::errors::JsonApiError;
use crate::state::ServerState;

/// Every loan-type response embeds the guarantee when it can be found.
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<LoanTypeResponse>>, JsonApiError> {
    let records = state.loan_types.find_all().await;
    info!(count = records.len(), "list loan types");

    let mut composed = Vec::with_capacity(records.len());
    for record in records {
        composed.push(compose_loan_type(&state.guarantees, record).await?);
    }
    Ok(Json(composed))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<LoanTypeResponse>, JsonApiError> {
    let record = state.loan_types.find_by_id(&id).await?;
    let composed = compose_loan_type(&state.guarantees, record).await?;
    Ok(Json(composed))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<LoanTypeInput>,
) -> Result<(StatusCode, Json<LoanTypeResponse>), JsonApiError> {
    let created = state.loan_types.create(input).await?;
    let composed = compose_loan_type(&state.guarantees, created).await?;
    Ok((StatusCode::CREATED, Json(composed)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<LoanTypeInput>,
) -> Result<Json<LoanTypeResponse>, JsonApiError> {
    let updated = state.loan_types.update(&id, input).await?;
    let composed = compose_loan_type(&state.guarantees, updated).await?;
    Ok(Json(composed))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.loan_types.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
