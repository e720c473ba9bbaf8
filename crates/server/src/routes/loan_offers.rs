use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use models::{LoanOfferInput, LoanOfferResponse};
use service::catalog::composition::compose_loan_offer;

use crate::errors::JsonApiError;
use crate::state::ServerState;

/// Every loan-offer response embeds the loan type, insurance and commission
/// type that can still be found; any subset may be absent.
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<LoanOfferResponse>>, JsonApiError> {
    let records = state.loan_offers.find_all().await;
    info!(count = records.len(), "list loan offers");

    let mut composed = Vec::with_capacity(records.len());
    for record in records {
        composed.push(
            compose_loan_offer(
                &state.loan_types,
                &state.insurances,
                &state.commission_types,
                record,
            )
            .await?,
        );
    }
    Ok(Json(composed))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<LoanOfferResponse>, JsonApiError> {
    let record = state.loan_offers.find_by_id(&id).await?;
    let composed = compose_loan_offer(
        &state.loan_types,
        &state.insurances,
        &state.commission_types,
        record,
    )
    .await?;
    Ok(Json(composed))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<LoanOfferInput>,
) -> Result<(StatusCode, Json<LoanOfferResponse>), JsonApiError> {
    let created = state.loan_offers.create(input).await?;
    let composed = compose_loan_offer(
        &state.loan_types,
        &state.insurances,
        &state.commission_types,
        created,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(composed)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<LoanOfferInput>,
) -> Result<Json<LoanOfferResponse>, JsonApiError> {
    let updated = state.loan_offers.update(&id, input).await?;
    let composed = compose_loan_offer(
        &state.loan_types,
        &state.insurances,
        &state.commission_types,
        updated,
    )
    .await?;
    Ok(Json(composed))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.loan_offers.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
