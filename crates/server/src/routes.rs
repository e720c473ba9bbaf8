use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::state::ServerState;

pub mod commission_types;
pub mod guarantees;
pub mod insurances;
pub mod loan_offers;
pub mod loan_types;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health plus the five entity surfaces.
pub fn build_router(state: ServerState) -> Router {
    let api = Router::new()
        .route(
            "/api/v1/guarantees",
            get(guarantees::list).post(guarantees::create),
        )
        .route(
            "/api/v1/guarantees/:id",
            get(guarantees::get).delete(guarantees::delete),
        )
        .route(
            "/api/v1/insurances",
            get(insurances::list).post(insurances::create),
        )
        .route(
            "/api/v1/insurances/:id",
            get(insurances::get).delete(insurances::delete),
        )
        .route(
            "/api/v1/commission-types",
            get(commission_types::list).post(commission_types::create),
        )
        .route(
            "/api/v1/commission-types/:id",
            get(commission_types::get).delete(commission_types::delete),
        )
        .route(
            "/api/v1/loan-types",
            get(loan_types::list).post(loan_types::create),
        )
        .route(
            "/api/v1/loan-types/:id",
            get(loan_types::get)
                .put(loan_types::update)
                .delete(loan_types::delete),
        )
        .route(
            "/api/v1/loan-offers",
            get(loan_offers::list).post(loan_offers::create),
        )
        .route(
            "/api/v1/loan-offers/:id",
            get(loan_offers::get)
                .put(loan_offers::update)
                .delete(loan_offers::delete),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
