use std::{env, net::SocketAddr, path::Path, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tracing::info;

use models::{CommissionType, Guarantee, Insurance, LoanOffer, LoanType};
use service::catalog::{
    CommissionTypeService, GuaranteeService, InsuranceService, LoanOfferService, LoanTypeService,
};
use service::storage::JsonCollection;

use crate::routes;
use crate::state::ServerState;

fn init_logging() {
    init_logging_default();
}

/// Load host/port from configs or env vars, with sensible fallbacks.
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8083);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

fn load_data_dir() -> String {
    match configs::load_default() {
        Ok(cfg) => cfg.storage.data_dir,
        Err(_) => env::var("CATALOG_DATA_DIR").unwrap_or_else(|_| "data".to_string()),
    }
}

/// Open the five entity collections under `data_dir` and wire the service
/// graph: loan types validate against guarantees, loan offers against loan
/// types, insurances and commission types.
pub async fn build_state(data_dir: &str) -> anyhow::Result<ServerState> {
    let dir = Path::new(data_dir);

    let guarantees =
        GuaranteeService::new(JsonCollection::<Guarantee>::open(dir.join("guarantees.json")).await?);
    let insurances =
        InsuranceService::new(JsonCollection::<Insurance>::open(dir.join("insurances.json")).await?);
    let commission_types = CommissionTypeService::new(
        JsonCollection::<CommissionType>::open(dir.join("commission_types.json")).await?,
    );
    let loan_types = LoanTypeService::new(
        JsonCollection::<LoanType>::open(dir.join("loan_types.json")).await?,
        Arc::clone(&guarantees),
    );
    let loan_offers = LoanOfferService::new(
        JsonCollection::<LoanOffer>::open(dir.join("loan_offers.json")).await?,
        Arc::clone(&loan_types),
        Arc::clone(&insurances),
        Arc::clone(&commission_types),
    );

    Ok(ServerState { guarantees, insurances, commission_types, loan_types, loan_offers })
}

/// Public entry: build the app and run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let data_dir = load_data_dir();
    common::env::ensure_data_dir(&data_dir).await?;

    let state = build_state(&data_dir).await?;
    let app: Router = routes::build_router(state);

    let addr = load_bind_addr()?;
    info!(%addr, %data_dir, "starting catalog server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
