//! Pass-through HTTP clients for sibling catalog deployments.
//!
//! Request and response shapes match the local entities; the clients do no
//! validation of their own.

use thiserror::Error;

use models::{LoanOfferInput, LoanOfferResponse, LoanTypeInput, LoanTypeResponse};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("remote returned status {0}")]
    Status(u16),
}

async fn decode<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    if !resp.status().is_success() {
        return Err(ClientError::Status(resp.status().as_u16()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ClientError::Parse(e.to_string()))
}

/// Client for a remote loan-type catalog.
#[derive(Clone)]
pub struct LoanTypeClient {
    base_url: String,
    http: reqwest::Client,
}

impl LoanTypeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), http: reqwest::Client::new() }
    }

    pub async fn find_all(&self) -> Result<Vec<LoanTypeResponse>, ClientError> {
        let url = format!("{}/api/v1/loan-types", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        decode(resp).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<LoanTypeResponse, ClientError> {
        let url = format!("{}/api/v1/loan-types/{id}", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        decode(resp).await
    }

    pub async fn create(&self, input: &LoanTypeInput) -> Result<LoanTypeResponse, ClientError> {
        let url = format!("{}/api/v1/loan-types", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        decode(resp).await
    }
}

/// Client for a remote loan-offer catalog.
#[derive(Clone)]
pub struct LoanOfferClient {
    base_url: String,
    http: reqwest::Client,
}

impl LoanOfferClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), http: reqwest::Client::new() }
    }

    pub async fn find_all(&self) -> Result<Vec<LoanOfferResponse>, ClientError> {
        let url = format!("{}/api/v1/loan-offers", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        decode(resp).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<LoanOfferResponse, ClientError> {
        let url = format!("{}/api/v1/loan-offers/{id}", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        decode(resp).await
    }

    pub async fn create(&self, input: &LoanOfferInput) -> Result<LoanOfferResponse, ClientError> {
        let url = format!("{}/api/v1/loan-offers", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(input)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        decode(resp).await
    }
}
