pub mod client_repository;
pub mod invoice_repository;
pub mod product_repository;

pub use client_repository::HttpClientRepository;
pub use invoice_repository::HttpInvoiceRepository;
pub use product_repository::HttpProductRepository;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::domain::errors::ApiError;
use crate::infrastructure::config::ApiConfig;

/// Build the shared HTTP client the repositories are constructed with.
/// One client per process; reqwest pools connections internally.
pub fn build_client(config: &ApiConfig) -> Result<reqwest::Client, ApiError> {
  reqwest::Client::builder()
    .timeout(Duration::from_secs(config.request_timeout_seconds))
    .build()
    .map_err(ApiError::from)
}

/// Classify a non-success response. `resource` names what was addressed
/// ("invoice 42", "products") for NotFound reporting; the body text is kept
/// as operator-facing detail, never shown to end users.
async fn error_for_status(response: Response, resource: String) -> ApiError {
  let status = response.status();
  let body = response.text().await.unwrap_or_default();

  match status {
    StatusCode::NOT_FOUND => ApiError::NotFound { resource },
    StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::ServerValidation(body),
    _ => ApiError::Transport(format!("unexpected status {status} for {resource}: {body}")),
  }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
  response.json::<T>().await.map_err(ApiError::from)
}
