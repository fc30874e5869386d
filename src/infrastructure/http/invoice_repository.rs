use async_trait::async_trait;

use super::{decode, error_for_status};
use crate::domain::errors::ApiError;
use crate::domain::invoice::{Invoice, InvoiceRepository};
use crate::infrastructure::config::ApiConfig;

/// `InvoiceRepository` backed by the remote REST API.
pub struct HttpInvoiceRepository {
  http: reqwest::Client,
  base: String,
}

impl HttpInvoiceRepository {
  pub fn new(http: reqwest::Client, config: &ApiConfig) -> Self {
    Self {
      http,
      base: config.invoices_url(),
    }
  }

  fn url(&self, id: i64) -> String {
    format!("{}/{}", self.base, id)
  }
}

#[async_trait]
impl InvoiceRepository for HttpInvoiceRepository {
  async fn list(&self) -> Result<Vec<Invoice>, ApiError> {
    let response = self.http.get(&self.base).send().await?;
    if !response.status().is_success() {
      return Err(error_for_status(response, "invoices".to_string()).await);
    }
    decode(response).await
  }

  async fn get(&self, id: i64) -> Result<Invoice, ApiError> {
    let response = self.http.get(self.url(id)).send().await?;
    if !response.status().is_success() {
      return Err(error_for_status(response, format!("invoice {id}")).await);
    }
    decode(response).await
  }

  async fn create(&self, payload: &Invoice) -> Result<Invoice, ApiError> {
    let response = self.http.post(&self.base).json(payload).send().await?;
    if !response.status().is_success() {
      return Err(error_for_status(response, "invoices".to_string()).await);
    }
    decode(response).await
  }

  async fn update(&self, id: i64, payload: &Invoice) -> Result<Invoice, ApiError> {
    let response = self.http.put(self.url(id)).json(payload).send().await?;
    if !response.status().is_success() {
      return Err(error_for_status(response, format!("invoice {id}")).await);
    }
    decode(response).await
  }

  async fn delete(&self, id: i64) -> Result<(), ApiError> {
    let response = self.http.delete(self.url(id)).send().await?;
    if !response.status().is_success() {
      return Err(error_for_status(response, format!("invoice {id}")).await);
    }
    Ok(())
  }
}
