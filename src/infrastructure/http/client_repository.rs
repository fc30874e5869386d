use async_trait::async_trait;

use super::{decode, error_for_status};
use crate::domain::catalog::{Client, ClientRepository};
use crate::domain::errors::ApiError;
use crate::infrastructure::config::ApiConfig;

/// `ClientRepository` backed by the remote REST API.
pub struct HttpClientRepository {
  http: reqwest::Client,
  base: String,
}

impl HttpClientRepository {
  pub fn new(http: reqwest::Client, config: &ApiConfig) -> Self {
    Self {
      http,
      base: config.clients_url(),
    }
  }
}

#[async_trait]
impl ClientRepository for HttpClientRepository {
  async fn list(&self) -> Result<Vec<Client>, ApiError> {
    let response = self.http.get(&self.base).send().await?;
    if !response.status().is_success() {
      return Err(error_for_status(response, "clients".to_string()).await);
    }
    decode(response).await
  }

  async fn delete(&self, id: i64) -> Result<(), ApiError> {
    let response = self
      .http
      .delete(format!("{}/{}", self.base, id))
      .send()
      .await?;
    if !response.status().is_success() {
      return Err(error_for_status(response, format!("client {id}")).await);
    }
    Ok(())
  }
}
