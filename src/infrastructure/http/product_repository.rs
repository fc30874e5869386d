use async_trait::async_trait;

use super::{decode, error_for_status};
use crate::domain::catalog::{Product, ProductRepository};
use crate::domain::errors::ApiError;
use crate::infrastructure::config::ApiConfig;

/// `ProductRepository` backed by the remote REST API.
pub struct HttpProductRepository {
  http: reqwest::Client,
  base: String,
}

impl HttpProductRepository {
  pub fn new(http: reqwest::Client, config: &ApiConfig) -> Self {
    Self {
      http,
      base: config.products_url(),
    }
  }
}

#[async_trait]
impl ProductRepository for HttpProductRepository {
  async fn list(&self) -> Result<Vec<Product>, ApiError> {
    let response = self.http.get(&self.base).send().await?;
    if !response.status().is_success() {
      return Err(error_for_status(response, "products".to_string()).await);
    }
    decode(response).await
  }
}
