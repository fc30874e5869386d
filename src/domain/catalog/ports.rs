use async_trait::async_trait;

use super::entities::{Client, Product};
use crate::domain::errors::ApiError;

/// Product lookup source. The form fetches the list once per session and
/// treats it as an immutable snapshot for the lifetime of the draft.
#[async_trait]
pub trait ProductRepository: Send + Sync {
  async fn list(&self) -> Result<Vec<Product>, ApiError>;
}

/// Client directory operations exposed by the admin surface.
#[async_trait]
pub trait ClientRepository: Send + Sync {
  async fn list(&self) -> Result<Vec<Client>, ApiError>;

  async fn delete(&self, id: i64) -> Result<(), ApiError>;
}
