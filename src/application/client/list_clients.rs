use std::sync::Arc;

use crate::application::errors::UseCaseError;
use crate::domain::catalog::{Client, ClientRepository};

/// Backs the client table view.
pub struct ListClientsUseCase {
  clients: Arc<dyn ClientRepository>,
}

impl ListClientsUseCase {
  pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
    Self { clients }
  }

  pub async fn execute(&self) -> Result<Vec<Client>, UseCaseError> {
    self.clients.list().await.map_err(|err| {
      tracing::error!(error = %err, "failed to load clients");
      UseCaseError::new("Error loading clients", err)
    })
  }
}
