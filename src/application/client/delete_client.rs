use std::sync::Arc;

use crate::application::errors::UseCaseError;
use crate::domain::catalog::ClientRepository;

/// Deletes one client from the directory view.
pub struct DeleteClientUseCase {
  clients: Arc<dyn ClientRepository>,
}

impl DeleteClientUseCase {
  pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
    Self { clients }
  }

  pub async fn execute(&self, client_id: i64) -> Result<(), UseCaseError> {
    self.clients.delete(client_id).await.map_err(|err| {
      tracing::error!(client_id, error = %err, "failed to delete client");
      UseCaseError::new("Error deleting client", err)
    })
  }
}
