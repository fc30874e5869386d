use std::sync::Arc;

use crate::application::errors::UseCaseError;
use crate::domain::invoice::{Invoice, InvoiceRepository};

/// Backs the invoice table view.
pub struct ListInvoicesUseCase {
  invoices: Arc<dyn InvoiceRepository>,
}

impl ListInvoicesUseCase {
  pub fn new(invoices: Arc<dyn InvoiceRepository>) -> Self {
    Self { invoices }
  }

  pub async fn execute(&self) -> Result<Vec<Invoice>, UseCaseError> {
    self.invoices.list().await.map_err(|err| {
      tracing::error!(error = %err, "failed to load invoices");
      UseCaseError::new("Error loading invoices", err)
    })
  }
}
