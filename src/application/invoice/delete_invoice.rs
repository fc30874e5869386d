use std::sync::Arc;

use crate::application::errors::UseCaseError;
use crate::domain::invoice::InvoiceRepository;

/// Deletes one invoice from the list view.
pub struct DeleteInvoiceUseCase {
  invoices: Arc<dyn InvoiceRepository>,
}

impl DeleteInvoiceUseCase {
  pub fn new(invoices: Arc<dyn InvoiceRepository>) -> Self {
    Self { invoices }
  }

  pub async fn execute(&self, invoice_id: i64) -> Result<(), UseCaseError> {
    self.invoices.delete(invoice_id).await.map_err(|err| {
      tracing::error!(invoice_id, error = %err, "failed to delete invoice");
      UseCaseError::new("Error deleting invoice", err)
    })
  }
}
