use std::sync::Arc;
use thiserror::Error;

use crate::application::errors::UseCaseError;
use crate::domain::invoice::{FieldError, Invoice, InvoiceDraft, InvoiceRepository, SubmitError};

#[derive(Debug, Error)]
pub enum SaveInvoiceError {
  /// Field-level problems for inline display; nothing was sent.
  #[error("invoice draft failed validation")]
  Invalid(Vec<FieldError>),

  #[error(transparent)]
  Failed(#[from] UseCaseError),
}

/// Submits a draft, choosing create or update from its id. On success the
/// UI navigates back to the list; on failure the draft (and its form state)
/// survives for resubmission.
pub struct SaveInvoiceUseCase {
  invoices: Arc<dyn InvoiceRepository>,
}

impl SaveInvoiceUseCase {
  pub fn new(invoices: Arc<dyn InvoiceRepository>) -> Self {
    Self { invoices }
  }

  pub async fn execute(&self, draft: &InvoiceDraft) -> Result<Invoice, SaveInvoiceError> {
    let updating = draft.is_edit();
    match draft.submit(self.invoices.as_ref()).await {
      Ok(saved) => Ok(saved),
      Err(SubmitError::Invalid(fields)) => Err(SaveInvoiceError::Invalid(fields)),
      Err(SubmitError::Api(err)) => {
        tracing::error!(invoice_id = ?draft.id(), error = %err, "failed to save invoice");
        let notice = if updating {
          "Error updating invoice"
        } else {
          "Error creating invoice"
        };
        Err(UseCaseError::new(notice, err).into())
      }
    }
  }
}
