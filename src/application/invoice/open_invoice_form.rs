use std::sync::Arc;

use crate::application::errors::UseCaseError;
use crate::domain::catalog::{Product, ProductRepository};
use crate::domain::invoice::{InvoiceDraft, InvoiceRepository};

/// Everything the invoice form needs for one editing session.
#[derive(Debug)]
pub struct InvoiceForm {
  pub draft: InvoiceDraft,
  /// Product snapshot for price lookups. Immutable for the lifetime of the
  /// session; catalog changes elsewhere appear only after reopening.
  pub products: Vec<Product>,
}

/// Prepares the invoice form: loads the product snapshot and either starts
/// a blank draft (create) or hydrates one from the server (edit).
pub struct OpenInvoiceFormUseCase {
  invoices: Arc<dyn InvoiceRepository>,
  products: Arc<dyn ProductRepository>,
}

impl OpenInvoiceFormUseCase {
  pub fn new(invoices: Arc<dyn InvoiceRepository>, products: Arc<dyn ProductRepository>) -> Self {
    Self { invoices, products }
  }

  pub async fn execute(&self, invoice_id: Option<i64>) -> Result<InvoiceForm, UseCaseError> {
    let products = self.products.list().await.map_err(|err| {
      tracing::error!(error = %err, "failed to load products");
      UseCaseError::new("Error loading products", err)
    })?;

    let mut draft = InvoiceDraft::new();
    if let Some(id) = invoice_id {
      let record = self.invoices.get(id).await.map_err(|err| {
        tracing::error!(invoice_id = id, error = %err, "failed to load invoice");
        UseCaseError::new("Error loading invoice", err)
      })?;
      draft.hydrate(&record);
    }

    Ok(InvoiceForm { draft, products })
  }
}
