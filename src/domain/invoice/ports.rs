use async_trait::async_trait;

use super::entities::Invoice;
use crate::domain::errors::ApiError;

/// Remote CRUD contract for invoices.
///
/// Every call is single-shot and independent: no retry is built in and no
/// transaction spans multiple calls. Implementations resolve exactly once
/// with the persisted record or a classified failure.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
  /// All invoice records, in server order (backs the list view).
  async fn list(&self) -> Result<Vec<Invoice>, ApiError>;

  async fn get(&self, id: i64) -> Result<Invoice, ApiError>;

  /// Persist a new invoice; the response carries the server-assigned id
  /// and status.
  async fn create(&self, payload: &Invoice) -> Result<Invoice, ApiError>;

  async fn update(&self, id: i64, payload: &Invoice) -> Result<Invoice, ApiError>;

  async fn delete(&self, id: i64) -> Result<(), ApiError>;
}
