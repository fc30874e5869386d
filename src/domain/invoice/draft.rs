use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::entities::{Invoice, InvoiceItem};
use super::errors::{DraftError, FieldError, SubmitError};
use super::ports::InvoiceRepository;
use crate::domain::catalog::Product;

/// One editable row of the invoice form.
///
/// The row never stores its total: it is derived from quantity and price on
/// every read, so a displayed total can never drift from its inputs. Values
/// are not clamped on entry; `InvoiceDraft::validation_errors` judges them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
  pub product_id: Option<i64>,
  pub quantity: Decimal,
  pub price: Decimal,
}

impl LineItem {
  fn blank() -> Self {
    Self {
      product_id: None,
      quantity: Decimal::ONE,
      price: Decimal::ZERO,
    }
  }

  pub fn total(&self) -> Decimal {
    self.quantity * self.price
  }
}

impl From<&InvoiceItem> for LineItem {
  fn from(item: &InvoiceItem) -> Self {
    Self {
      product_id: Some(item.product_id),
      quantity: item.quantity,
      price: item.price,
    }
  }
}

/// Ordered, mutable collection of line items backing the invoice form.
/// Owned exclusively by one draft; rows are addressed by display index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItems {
  items: Vec<LineItem>,
}

impl LineItems {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&LineItem> {
    self.items.get(index)
  }

  pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
    self.items.iter()
  }

  /// Append a blank row: no product, quantity 1, price 0.
  pub fn add(&mut self) {
    self.items.push(LineItem::blank());
  }

  /// Remove the row at `index`, preserving the relative order of the rest.
  /// Out-of-range indices leave the collection unchanged.
  pub fn remove(&mut self, index: usize) -> Result<(), DraftError> {
    if index >= self.items.len() {
      return Err(DraftError::IndexOutOfRange {
        index,
        len: self.items.len(),
      });
    }
    self.items.remove(index);
    Ok(())
  }

  /// Select a product for the row. When the id is present in the loaded
  /// snapshot, the row price follows the product's current price; an unknown
  /// id keeps whatever price was already entered.
  pub fn set_product(
    &mut self,
    index: usize,
    product_id: i64,
    products: &[Product],
  ) -> Result<(), DraftError> {
    let item = self.item_mut(index)?;
    item.product_id = Some(product_id);
    if let Some(product) = products.iter().find(|p| p.id == product_id) {
      item.price = product.price;
    }
    Ok(())
  }

  pub fn set_quantity(&mut self, index: usize, value: Decimal) -> Result<(), DraftError> {
    self.item_mut(index)?.quantity = value;
    Ok(())
  }

  pub fn set_price(&mut self, index: usize, value: Decimal) -> Result<(), DraftError> {
    self.item_mut(index)?.price = value;
    Ok(())
  }

  /// Derived row total: quantity x price.
  pub fn item_total(&self, index: usize) -> Result<Decimal, DraftError> {
    self
      .items
      .get(index)
      .map(LineItem::total)
      .ok_or(DraftError::IndexOutOfRange {
        index,
        len: self.items.len(),
      })
  }

  /// Sum of all row totals; zero when empty. Order of rows is irrelevant.
  pub fn grand_total(&self) -> Decimal {
    self.items.iter().map(LineItem::total).sum()
  }

  fn item_mut(&mut self, index: usize) -> Result<&mut LineItem, DraftError> {
    let len = self.items.len();
    self
      .items
      .get_mut(index)
      .ok_or(DraftError::IndexOutOfRange { index, len })
  }
}

/// An in-progress invoice edit, distinct from its persisted record.
///
/// Created blank for a new invoice (one empty row pre-added, date set to
/// now) or hydrated wholesale from a fetched record. Discarding the draft
/// discards unsaved edits; nothing is persisted locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
  id: Option<i64>,
  pub client_name: String,
  pub date: DateTime<Utc>,
  pub items: LineItems,
}

impl InvoiceDraft {
  pub fn new() -> Self {
    let mut items = LineItems::new();
    items.add(); // the form always opens with one blank row
    Self {
      id: None,
      client_name: String::new(),
      date: Utc::now(),
      items,
    }
  }

  /// Replace the whole draft from a fetched record and retain its id: the
  /// draft is in edit mode afterwards. No partial merge is attempted.
  pub fn hydrate(&mut self, record: &Invoice) {
    self.id = record.id;
    self.client_name = record.client_name.clone();
    self.date = record.date;
    self.items = LineItems {
      items: record.items.iter().map(LineItem::from).collect(),
    };
  }

  /// The persisted id when editing an existing invoice.
  pub fn id(&self) -> Option<i64> {
    self.id
  }

  pub fn is_edit(&self) -> bool {
    self.id.is_some()
  }

  pub fn grand_total(&self) -> Decimal {
    self.items.grand_total()
  }

  /// Field-keyed validation messages; empty means submit-eligible.
  ///
  /// The date field cannot be unset here (it always holds a value), so the
  /// remaining rules are: non-blank client name, at least one row, and per
  /// row a selected product, quantity >= 1 and price >= 0.
  pub fn validation_errors(&self) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if self.client_name.trim().is_empty() {
      errors.push(FieldError::new("clientName", "Client name is required"));
    }
    if self.items.is_empty() {
      errors.push(FieldError::new("items", "At least one item is required"));
    }
    for (i, item) in self.items.iter().enumerate() {
      if item.product_id.is_none() {
        errors.push(FieldError::new(
          format!("items[{i}].productId"),
          "Product is required",
        ));
      }
      if item.quantity < Decimal::ONE {
        errors.push(FieldError::new(
          format!("items[{i}].quantity"),
          "Quantity must be at least 1",
        ));
      }
      if item.price < Decimal::ZERO {
        errors.push(FieldError::new(
          format!("items[{i}].price"),
          "Price cannot be negative",
        ));
      }
    }

    errors
  }

  pub fn is_valid(&self) -> bool {
    self.validation_errors().is_empty()
  }

  /// Wire representation for create/update, with every row total and the
  /// grand total recomputed at this moment. Callers must check validity
  /// first; an invalid draft is refused rather than partially serialized.
  pub fn to_payload(&self) -> Result<Invoice, DraftError> {
    if !self.is_valid() {
      return Err(DraftError::NotSubmittable);
    }
    Ok(self.payload())
  }

  /// Create when the draft has no id, update otherwise. An invalid draft
  /// returns its field errors without any network call; a repository
  /// failure leaves the draft untouched so it can be resubmitted.
  pub async fn submit(&self, repository: &dyn InvoiceRepository) -> Result<Invoice, SubmitError> {
    let errors = self.validation_errors();
    if !errors.is_empty() {
      return Err(SubmitError::Invalid(errors));
    }

    let payload = self.payload();
    let saved = match self.id {
      Some(id) => repository.update(id, &payload).await?,
      None => repository.create(&payload).await?,
    };
    Ok(saved)
  }

  fn payload(&self) -> Invoice {
    let items = self
      .items
      .iter()
      .map(|item| InvoiceItem {
        id: None,
        // Validity is checked before serialization; a missing product can
        // only happen through the unchecked path and maps to 0.
        product_id: item.product_id.unwrap_or_default(),
        product_name: None,
        quantity: item.quantity,
        price: item.price,
        total: Some(item.total()),
      })
      .collect();

    Invoice {
      id: self.id,
      date: self.date,
      client_name: self.client_name.clone(),
      items,
      total: Some(self.grand_total()),
      status: None,
    }
  }
}

impl Default for InvoiceDraft {
  fn default() -> Self {
    Self::new()
  }
}
