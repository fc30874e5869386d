use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product, read-only to this client. Referenced from invoice rows
/// by id; its price pre-fills a row when the product is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub price: Decimal,
}

/// Client directory entry. The admin surface only lists and deletes these;
/// invoices reference clients by free-text name, not by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
  pub id: i64,
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
}
