use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice as exchanged with the remote API, in both directions: fetched
/// records carry `id` and the server-assigned `status`; submitted payloads
/// omit them. Field names follow the wire (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  pub date: DateTime<Utc>,
  pub client_name: String,
  pub items: Vec<InvoiceItem>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub total: Option<Decimal>,
  /// Assigned and interpreted server-side only; never written by this client.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status: Option<String>,
}

/// One line of a persisted invoice. `total` is informational on responses
/// and recomputed from quantity and price whenever this client submits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  pub product_id: i64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub product_name: Option<String>,
  pub quantity: Decimal,
  pub price: Decimal,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub total: Option<Decimal>,
}
