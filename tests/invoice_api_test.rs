use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use billbook::domain::catalog::Product;
use billbook::domain::errors::ApiError;
use billbook::domain::invoice::{InvoiceDraft, InvoiceRepository, SubmitError};
use billbook::infrastructure::http::{HttpInvoiceRepository, build_client};

mod common;

fn repository(server: &MockServer) -> HttpInvoiceRepository {
  let config = common::test_config(&server.uri());
  let http = build_client(&config).expect("client builds");
  HttpInvoiceRepository::new(http, &config)
}

fn invoice_json(id: i64) -> serde_json::Value {
  json!({
    "id": id,
    "date": "2026-08-01T00:00:00Z",
    "clientName": "Acme Corp",
    "items": [
      {"id": 1, "productId": 1, "productName": "Widget", "quantity": 3, "price": 10, "total": 30}
    ],
    "total": 30,
    "status": "DRAFT"
  })
}

#[tokio::test]
async fn lists_invoices() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/invoices"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([invoice_json(1), invoice_json(2)])))
    .expect(1)
    .mount(&server)
    .await;

  let invoices = repository(&server).list().await.expect("list succeeds");
  assert_eq!(invoices.len(), 2);
  assert_eq!(invoices[0].id, Some(1));
  assert_eq!(invoices[0].client_name, "Acme Corp");
  assert_eq!(invoices[0].total, Some(dec!(30)));
}

#[tokio::test]
async fn gets_one_invoice() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/invoices/12"))
    .respond_with(ResponseTemplate::new(200).set_body_json(invoice_json(12)))
    .mount(&server)
    .await;

  let invoice = repository(&server).get(12).await.expect("get succeeds");
  assert_eq!(invoice.id, Some(12));
  assert_eq!(invoice.status.as_deref(), Some("DRAFT"));
  assert_eq!(invoice.items[0].quantity, dec!(3));
}

#[tokio::test]
async fn missing_invoice_maps_to_not_found() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/invoices/99"))
    .respond_with(ResponseTemplate::new(404))
    .mount(&server)
    .await;

  let err = repository(&server).get(99).await.unwrap_err();
  assert!(matches!(err, ApiError::NotFound { .. }));
  assert_eq!(err.to_string(), "invoice 99 not found");
}

#[tokio::test]
async fn server_rejection_maps_to_validation_error() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/api/invoices"))
    .respond_with(ResponseTemplate::new(422).set_body_string("total mismatch"))
    .mount(&server)
    .await;

  let payload: billbook::domain::invoice::Invoice =
    serde_json::from_value(invoice_json(0)).unwrap();
  let err = repository(&server).create(&payload).await.unwrap_err();
  match err {
    ApiError::ServerValidation(detail) => assert!(detail.contains("total mismatch")),
    other => panic!("expected ServerValidation, got {other:?}"),
  }
}

#[tokio::test]
async fn unexpected_status_maps_to_transport() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/invoices"))
    .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
    .mount(&server)
    .await;

  let err = repository(&server).list().await.unwrap_err();
  match err {
    ApiError::Transport(detail) => assert!(detail.contains("500")),
    other => panic!("expected Transport, got {other:?}"),
  }
}

#[tokio::test]
async fn updates_via_put_on_record_url() {
  let server = MockServer::start().await;
  Mock::given(method("PUT"))
    .and(path("/api/invoices/12"))
    .and(body_partial_json(json!({"clientName": "Acme Corp"})))
    .respond_with(ResponseTemplate::new(200).set_body_json(invoice_json(12)))
    .expect(1)
    .mount(&server)
    .await;

  let payload: billbook::domain::invoice::Invoice =
    serde_json::from_value(invoice_json(12)).unwrap();
  let saved = repository(&server)
    .update(12, &payload)
    .await
    .expect("update succeeds");
  assert_eq!(saved.id, Some(12));
}

#[tokio::test]
async fn deletes_by_id() {
  let server = MockServer::start().await;
  Mock::given(method("DELETE"))
    .and(path("/api/invoices/12"))
    .respond_with(ResponseTemplate::new(204))
    .expect(1)
    .mount(&server)
    .await;

  repository(&server).delete(12).await.expect("delete succeeds");
}

// New draft -> pick product A (price 10) -> quantity 3 -> totals are 30 and
// submit hits create exactly once with the recomputed total.
#[tokio::test]
async fn new_draft_end_to_end_creates_once_with_recomputed_total() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/api/invoices"))
    .and(body_partial_json(json!({"clientName": "Acme Corp", "total": 30.0})))
    .respond_with(ResponseTemplate::new(201).set_body_json(invoice_json(55)))
    .expect(1)
    .mount(&server)
    .await;

  let products = vec![Product {
    id: 1,
    name: "Widget".to_string(),
    price: dec!(10),
  }];

  let mut draft = InvoiceDraft::new();
  draft.client_name = "Acme Corp".to_string();
  draft.items.set_product(0, 1, &products).unwrap();
  draft.items.set_quantity(0, dec!(3)).unwrap();

  assert_eq!(draft.items.item_total(0).unwrap(), dec!(30));
  assert_eq!(draft.grand_total(), dec!(30));
  assert!(draft.is_valid());

  let repo = repository(&server);
  let saved = draft.submit(&repo).await.expect("submit succeeds");
  assert_eq!(saved.id, Some(55));
}

// A draft with an empty client name performs zero network calls.
#[tokio::test]
async fn invalid_draft_submits_nothing() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/api/invoices"))
    .respond_with(ResponseTemplate::new(201).set_body_json(invoice_json(1)))
    .expect(0)
    .mount(&server)
    .await;

  let products = vec![Product {
    id: 1,
    name: "Widget".to_string(),
    price: dec!(10),
  }];

  let mut draft = InvoiceDraft::new();
  draft.items.set_product(0, 1, &products).unwrap();
  // client_name left empty

  let repo = repository(&server);
  let err = draft.submit(&repo).await.unwrap_err();
  match err {
    SubmitError::Invalid(fields) => {
      assert!(fields.iter().any(|f| f.field == "clientName"));
    }
    other => panic!("expected validation failure, got {other:?}"),
  }
}

// A failed submit leaves the draft intact for resubmission.
#[tokio::test]
async fn failed_submit_allows_resubmission() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/api/invoices"))
    .respond_with(ResponseTemplate::new(500))
    .up_to_n_times(1)
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/api/invoices"))
    .respond_with(ResponseTemplate::new(201).set_body_json(invoice_json(7)))
    .mount(&server)
    .await;

  let products = vec![Product {
    id: 1,
    name: "Widget".to_string(),
    price: dec!(10),
  }];

  let mut draft = InvoiceDraft::new();
  draft.client_name = "Acme Corp".to_string();
  draft.items.set_product(0, 1, &products).unwrap();

  let repo = repository(&server);
  let before = draft.clone();
  assert!(draft.submit(&repo).await.is_err());
  assert_eq!(draft, before);

  let saved = draft.submit(&repo).await.expect("retry succeeds");
  assert_eq!(saved.id, Some(7));
}
