use billbook::infrastructure::config::ApiConfig;
use billbook::infrastructure::telemetry;

/// ApiConfig pointed at a mock server, with the stock area paths.
/// Also installs telemetry so repository failures are visible under
/// `RUST_LOG` when a test goes wrong.
pub fn test_config(base_url: &str) -> ApiConfig {
  telemetry::init();
  ApiConfig {
    base_url: base_url.to_string(),
    auth_path: "api/auth".to_string(),
    invoices_path: "api/invoices".to_string(),
    products_path: "api/products".to_string(),
    clients_path: "api/clients".to_string(),
    request_timeout_seconds: 5,
  }
}
