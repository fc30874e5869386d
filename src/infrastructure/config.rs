use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

fn default_auth_path() -> String {
  "api/auth".to_string()
}

fn default_invoices_path() -> String {
  "api/invoices".to_string()
}

fn default_products_path() -> String {
  "api/products".to_string()
}

fn default_clients_path() -> String {
  "api/clients".to_string()
}

fn default_request_timeout() -> u64 {
  30
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub api: ApiConfig,
}

/// Remote API configuration: one base URL plus the per-area sub-paths the
/// concrete endpoints derive from. Deployments that still expose legacy
/// paths (e.g. `api/factures`) override the defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
  pub base_url: String,
  #[serde(default = "default_auth_path")]
  pub auth_path: String,
  #[serde(default = "default_invoices_path")]
  pub invoices_path: String,
  #[serde(default = "default_products_path")]
  pub products_path: String,
  #[serde(default = "default_clients_path")]
  pub clients_path: String,
  #[serde(default = "default_request_timeout")]
  pub request_timeout_seconds: u64,
}

impl ApiConfig {
  fn join(&self, path: &str) -> String {
    format!(
      "{}/{}",
      self.base_url.trim_end_matches('/'),
      path.trim_start_matches('/')
    )
  }

  pub fn auth_url(&self) -> String {
    self.join(&self.auth_path)
  }

  pub fn invoices_url(&self) -> String {
    self.join(&self.invoices_path)
  }

  pub fn products_url(&self) -> String {
    self.join(&self.products_path)
  }

  pub fn clients_url(&self) -> String {
    self.join(&self.clients_path)
  }
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override earlier ones):
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists)
  /// 4. Environment variables with BILLBOOK_ prefix
  ///
  /// Environment variables use the BILLBOOK_ prefix and are separated by
  /// double underscores:
  /// - `BILLBOOK_API__BASE_URL=https://api.example.com`
  /// - `BILLBOOK_API__INVOICES_PATH=api/factures`
  /// - `BILLBOOK_API__REQUEST_TIMEOUT_SECONDS=10`
  ///
  /// # Errors
  ///
  /// Returns a `ConfigError` if required files or values are missing, or if
  /// a value has an invalid type.
  pub fn load() -> Result<Self, ConfigError> {
    dotenvy::dotenv().ok();

    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("BILLBOOK")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}
