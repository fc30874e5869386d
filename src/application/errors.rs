use thiserror::Error;

use crate::domain::errors::ApiError;

/// A failed user flow.
///
/// Carries the short, detail-free notice a UI surfaces in a transient
/// notification ("Error creating invoice") and keeps the repository failure
/// as the source for the diagnostic log channel. Raw transport detail never
/// reaches the end user through `Display`.
#[derive(Debug, Error)]
#[error("{notice}")]
pub struct UseCaseError {
  notice: String,
  #[source]
  source: ApiError,
}

impl UseCaseError {
  pub(crate) fn new(notice: impl Into<String>, source: ApiError) -> Self {
    Self {
      notice: notice.into(),
      source,
    }
  }

  /// Message suitable for a timed, dismissible end-user notification.
  pub fn notice(&self) -> &str {
    &self.notice
  }

  /// The classified repository failure behind this notice.
  pub fn api_error(&self) -> &ApiError {
    &self.source
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::error::Error;

  #[test]
  fn test_display_hides_detail_but_source_keeps_it() {
    let err = UseCaseError::new(
      "Error creating invoice",
      ApiError::Transport("connection refused (os error 111)".to_string()),
    );

    assert_eq!(err.to_string(), "Error creating invoice");
    assert!(!err.to_string().contains("connection refused"));
    assert!(
      err
        .source()
        .map(|s| s.to_string().contains("connection refused"))
        .unwrap_or(false)
    );
  }
}
