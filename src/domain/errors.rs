use thiserror::Error;

/// Failures crossing the remote repository boundary.
///
/// Client-side validation problems never appear here: an invalid draft is
/// stopped before any request is made. Every variant is recoverable; the
/// caller keeps its state and may retry by explicit user action.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Connectivity failure, timeout, undecodable body, or a status the
  /// client has no mapping for.
  #[error("transport error: {0}")]
  Transport(String),

  /// The addressed record does not exist server-side.
  #[error("{resource} not found")]
  NotFound { resource: String },

  /// The server rejected a payload this client considered valid.
  #[error("server rejected the request: {0}")]
  ServerValidation(String),
}

impl From<reqwest::Error> for ApiError {
  fn from(err: reqwest::Error) -> Self {
    ApiError::Transport(err.to_string())
  }
}
