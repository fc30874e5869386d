use std::fmt;
use thiserror::Error;

use crate::domain::errors::ApiError;

/// A single failed form field, keyed the way the wire names it
/// (`clientName`, `items[2].quantity`, ...). The UI layer decides how to
/// render these; the draft only reports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
  pub field: String,
  pub message: String,
}

impl FieldError {
  pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      field: field.into(),
      message: message.into(),
    }
  }
}

impl fmt::Display for FieldError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.field, self.message)
  }
}

/// Local draft manipulation errors. These never involve the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
  #[error("index {index} out of range for {len} line items")]
  IndexOutOfRange { index: usize, len: usize },

  /// Precondition violation on `to_payload`: callers must check validity
  /// before serializing.
  #[error("draft is not valid for submission")]
  NotSubmittable,
}

/// Outcome of submitting a draft to the repository.
#[derive(Debug, Error)]
pub enum SubmitError {
  /// The draft failed client-side validation; no request was made.
  #[error("draft failed validation on {} field(s)", .0.len())]
  Invalid(Vec<FieldError>),

  #[error(transparent)]
  Api(#[from] ApiError),
}
