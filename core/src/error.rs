// storefront_cart/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
  #[error("Connection to server failed: {0}")]
  Connection(String),

  #[error("Request timed out: {0}")]
  Timeout(String),

  #[error("Network error: {0}")]
  Network(#[source] reqwest::Error),

  #[error("API call failed: {status} {message}")]
  Status { status: u16, message: String },

  #[error("Authentication failed: {0}")]
  Unauthorized(String),

  #[error("Not found: {0}")]
  NotFound(String),

  #[error("Unexpected response body: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Handler missing for step: {step_name}")]
  StepHandlerMissing { step_name: String },

  #[error("Internal cart error: {0}")]
  Internal(String),

  #[error(transparent)]
  Other(#[from] AnyhowError),
}

impl CartError {
  /// True for the "this session has no cart yet" condition, which callers
  /// treat as an empty cart rather than a failure.
  pub fn is_not_found(&self) -> bool {
    matches!(self, CartError::NotFound(_))
  }
}

impl From<reqwest::Error> for CartError {
  fn from(err: reqwest::Error) -> Self {
    if err.is_timeout() {
      return CartError::Timeout(err.to_string());
    }
    if err.is_connect() {
      return CartError::Connection(err.to_string());
    }
    if err.is_decode() {
      // reqwest folds serde failures into its own error; keep the text.
      return CartError::Internal(format!("Failed to decode response: {}", err));
    }
    CartError::Network(err)
  }
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
