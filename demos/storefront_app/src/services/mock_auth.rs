// demos/storefront_app/src/services/mock_auth.rs

//! Token issuing for the mock. Any well-formed email with a non-empty
//! password logs in; tokens live until the process exits.

use crate::errors::{AppError, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::{info, instrument, warn};
use uuid::Uuid;

#[derive(Default)]
pub struct MockAuthService {
  /// token -> email
  issued: Mutex<HashMap<String, String>>,
}

impl MockAuthService {
  pub fn new() -> Self {
    Self::default()
  }

  #[instrument(name = "mock::login", skip(self, password))]
  pub fn login(&self, email: &str, password: &str) -> Result<String> {
    let email = email.trim();
    if !email.contains('@') || password.is_empty() {
      warn!("Login rejected.");
      return Err(AppError::Auth("Invalid email or password".to_string()));
    }
    let token = format!("token-{}", Uuid::new_v4().simple());
    self.issued.lock().insert(token.clone(), email.to_string());
    info!("Token issued.");
    Ok(token)
  }

  /// The email a token was issued to.
  pub fn user_for(&self, token: &str) -> Option<String> {
    self.issued.lock().get(token).cloned()
  }
}
