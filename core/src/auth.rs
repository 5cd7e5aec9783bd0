// storefront_cart/src/auth.rs

//! Login against `POST /login`. The issued token lands in the shared
//! `StaticToken`, so the cart and catalog clients built on the same source
//! pick it up on their next request.

use crate::api::session::{StaticToken, TokenSource};
use crate::config::CartClientConfig;
use crate::error::{CartError, CartResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Serialize)]
struct LoginRequest<'a> {
  email: &'a str,
  password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
  token: Option<String>,
  #[serde(default)]
  user: Option<serde_json::Value>,
  #[serde(default)]
  message: Option<String>,
}

/// A successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSession {
  pub token: String,
  /// Whatever user record the server chose to include.
  pub user: Option<serde_json::Value>,
}

pub struct AuthClient {
  client: reqwest::Client,
  base_url: String,
  tokens: Arc<StaticToken>,
}

impl AuthClient {
  pub fn new(config: &CartClientConfig, tokens: Arc<StaticToken>) -> CartResult<Self> {
    let client = reqwest::Client::builder()
      .build()
      .map_err(|e| CartError::Config(format!("Failed to build HTTP client: {}", e)))?;
    Ok(Self {
      client,
      base_url: config.api_base_url.trim_end_matches('/').to_string(),
      tokens,
    })
  }

  /// Exchanges credentials for a token and stores it. A failed login leaves
  /// the current token alone.
  #[instrument(name = "AuthClient::login", skip(self, password), err(Display))]
  pub async fn login(&self, email: &str, password: &str) -> CartResult<LoginSession> {
    let response = self
      .client
      .post(format!("{}/login", self.base_url))
      .json(&LoginRequest { email, password })
      .send()
      .await?;
    let status = response.status();
    let body = response.text().await?;
    let parsed: Option<LoginResponse> = serde_json::from_str(&body).ok();

    if !status.is_success() {
      let message = parsed
        .and_then(|r| r.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "Login failed".to_string());
      warn!(status = status.as_u16(), %message, "Login rejected.");
      if status.is_client_error() {
        return Err(CartError::Unauthorized(message));
      }
      return Err(CartError::Status {
        status: status.as_u16(),
        message,
      });
    }

    let LoginResponse { token, user, .. } = match parsed {
      Some(parsed) => parsed,
      None => return Err(CartError::Internal("Login response was not JSON".to_string())),
    };
    let token = token
      .filter(|t| !t.trim().is_empty())
      .ok_or_else(|| CartError::Internal("Login response carried no token".to_string()))?;

    self.tokens.set(Some(token.clone()));
    info!("Login successful.");
    Ok(LoginSession { token, user })
  }

  pub fn logout(&self) {
    self.tokens.clear();
    info!("Logged out.");
  }

  pub fn is_authenticated(&self) -> bool {
    self.tokens.token().is_some()
  }
}
