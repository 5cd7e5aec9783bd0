// storefront_cart/src/config.rs

use crate::error::{CartError, CartResult};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartClientConfig {
  /// Prefix for every endpoint, e.g. `http://localhost:3000/api`.
  pub api_base_url: String,
  pub api_token: Option<String>,
  /// Cart calls are unbounded unless this is set.
  pub request_timeout: Option<Duration>,
  pub catalog_timeout: Duration,
}

impl Default for CartClientConfig {
  fn default() -> Self {
    Self {
      api_base_url: DEFAULT_API_BASE_URL.to_string(),
      api_token: None,
      request_timeout: None,
      catalog_timeout: Duration::from_secs(DEFAULT_CATALOG_TIMEOUT_SECS),
    }
  }
}

impl CartClientConfig {
  /// Loads `.env` if present, then reads the process environment.
  pub fn from_env() -> CartResult<Self> {
    dotenv().ok();
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable lookup; `from_env` passes the
  /// process environment.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CartResult<Self> {
    let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let api_base_url = get("CART_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
      return Err(CartError::Config(format!(
        "CART_API_BASE_URL must be an http(s) URL, got '{}'",
        api_base_url
      )));
    }

    let api_token = get("CART_API_TOKEN");

    let request_timeout = get("CART_REQUEST_TIMEOUT_SECS")
      .map(|raw| parse_secs("CART_REQUEST_TIMEOUT_SECS", &raw))
      .transpose()?;

    let catalog_timeout = get("CATALOG_TIMEOUT_SECS")
      .map(|raw| parse_secs("CATALOG_TIMEOUT_SECS", &raw))
      .transpose()?
      .unwrap_or_else(|| Duration::from_secs(DEFAULT_CATALOG_TIMEOUT_SECS));

    tracing::info!(
      api_base_url = %api_base_url,
      has_token = api_token.is_some(),
      request_timeout = ?request_timeout,
      "Cart client configuration loaded."
    );

    Ok(Self {
      api_base_url,
      api_token,
      request_timeout,
      catalog_timeout,
    })
  }

  /// Scheme, host and port of `api_base_url`, used to build image URLs.
  pub fn origin(&self) -> &str {
    let after_scheme = self.api_base_url.find("://").map(|i| i + 3).unwrap_or(0);
    match self.api_base_url[after_scheme..].find('/') {
      Some(slash) => &self.api_base_url[..after_scheme + slash],
      None => &self.api_base_url,
    }
  }
}

fn parse_secs(name: &str, raw: &str) -> CartResult<Duration> {
  let secs = raw
    .parse::<u64>()
    .map_err(|e| CartError::Config(format!("Invalid {}: {}", name, e)))?;
  if secs == 0 {
    return Err(CartError::Config(format!("{} must be greater than zero", name)));
  }
  Ok(Duration::from_secs(secs))
}
