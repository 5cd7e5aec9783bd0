// demos/storefront_app/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use storefront_cart::CartClientConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Where `serve-mock` listens.
  pub server_host: String,
  pub server_port: u16,
  /// When set, the mock rejects cart calls without a bearer token.
  pub require_token: bool,
  /// Client side settings used by `session`.
  pub cart: CartClientConfig,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("MOCK_SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("MOCK_SERVER_PORT")
      .unwrap_or_else(|_| "3000".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid MOCK_SERVER_PORT: {}", e)))?;
    let require_token = get_env("MOCK_REQUIRE_TOKEN")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid MOCK_REQUIRE_TOKEN value: {}", e)))?;

    let cart = CartClientConfig::from_env()?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      require_token,
      cart,
    })
  }
}
