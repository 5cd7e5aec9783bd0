// storefront_cart/src/catalog.rs

//! Product listing and product admin client. Unlike cart calls, every
//! catalog request is bounded by a timeout.

use crate::api::http::{auth_headers, read_json};
use crate::api::session::TokenSource;
use crate::config::CartClientConfig;
use crate::error::{CartError, CartResult};
use crate::model::product::{CatalogRecord, Product, ProductDraft};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Timeout of the token check, shorter than a listing fetch.
pub const TOKEN_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Product add/update carry a body and get more time than reads.
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
  Valid,
  Invalid(String),
}

pub struct CatalogClient {
  client: reqwest::Client,
  base_url: String,
  origin: String,
  tokens: Arc<dyn TokenSource>,
  fetch_timeout: Duration,
}

impl CatalogClient {
  pub fn new(config: &CartClientConfig, tokens: Arc<dyn TokenSource>) -> CartResult<Self> {
    let client = reqwest::Client::builder()
      .build()
      .map_err(|e| CartError::Config(format!("Failed to build HTTP client: {}", e)))?;
    Ok(Self {
      client,
      base_url: config.api_base_url.trim_end_matches('/').to_string(),
      origin: config.origin().to_string(),
      tokens,
      fetch_timeout: config.catalog_timeout,
    })
  }

  fn products_url(&self) -> String {
    format!("{}/getAllProducts", self.base_url)
  }

  /// Fetches and normalizes the full product list. The token is checked
  /// first; a rejected or missing one fails before the listing request.
  #[instrument(name = "CatalogClient::get_all_products", skip(self), err(Display))]
  pub async fn get_all_products(&self) -> CartResult<Vec<Product>> {
    if let TokenStatus::Invalid(reason) = self.validate_token().await {
      let err = CartError::Unauthorized(format!("Authentication required: {}", reason));
      return Err(self.handle_auth_error(err));
    }
    let records: Vec<CatalogRecord> = self
      .send(
        self.client.get(self.products_url()),
        self.fetch_timeout,
        "Request timed out. The server might be down or unresponsive.",
      )
      .await?;
    let products: Vec<Product> = records
      .into_iter()
      .map(|record| record.into_product(&self.origin))
      .collect();
    info!(count = products.len(), "Catalog fetched.");
    Ok(products)
  }

  /// `POST /productAdd`; answers with the stored product.
  #[instrument(name = "CatalogClient::add_product", skip(self, draft), fields(name = %draft.name), err(Display))]
  pub async fn add_product(&self, draft: &ProductDraft) -> CartResult<Product> {
    self.require_token()?;
    let url = format!("{}/productAdd", self.base_url);
    let record: CatalogRecord = self
      .send(
        self.client.post(url).json(draft),
        UPLOAD_TIMEOUT,
        "Upload timed out. The server might be down or your connection is slow.",
      )
      .await?;
    info!(product_id = %record.id, "Product added.");
    Ok(record.into_product(&self.origin))
  }

  /// `PUT /updateProduct/{id}`; answers with the stored product.
  #[instrument(name = "CatalogClient::update_product", skip(self, draft), err(Display))]
  pub async fn update_product(&self, product_id: &str, draft: &ProductDraft) -> CartResult<Product> {
    self.require_token()?;
    let url = format!("{}/updateProduct/{}", self.base_url, product_id);
    let record: CatalogRecord = self
      .send(
        self.client.put(url).json(draft),
        UPLOAD_TIMEOUT,
        "Update request timed out. The server might be down or your connection is slow.",
      )
      .await?;
    Ok(record.into_product(&self.origin))
  }

  /// `DELETE /deleteProduct/{id}`. The acknowledgement body is not used.
  #[instrument(name = "CatalogClient::delete_product", skip(self), err(Display))]
  pub async fn delete_product(&self, product_id: &str) -> CartResult<()> {
    self.require_token()?;
    let url = format!("{}/deleteProduct/{}", self.base_url, product_id);
    let _ack: serde_json::Value = self
      .send(
        self.client.delete(url),
        self.fetch_timeout,
        "Delete request timed out. The server might be down or unresponsive.",
      )
      .await?;
    info!(%product_id, "Product deleted.");
    Ok(())
  }

  fn require_token(&self) -> CartResult<()> {
    if self.tokens.token().is_none() {
      return Err(CartError::Unauthorized("Authentication required".to_string()));
    }
    Ok(())
  }

  /// Sends with auth headers and a per-call timeout, then decodes the body.
  /// Credential rejections log the session out before the error is returned.
  async fn send<T: DeserializeOwned>(
    &self,
    request: RequestBuilder,
    timeout: Duration,
    timeout_message: &str,
  ) -> CartResult<T> {
    let result: CartResult<T> = async {
      let response = request
        .headers(auth_headers(self.tokens.as_ref())?)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| describe_transport_error(e, timeout_message))?;
      read_json(response).await
    }
    .await;
    result.map_err(|e| self.handle_auth_error(e))
  }

  fn handle_auth_error(&self, err: CartError) -> CartError {
    if matches!(err, CartError::Unauthorized(_)) {
      warn!(error = %err, "Session credential rejected; clearing it.");
      self.tokens.invalidate();
    }
    err
  }

  /// Hits the listing endpoint to check whether the current token is
  /// accepted. Never fails; problems are reported in the status.
  #[instrument(name = "CatalogClient::validate_token", skip(self))]
  pub async fn validate_token(&self) -> TokenStatus {
    if self.tokens.token().is_none() {
      return TokenStatus::Invalid("No token found".to_string());
    }
    let headers = match auth_headers(self.tokens.as_ref()) {
      Ok(headers) => headers,
      Err(e) => return TokenStatus::Invalid(e.to_string()),
    };

    let result = self
      .client
      .get(self.products_url())
      .headers(headers)
      .timeout(TOKEN_CHECK_TIMEOUT)
      .send()
      .await;

    match result {
      Ok(response) if response.status().is_success() => TokenStatus::Valid,
      Ok(response) if response.status() == reqwest::StatusCode::UNAUTHORIZED => {
        warn!("Token rejected by the catalog endpoint.");
        self.tokens.invalidate();
        TokenStatus::Invalid("Token expired".to_string())
      }
      Ok(response) => TokenStatus::Invalid(format!("Server error: {}", response.status().as_u16())),
      Err(e) if e.is_timeout() => TokenStatus::Invalid("Validation request timed out".to_string()),
      Err(e) if e.is_connect() => TokenStatus::Invalid("Connection to server failed".to_string()),
      Err(e) => TokenStatus::Invalid(e.to_string()),
    }
  }
}

fn describe_transport_error(err: reqwest::Error, timeout_message: &str) -> CartError {
  if err.is_timeout() {
    return CartError::Timeout(timeout_message.to_string());
  }
  if err.is_connect() {
    return CartError::Connection("Please check if the API server is running.".to_string());
  }
  CartError::from(err)
}
