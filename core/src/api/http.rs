// storefront_cart/src/api/http.rs

//! `CartApi` over HTTP/JSON with reqwest.

use crate::api::session::TokenSource;
use crate::api::CartApi;
use crate::config::CartClientConfig;
use crate::error::{CartError, CartResult};
use crate::model::wire::{AddToCartRequest, DeleteLineResponse, ServerCart};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

pub struct HttpCartApi {
  client: reqwest::Client,
  base_url: String,
  tokens: Arc<dyn TokenSource>,
}

impl HttpCartApi {
  /// `timeout` of `None` leaves cart calls unbounded.
  pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenSource>, timeout: Option<Duration>) -> CartResult<Self> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
      builder = builder.timeout(timeout);
    }
    let client = builder
      .build()
      .map_err(|e| CartError::Config(format!("Failed to build HTTP client: {}", e)))?;
    Ok(Self {
      client,
      base_url: base_url.into().trim_end_matches('/').to_string(),
      tokens,
    })
  }

  pub fn from_config(config: &CartClientConfig, tokens: Arc<dyn TokenSource>) -> CartResult<Self> {
    Self::new(config.api_base_url.clone(), tokens, config.request_timeout)
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  fn request(&self, method: Method, path: &str) -> CartResult<RequestBuilder> {
    let url = format!("{}{}", self.base_url, path);
    let headers = auth_headers(self.tokens.as_ref())?;
    Ok(self.client.request(method, url).headers(headers))
  }

  async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> CartResult<T> {
    let response = request.send().await?;
    read_json(response).await
  }
}

#[async_trait]
impl CartApi for HttpCartApi {
  #[instrument(name = "HttpCartApi::get_cart", skip(self), err(Display))]
  async fn get_cart(&self) -> CartResult<ServerCart> {
    let request = self.request(Method::GET, "/getCart")?;
    self.send_json(request).await
  }

  #[instrument(
    name = "HttpCartApi::add_to_cart",
    skip(self, request),
    fields(product_id = %request.product_id, quantity = request.quantity),
    err(Display)
  )]
  async fn add_to_cart(&self, request: &AddToCartRequest) -> CartResult<ServerCart> {
    let builder = self.request(Method::POST, "/addToCart")?.json(request);
    self.send_json(builder).await
  }

  #[instrument(name = "HttpCartApi::delete_line", skip(self), err(Display))]
  async fn delete_line(&self, line_id: &str) -> CartResult<ServerCart> {
    let path = format!("/deletedProduct/{}", line_id);
    let request = self.request(Method::DELETE, &path)?;
    let response: DeleteLineResponse = self.send_json(request).await?;
    if let Some(message) = &response.message {
      debug!(%message, "Delete acknowledged.");
    }
    Ok(response.into_cart())
  }
}

/// `Content-Type: application/json`, plus `Authorization: Bearer` when the
/// source has a token. A missing token never blocks the request.
pub(crate) fn auth_headers(tokens: &dyn TokenSource) -> CartResult<HeaderMap> {
  let mut headers = HeaderMap::new();
  headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
  if let Some(token) = tokens.token() {
    let value = HeaderValue::from_str(&format!("Bearer {}", token))
      .map_err(|e| CartError::Config(format!("Invalid auth token: {}", e)))?;
    headers.insert(AUTHORIZATION, value);
  }
  Ok(headers)
}

#[derive(Deserialize)]
struct ErrorBody {
  message: Option<String>,
}

/// Reads a successful body as JSON or classifies a failed one.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> CartResult<T> {
  let status = response.status();
  let body = response.text().await?;
  if !status.is_success() {
    return Err(classify_failure(status, &body));
  }
  Ok(serde_json::from_str(&body)?)
}

pub(crate) fn classify_failure(status: StatusCode, body: &str) -> CartError {
  let message = serde_json::from_str::<ErrorBody>(body)
    .ok()
    .and_then(|b| b.message)
    .filter(|m| !m.is_empty())
    .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown status").to_string());
  let lowered = message.to_lowercase();

  if status == StatusCode::NOT_FOUND || lowered.contains("cart not found") {
    return CartError::NotFound(message);
  }
  if status == StatusCode::UNAUTHORIZED
    || lowered.contains("authentication")
    || lowered.contains("token")
    || lowered.contains("unauthorized")
  {
    warn!(status = status.as_u16(), "Server rejected the session credential.");
    return CartError::Unauthorized(message);
  }
  CartError::Status {
    status: status.as_u16(),
    message,
  }
}
