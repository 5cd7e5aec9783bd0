// demos/storefront_app/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use storefront_cart::CartError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Cart client error: {source}")]
  Cart {
    #[from]
    source: CartError,
  },
}

// The mock service answers with `{"message": ...}` bodies, the shape the cart
// client reads its failure text from.
impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({ "message": m })),
      AppError::Auth(m) => HttpResponse::Unauthorized().json(json!({ "message": m })),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({ "message": m })),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({ "message": "Configuration issue", "detail": m }))
      }
      AppError::Cart { source } => {
        HttpResponse::BadGateway().json(json!({ "message": "Upstream cart error", "detail": source.to_string() }))
      }
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::http::StatusCode;

  #[test]
  fn every_variant_maps_to_its_status() {
    let cases = [
      (AppError::Validation("bad".to_string()), StatusCode::BAD_REQUEST),
      (AppError::Auth("Invalid or expired token".to_string()), StatusCode::UNAUTHORIZED),
      (AppError::NotFound("Cart not found".to_string()), StatusCode::NOT_FOUND),
      (AppError::Config("port".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
      (
        AppError::from(CartError::Timeout("slow".to_string())),
        StatusCode::BAD_GATEWAY,
      ),
    ];
    for (err, status) in cases {
      assert_eq!(err.error_response().status(), status, "{}", err);
    }
  }
}
