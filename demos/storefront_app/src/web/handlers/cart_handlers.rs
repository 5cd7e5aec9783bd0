// demos/storefront_app/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::SessionUser;

#[derive(Deserialize, Debug)]
pub struct AddToCartPayload {
  #[serde(rename = "productId")]
  pub product_id: String,
  pub quantity: Option<i64>,
}

#[instrument(name = "handler::get_cart", skip(app_state, user), fields(user_id = %user.user_id))]
pub async fn get_cart_handler(app_state: web::Data<AppState>, user: SessionUser) -> Result<HttpResponse, AppError> {
  let cart = app_state.carts.get_cart(&user.user_id)?;
  info!(lines = cart.items.len(), "Cart served.");
  Ok(HttpResponse::Ok().json(cart))
}

#[instrument(
  name = "handler::add_to_cart",
  skip(app_state, payload, user),
  fields(user_id = %user.user_id, product_id = %payload.product_id, quantity = ?payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<AddToCartPayload>,
  user: SessionUser,
) -> Result<HttpResponse, AppError> {
  let quantity = payload.quantity.unwrap_or(1);
  let quantity = u32::try_from(quantity)
    .map_err(|_| AppError::Validation(format!("Invalid quantity: {}", quantity)))?;
  let cart = app_state.carts.add_to_cart(&user.user_id, &payload.product_id, quantity)?;
  Ok(HttpResponse::Ok().json(cart))
}

/// Unlike the other two cart endpoints, this one wraps the cart in an
/// envelope next to a confirmation message.
#[instrument(name = "handler::delete_line", skip(app_state, path, user), fields(user_id = %user.user_id, line_id = %path.as_ref()))]
pub async fn delete_line_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  user: SessionUser,
) -> Result<HttpResponse, AppError> {
  let line_id = path.into_inner();
  let cart = app_state.carts.delete_line(&user.user_id, &line_id)?;
  Ok(HttpResponse::Ok().json(json!({
      "message": "Product removed from cart",
      "cart": cart
  })))
}
