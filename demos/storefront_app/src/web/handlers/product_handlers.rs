// demos/storefront_app/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::catalog_product::ProductPayload;
use crate::state::AppState;
use crate::web::extractors::SessionUser;

#[instrument(name = "handler::list_products", skip(app_state, user), fields(user_id = %user.user_id))]
pub async fn list_products_handler(app_state: web::Data<AppState>, user: SessionUser) -> Result<HttpResponse, AppError> {
  let products = app_state.carts.products();
  info!("Serving {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::add_product", skip(app_state, payload, user), fields(user_id = %user.user_id))]
pub async fn add_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ProductPayload>,
  user: SessionUser,
) -> Result<HttpResponse, AppError> {
  user.require_signed_in()?;
  let product = app_state.carts.add_product(payload.into_inner())?;
  Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload, user), fields(user_id = %user.user_id))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<ProductPayload>,
  user: SessionUser,
) -> Result<HttpResponse, AppError> {
  user.require_signed_in()?;
  let product = app_state.carts.update_product(&path.into_inner(), payload.into_inner())?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path, user), fields(user_id = %user.user_id))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  user: SessionUser,
) -> Result<HttpResponse, AppError> {
  user.require_signed_in()?;
  app_state.carts.delete_product(&path.into_inner())?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Product deleted" })))
}
