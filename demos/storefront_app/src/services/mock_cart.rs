// demos/storefront_app/src/services/mock_cart.rs

//! In-memory stand-in for the remote cart service, one cart per user, plus
//! the product catalog the carts point into.

use crate::errors::{AppError, Result};
use crate::models::catalog_product::{CatalogProduct, ProductPayload};
use crate::models::stored_cart::{StoredCart, StoredLine};
use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use storefront_cart::ServerCart;
use tracing::{info, instrument, warn};
use uuid::Uuid;

pub struct MockCartService {
  catalog: RwLock<Vec<CatalogProduct>>,
  carts: Mutex<HashMap<String, StoredCart>>,
}

impl MockCartService {
  pub fn new(catalog: Vec<CatalogProduct>) -> Self {
    Self {
      catalog: RwLock::new(catalog),
      carts: Mutex::new(HashMap::new()),
    }
  }

  pub fn products(&self) -> Vec<CatalogProduct> {
    self.catalog.read().clone()
  }

  #[instrument(name = "mock::get_cart", skip(self))]
  pub fn get_cart(&self, user_id: &str) -> Result<ServerCart> {
    let carts = self.carts.lock();
    let cart = carts
      .get(user_id)
      .ok_or_else(|| AppError::NotFound("Cart not found".to_string()))?;
    Ok(cart.to_server_cart(&self.catalog.read()))
  }

  /// Adds `quantity` of `product_id`, merging into an existing line of the
  /// same product. Creates the cart on first use.
  #[instrument(name = "mock::add_to_cart", skip(self))]
  pub fn add_to_cart(&self, user_id: &str, product_id: &str, quantity: u32) -> Result<ServerCart> {
    if quantity == 0 {
      return Err(AppError::Validation("Quantity must be at least 1".to_string()));
    }
    if !self.catalog.read().iter().any(|p| p.id == product_id) {
      warn!(product_id, "Add rejected: unknown product.");
      return Err(AppError::NotFound("Product not found".to_string()));
    }

    let mut carts = self.carts.lock();
    let cart = carts
      .entry(user_id.to_string())
      .or_insert_with(|| StoredCart::new(Uuid::new_v4().simple().to_string(), user_id));

    match cart.lines.iter_mut().find(|line| line.product_id == product_id) {
      Some(line) => line.quantity += quantity,
      None => cart.lines.push(StoredLine {
        id: Uuid::new_v4().simple().to_string(),
        product_id: product_id.to_string(),
        quantity,
        selected_size: None,
        selected_color: None,
      }),
    }
    cart.updated_at = Utc::now();
    info!(lines = cart.lines.len(), "Cart updated.");
    Ok(cart.to_server_cart(&self.catalog.read()))
  }

  #[instrument(name = "mock::delete_line", skip(self))]
  pub fn delete_line(&self, user_id: &str, line_id: &str) -> Result<ServerCart> {
    let mut carts = self.carts.lock();
    let cart = carts
      .get_mut(user_id)
      .ok_or_else(|| AppError::NotFound("Cart not found".to_string()))?;
    let before = cart.lines.len();
    cart.lines.retain(|line| line.id != line_id);
    if cart.lines.len() == before {
      return Err(AppError::NotFound("Item not found in cart".to_string()));
    }
    cart.updated_at = Utc::now();
    Ok(cart.to_server_cart(&self.catalog.read()))
  }

  #[instrument(name = "mock::add_product", skip(self, payload), fields(title = %payload.title))]
  pub fn add_product(&self, payload: ProductPayload) -> Result<CatalogProduct> {
    validate_payload(&payload)?;
    let product = CatalogProduct::from_payload(format!("p-{}", Uuid::new_v4().simple()), payload);
    self.catalog.write().push(product.clone());
    info!(product_id = %product.id, "Product added.");
    Ok(product)
  }

  #[instrument(name = "mock::update_product", skip(self, payload))]
  pub fn update_product(&self, product_id: &str, payload: ProductPayload) -> Result<CatalogProduct> {
    validate_payload(&payload)?;
    let mut catalog = self.catalog.write();
    let slot = catalog
      .iter_mut()
      .find(|p| p.id == product_id)
      .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
    *slot = CatalogProduct::from_payload(product_id.to_string(), payload);
    Ok(slot.clone())
  }

  /// Carts that still hold the product keep their lines; those come back
  /// with a `null` product.
  #[instrument(name = "mock::delete_product", skip(self))]
  pub fn delete_product(&self, product_id: &str) -> Result<()> {
    let mut catalog = self.catalog.write();
    let before = catalog.len();
    catalog.retain(|p| p.id != product_id);
    if catalog.len() == before {
      return Err(AppError::NotFound("Product not found".to_string()));
    }
    info!(product_id, "Product deleted.");
    Ok(())
  }
}

fn validate_payload(payload: &ProductPayload) -> Result<()> {
  if payload.title.trim().is_empty() {
    return Err(AppError::Validation("Title is required".to_string()));
  }
  if !payload.price.is_finite() || payload.price < 0.0 {
    return Err(AppError::Validation(format!("Invalid price: {}", payload.price)));
  }
  Ok(())
}
