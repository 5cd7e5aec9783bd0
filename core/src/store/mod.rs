// storefront_cart/src/store/mod.rs

//! The cart state store: a locally cached, eventually consistent view of the
//! remote cart.
//!
//! Every successful round trip replaces the item list with what the server
//! returned; the store never merges or patches items itself. Failures are
//! recorded in `CartState::error` and reported through the optional
//! notifier, never returned to the caller.
//!
//! There is no in-flight guarding. Two overlapping operations both run, and
//! whichever response lands last decides the visible state.

mod clear;
mod load;
mod mutations;
mod update;

use crate::api::CartApi;
use crate::core::state_data::StateData;
use crate::error::{CartError, CartResult};
use crate::model::item::{self, CartItem, CartState};
use crate::model::wire::ServerCart;
use std::sync::Arc;
use tracing::error;

pub(crate) const ADD_FAILED: &str = "Failed to add item to cart. Please try again.";
pub(crate) const REMOVE_FAILED: &str = "Failed to remove item from cart. Please try again.";
pub(crate) const UPDATE_FAILED: &str = "Failed to update quantity. Please try again.";
pub(crate) const CLEAR_FAILED: &str = "Failed to clear cart. Please try again.";
pub(crate) const CLEARED: &str = "Cart cleared!";

/// Cheap to clone; clones share the same state and transport.
#[derive(Clone)]
pub struct CartStore {
  api: Arc<dyn CartApi>,
  state: StateData<CartState>,
}

impl std::fmt::Debug for CartStore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CartStore").field("state", &self.state).finish()
  }
}

impl CartStore {
  /// Creates a store with an empty cart. Call `load()` to populate it.
  pub fn new(api: impl CartApi + 'static) -> Self {
    Self::with_shared_api(Arc::new(api))
  }

  pub fn with_shared_api(api: Arc<dyn CartApi>) -> Self {
    Self {
      api,
      state: StateData::new(CartState::default()),
    }
  }

  // --- Read side: no network, no side effects ---

  pub fn snapshot(&self) -> CartState {
    self.state.snapshot()
  }

  pub fn items(&self) -> Vec<CartItem> {
    self.state.read().items.clone()
  }

  pub fn cart_data(&self) -> Option<ServerCart> {
    self.state.read().cart_data.clone()
  }

  pub fn is_loading(&self) -> bool {
    self.state.read().loading
  }

  pub fn error(&self) -> Option<String> {
    self.state.read().error.clone()
  }

  pub fn cart_items_count(&self) -> u64 {
    item::cart_items_count(&self.state.map_read(|s| s.items.as_slice()))
  }

  pub fn cart_total(&self) -> f64 {
    item::cart_total(&self.state.map_read(|s| s.items.as_slice()))
  }

  /// Matches either a product id or a line id; callers hold one or the other.
  pub fn is_in_cart(&self, product_id: &str) -> bool {
    self
      .state
      .read()
      .items
      .iter()
      .any(|item| item.product_id == product_id || item.id == product_id)
  }

  /// Total units of `product_id` across all lines (variants may split a
  /// product over several lines).
  pub fn get_item_quantity(&self, product_id: &str) -> u64 {
    self
      .state
      .read()
      .items
      .iter()
      .filter(|item| item.product_id == product_id)
      .map(|item| u64::from(item.quantity))
      .sum()
  }

  // --- State transitions shared by the operations ---

  fn begin(&self) {
    self.state.update(|s| s.loading = true);
  }

  fn settle(&self) {
    self.state.update(|s| s.loading = false);
  }

  fn settle_with_cart(&self, cart: ServerCart) -> usize {
    self.state.update(|s| {
      s.apply_server_cart(cart);
      s.loading = false;
      s.items.len()
    })
  }

  /// Records `err` as the current error and ends the loading phase. Items are
  /// left exactly as they were.
  fn fail(&self, operation: &'static str, err: &CartError) {
    error!(operation, error = %err, "Cart operation failed.");
    let message = err.to_string();
    self.state.update(|s| {
      s.error = Some(message);
      s.loading = false;
    });
  }

  /// Applies a `GET /getCart` outcome. Not-found is an empty cart; any other
  /// failure keeps the stale items and records the error.
  fn apply_load_result(&self, result: CartResult<ServerCart>) {
    match result {
      Ok(cart) => {
        let count = self.settle_with_cart(cart);
        tracing::info!(items = count, "Cart loaded.");
      }
      Err(e) if e.is_not_found() => {
        tracing::info!("No cart exists for this session; using an empty cart.");
        self.state.update(|s| {
          s.reset_to_empty();
          s.error = None;
          s.loading = false;
        });
      }
      Err(e) => self.fail("load", &e),
    }
  }
}
