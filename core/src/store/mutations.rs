// storefront_cart/src/store/mutations.rs

//! Single-request mutations: add and remove.

use super::{CartStore, ADD_FAILED, REMOVE_FAILED};
use crate::model::item::NewCartItem;
use crate::model::wire::AddToCartRequest;
use crate::notify::{emit, Notice, Notifier};
use tracing::{info, instrument};

impl CartStore {
  /// Asks the server to add `item`. The server decides how the new line
  /// merges with existing ones; the store just adopts the returned cart.
  #[instrument(
    name = "CartStore::add_item",
    skip(self, item, notify),
    fields(product_id = %item.product_id, quantity = item.effective_quantity())
  )]
  pub async fn add_item(&self, item: NewCartItem, notify: Option<&dyn Notifier>) {
    self.begin();
    let request = AddToCartRequest {
      product_id: item.product_id.clone(),
      quantity: item.effective_quantity(),
    };

    match self.api.add_to_cart(&request).await {
      Ok(cart) => {
        let count = self.settle_with_cart(cart);
        info!(items = count, "Item added to cart.");
        emit(notify, Notice::cart(item.added_message()));
      }
      Err(e) => {
        self.fail("add_item", &e);
        emit(notify, Notice::error(ADD_FAILED));
      }
    }
  }

  /// Deletes one line. The removed item's name is taken from the local cart
  /// before the request, since the server's answer no longer contains it.
  #[instrument(name = "CartStore::remove_item", skip(self, notify))]
  pub async fn remove_item(&self, item_id: &str, notify: Option<&dyn Notifier>) {
    self.begin();
    let removed_name = self.state.read().find(item_id).map(|item| item.name.clone());

    match self.api.delete_line(item_id).await {
      Ok(cart) => {
        let count = self.settle_with_cart(cart);
        info!(items = count, "Line removed from cart.");
        if let Some(name) = removed_name {
          emit(notify, Notice::info(format!("{} removed from cart!", name)));
        }
      }
      Err(e) => {
        self.fail("remove_item", &e);
        emit(notify, Notice::error(REMOVE_FAILED));
      }
    }
  }
}
