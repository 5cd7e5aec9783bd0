// storefront_cart/src/model/item.rs

use crate::model::wire::ServerCart;
use serde::{Deserialize, Serialize};

/// A cart line as the client sees it: the server's line id plus the product
/// fields copied out of the nested product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
  pub id: String,
  pub product_id: String,
  pub name: String,
  pub price: f64,
  pub image: Option<String>,
  pub description: Option<String>,
  pub category: Option<String>,
  pub quantity: u32,
  pub selected_size: Option<String>,
  pub selected_color: Option<String>,
}

impl CartItem {
  pub fn line_total(&self) -> f64 {
    self.price * f64::from(self.quantity)
  }
}

/// What a caller hands to `CartStore::add_item`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewCartItem {
  pub product_id: String,
  /// Display name used in the confirmation notice.
  pub name: Option<String>,
  /// `None` or `Some(0)` both mean one unit.
  pub quantity: Option<u32>,
  pub selected_size: Option<String>,
  pub selected_color: Option<String>,
}

impl NewCartItem {
  pub fn new(product_id: impl Into<String>) -> Self {
    Self {
      product_id: product_id.into(),
      ..Default::default()
    }
  }

  pub fn named(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn with_quantity(mut self, quantity: u32) -> Self {
    self.quantity = Some(quantity);
    self
  }

  pub fn with_size(mut self, size: impl Into<String>) -> Self {
    self.selected_size = Some(size.into());
    self
  }

  pub fn with_color(mut self, color: impl Into<String>) -> Self {
    self.selected_color = Some(color.into());
    self
  }

  pub fn effective_quantity(&self) -> u32 {
    match self.quantity {
      Some(q) if q > 0 => q,
      _ => 1,
    }
  }

  /// `"<name> added to cart!"`, with `" (Size: M, Color: Red)"` appended
  /// when variant selectors are set.
  pub fn added_message(&self) -> String {
    let name = self.name.as_deref().unwrap_or("Item");
    let mut message = format!("{} added to cart!", name);

    let mut details = Vec::new();
    if let Some(size) = &self.selected_size {
      details.push(format!("Size: {}", size));
    }
    if let Some(color) = &self.selected_color {
      details.push(format!("Color: {}", color));
    }
    if !details.is_empty() {
      message.push_str(&format!(" ({})", details.join(", ")));
    }
    message
  }
}

/// The locally cached view of the cart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
  pub items: Vec<CartItem>,
  pub cart_data: Option<ServerCart>,
  pub loading: bool,
  pub error: Option<String>,
}

impl CartState {
  /// Replaces the item list wholesale with the transformed server cart.
  pub(crate) fn apply_server_cart(&mut self, cart: ServerCart) {
    self.items = cart.to_cart_items();
    self.cart_data = Some(cart);
    self.error = None;
  }

  pub(crate) fn reset_to_empty(&mut self) {
    self.items.clear();
    self.cart_data = None;
  }

  pub fn find(&self, item_id: &str) -> Option<&CartItem> {
    self.items.iter().find(|item| item.id == item_id)
  }
}

/// Sum of quantities across all lines.
pub fn cart_items_count(items: &[CartItem]) -> u64 {
  items.iter().map(|item| u64::from(item.quantity)).sum()
}

/// Sum of `price * quantity` across all lines.
pub fn cart_total(items: &[CartItem]) -> f64 {
  items.iter().map(CartItem::line_total).sum()
}
