// storefront_cart/src/model/wire.rs

//! Records as the cart service sends them, plus the adapter that turns them
//! into client-side `CartItem`s.
//!
//! The service speaks Mongo-style JSON: `_id` keys, camelCase fields, and the
//! product of a line populated under `productId`.

use crate::model::item::CartItem;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Product record nested inside a cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerProduct {
  #[serde(rename = "_id")]
  pub id: String,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub price: f64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
}

/// What a line's `productId` holds: normally the populated product, but a
/// bare id when the server skipped population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductRef {
  Populated(ServerProduct),
  Id(String),
}

impl ProductRef {
  pub fn populated(&self) -> Option<&ServerProduct> {
    match self {
      ProductRef::Populated(product) => Some(product),
      ProductRef::Id(_) => None,
    }
  }

  pub fn id(&self) -> &str {
    match self {
      ProductRef::Populated(product) => &product.id,
      ProductRef::Id(id) => id,
    }
  }
}

impl From<ServerProduct> for ProductRef {
  fn from(product: ServerProduct) -> Self {
    ProductRef::Populated(product)
  }
}

/// One line of a server cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerLine {
  #[serde(rename = "_id")]
  pub id: String,
  /// `null` when the referenced product was deleted upstream.
  #[serde(rename = "productId")]
  pub product: Option<ProductRef>,
  pub quantity: u32,
  #[serde(rename = "selectedSize", default, skip_serializing_if = "Option::is_none")]
  pub selected_size: Option<String>,
  #[serde(rename = "selectedColor", default, skip_serializing_if = "Option::is_none")]
  pub selected_color: Option<String>,
}

/// The full cart as returned by `GET /getCart` and `POST /addToCart`.
///
/// Fields the client does not model are kept in `extra` so the stored copy
/// stays a faithful record of the last response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerCart {
  #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
  pub user_id: Option<String>,
  #[serde(default)]
  pub items: Vec<ServerLine>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// Body of `DELETE /deletedProduct/{lineId}`: the cart sits one level deeper
/// than in the other two endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteLineResponse {
  #[serde(default)]
  pub cart: Option<ServerCart>,
  #[serde(default)]
  pub message: Option<String>,
}

impl DeleteLineResponse {
  /// Normalizes to the common cart shape. A response without a cart means the
  /// server has nothing left for this session.
  pub fn into_cart(self) -> ServerCart {
    self.cart.unwrap_or_default()
  }
}

/// Request body for `POST /addToCart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddToCartRequest {
  #[serde(rename = "productId")]
  pub product_id: String,
  pub quantity: u32,
}

impl ServerLine {
  /// Denormalizes the nested product into a flat `CartItem`.
  /// Returns `None` for a line whose product no longer exists or was not
  /// populated.
  pub fn to_cart_item(&self) -> Option<CartItem> {
    let product = self.product.as_ref()?.populated()?;
    Some(CartItem {
      id: self.id.clone(),
      product_id: product.id.clone(),
      name: product.name.clone(),
      price: product.price,
      image: product.image.clone(),
      description: product.description.clone(),
      category: product.category.clone(),
      quantity: self.quantity,
      selected_size: self.selected_size.clone(),
      selected_color: self.selected_color.clone(),
    })
  }
}

impl ServerCart {
  /// Transforms every line into a `CartItem`, preserving server order.
  pub fn to_cart_items(&self) -> Vec<CartItem> {
    self
      .items
      .iter()
      .filter_map(|line| {
        let item = line.to_cart_item();
        if item.is_none() {
          tracing::warn!(
            line_id = %line.id,
            product_ref = ?line.product.as_ref().map(ProductRef::id),
            "Cart line has no populated product record; skipping it."
          );
        }
        item
      })
      .collect()
  }
}
