// demos/storefront_app/src/models/stored_cart.rs

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use storefront_cart::{ServerCart, ServerLine};

use super::catalog_product::CatalogProduct;

#[derive(Debug, Clone)]
pub struct StoredLine {
  pub id: String,
  pub product_id: String,
  pub quantity: u32,
  pub selected_size: Option<String>,
  pub selected_color: Option<String>,
}

/// One user's cart as the mock keeps it between requests.
#[derive(Debug, Clone)]
pub struct StoredCart {
  pub id: String,
  pub user_id: String,
  pub lines: Vec<StoredLine>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl StoredCart {
  pub fn new(id: String, user_id: &str) -> Self {
    let now = Utc::now();
    Self {
      id,
      user_id: user_id.to_string(),
      lines: Vec::new(),
      created_at: now,
      updated_at: now,
    }
  }

  /// Populates each line's product from `catalog`, the way the real service
  /// does. A line whose product left the catalog gets a `null` product.
  pub fn to_server_cart(&self, catalog: &[CatalogProduct]) -> ServerCart {
    let items = self
      .lines
      .iter()
      .map(|line| ServerLine {
        id: line.id.clone(),
        product: catalog
          .iter()
          .find(|p| p.id == line.product_id)
          .map(|product| product.to_server_product().into()),
        quantity: line.quantity,
        selected_size: line.selected_size.clone(),
        selected_color: line.selected_color.clone(),
      })
      .collect();

    let mut extra = Map::new();
    extra.insert("createdAt".to_string(), Value::String(self.created_at.to_rfc3339()));
    extra.insert("updatedAt".to_string(), Value::String(self.updated_at.to_rfc3339()));

    ServerCart {
      id: Some(self.id.clone()),
      user_id: Some(self.user_id.clone()),
      items,
      extra,
    }
  }
}
