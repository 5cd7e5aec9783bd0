// demos/storefront_app/src/models/catalog_product.rs

use serde::{Deserialize, Serialize};
use storefront_cart::ServerProduct;

/// A product record as the mock's `/getAllProducts` serves it.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogProduct {
  #[serde(rename = "_id")]
  pub id: String,
  pub title: String,
  pub price: f64,
  pub description: String,
  pub category: String,
  pub image: String,
  pub colors: Vec<String>,
  pub sizes: Vec<String>,
}

/// Body of the product admin endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
  pub title: String,
  pub price: f64,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default)]
  pub colors: Vec<String>,
  #[serde(default)]
  pub sizes: Vec<String>,
}

impl CatalogProduct {
  pub fn from_payload(id: String, payload: ProductPayload) -> Self {
    Self {
      id,
      title: payload.title,
      price: payload.price,
      description: payload.description.unwrap_or_default(),
      category: payload.category.unwrap_or_default(),
      image: payload.image.unwrap_or_default(),
      colors: payload.colors,
      sizes: payload.sizes,
    }
  }

  fn new(id: &str, title: &str, price: f64, category: &str, image: &str) -> Self {
    Self {
      id: id.to_string(),
      title: title.to_string(),
      price,
      description: format!("{} from the demo catalog.", title),
      category: category.to_string(),
      image: image.to_string(),
      colors: Vec::new(),
      sizes: Vec::new(),
    }
  }

  fn with_variants(mut self, colors: &[&str], sizes: &[&str]) -> Self {
    self.colors = colors.iter().map(|c| c.to_string()).collect();
    self.sizes = sizes.iter().map(|s| s.to_string()).collect();
    self
  }

  /// The shape a cart line embeds under `productId`.
  pub fn to_server_product(&self) -> ServerProduct {
    ServerProduct {
      id: self.id.clone(),
      name: self.title.clone(),
      price: self.price,
      image: Some(self.image.clone()),
      description: Some(self.description.clone()),
      category: Some(self.category.clone()),
    }
  }
}

/// The catalog `serve-mock` starts with.
pub fn seed_catalog() -> Vec<CatalogProduct> {
  vec![
    CatalogProduct::new("p-100", "Linen Shirt", 25.0, "apparel", "linen-shirt.jpg")
      .with_variants(&["White", "Sand"], &["S", "M", "L"]),
    CatalogProduct::new("p-200", "Stoneware Mug", 10.0, "kitchen", "mug.jpg").with_variants(&["Blue", "Grey"], &[]),
    CatalogProduct::new("p-300", "Canvas Tote", 18.5, "accessories", "tote.jpg"),
    CatalogProduct::new("p-400", "Wool Throw", 89.0, "home", "throw.jpg").with_variants(&["Oat"], &[]),
    CatalogProduct::new("p-500", "Desk Lamp", 129.99, "home", "lamp.jpg"),
  ]
}
