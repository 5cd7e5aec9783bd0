// storefront_cart/src/model/product.rs

//! Catalog products and the pure list helpers used by product listing pages.

use serde::{Deserialize, Serialize};

/// A product as `GET /getAllProducts` returns it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogRecord {
  #[serde(rename = "_id")]
  pub id: String,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub price: f64,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub category: Option<String>,
  /// Bare file name; the server serves it under `/image/`.
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default)]
  pub colors: Vec<String>,
  #[serde(default)]
  pub sizes: Vec<String>,
}

/// A catalog product ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: String,
  pub name: String,
  pub price: f64,
  pub description: String,
  pub category: String,
  pub image_url: Option<String>,
  pub colors: Vec<String>,
  pub sizes: Vec<String>,
}

impl CatalogRecord {
  /// `image_origin` is the server origin (scheme + host + port), e.g.
  /// `http://localhost:3000`.
  pub fn into_product(self, image_origin: &str) -> Product {
    let image_url = self
      .image
      .filter(|file| !file.is_empty())
      .map(|file| format!("{}/image/{}", image_origin.trim_end_matches('/'), file));
    Product {
      id: self.id,
      name: self.title,
      price: self.price,
      description: self.description.unwrap_or_default(),
      category: self.category.unwrap_or_default(),
      image_url,
      colors: self.colors,
      sizes: self.sizes,
    }
  }
}

/// Body of the product admin calls (`/productAdd`, `/updateProduct/{id}`).
/// Field names follow the catalog record, so `name` goes out as `title`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProductDraft {
  #[serde(rename = "title")]
  pub name: String,
  pub price: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  /// Image file name already known to the server.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub colors: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub sizes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
  PriceLowHigh,
  PriceHighLow,
  NameAZ,
  NameZA,
}

impl std::str::FromStr for ProductSort {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "price-low-high" => Ok(ProductSort::PriceLowHigh),
      "price-high-low" => Ok(ProductSort::PriceHighLow),
      "name-a-z" => Ok(ProductSort::NameAZ),
      "name-z-a" => Ok(ProductSort::NameZA),
      other => Err(format!("unknown sort order '{}'", other)),
    }
  }
}

pub fn filter_by_category<'a>(products: &'a [Product], category: Option<&str>) -> Vec<&'a Product> {
  match category {
    Some(category) if !category.is_empty() => products.iter().filter(|p| p.category == category).collect(),
    _ => products.iter().collect(),
  }
}

/// Returns a sorted copy; the input order is left alone.
pub fn sort_products(products: &[Product], sort_by: ProductSort) -> Vec<Product> {
  let mut sorted = products.to_vec();
  match sort_by {
    ProductSort::PriceLowHigh => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
    ProductSort::PriceHighLow => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
    ProductSort::NameAZ => sorted.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
    ProductSort::NameZA => sorted.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase())),
  }
  sorted
}

/// Case-insensitive match over name, description and category.
pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
  if query.is_empty() {
    return products.iter().collect();
  }
  let needle = query.to_lowercase();
  products
    .iter()
    .filter(|p| {
      p.name.to_lowercase().contains(&needle)
        || p.description.to_lowercase().contains(&needle)
        || p.category.to_lowercase().contains(&needle)
    })
    .collect()
}

/// Cuts `text` to `max_chars` characters and appends `...` when it was longer.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }
  let cut: String = text.chars().take(max_chars).collect();
  format!("{}...", cut)
}

/// Lowercase, dash-separated, word characters only.
pub fn slugify(text: &str) -> String {
  let mut slug = String::with_capacity(text.len());
  let mut last_dash = true;
  for ch in text.to_lowercase().chars() {
    if ch.is_whitespace() || ch == '-' {
      if !last_dash {
        slug.push('-');
        last_dash = true;
      }
    } else if ch.is_alphanumeric() || ch == '_' {
      slug.push(ch);
      last_dash = false;
    }
  }
  while slug.ends_with('-') {
    slug.pop();
  }
  slug
}
