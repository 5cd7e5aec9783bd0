// demos/storefront_app/src/models/mod.rs

pub mod catalog_product;
pub mod stored_cart;
