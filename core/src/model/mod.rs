// storefront_cart/src/model/mod.rs

//! Client-side cart records and the server wire shapes they are derived from.

pub mod item;
pub mod product;
pub mod wire;

pub use item::{cart_items_count, cart_total, CartItem, CartState, NewCartItem};
pub use product::{CatalogRecord, Product, ProductDraft};
pub use wire::{AddToCartRequest, DeleteLineResponse, ProductRef, ServerCart, ServerLine, ServerProduct};
