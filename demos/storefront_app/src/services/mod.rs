// demos/storefront_app/src/services/mod.rs

pub mod mock_auth;
pub mod mock_cart;
