// storefront_cart/src/api/mod.rs

//! The seam between the cart store and the remote cart service.

pub mod http;
pub mod session;

use crate::error::CartResult;
use crate::model::wire::{AddToCartRequest, ServerCart};
use async_trait::async_trait;

pub use http::HttpCartApi;
pub use session::{NoToken, StaticToken, TokenSource};

/// Remote cart operations, already normalized to one response shape.
///
/// Implementations report "this session has no cart" as
/// `CartError::NotFound`; the store decides what that means.
#[async_trait]
pub trait CartApi: Send + Sync {
  /// `GET /getCart`
  async fn get_cart(&self) -> CartResult<ServerCart>;

  /// `POST /addToCart`
  async fn add_to_cart(&self, request: &AddToCartRequest) -> CartResult<ServerCart>;

  /// `DELETE /deletedProduct/{line_id}`, unwrapped from its `cart` envelope.
  async fn delete_line(&self, line_id: &str) -> CartResult<ServerCart>;
}

#[async_trait]
impl<T> CartApi for std::sync::Arc<T>
where
  T: CartApi + ?Sized,
{
  async fn get_cart(&self) -> CartResult<ServerCart> {
    (**self).get_cart().await
  }

  async fn add_to_cart(&self, request: &AddToCartRequest) -> CartResult<ServerCart> {
    (**self).add_to_cart(request).await
  }

  async fn delete_line(&self, line_id: &str) -> CartResult<ServerCart> {
    (**self).delete_line(line_id).await
  }
}
