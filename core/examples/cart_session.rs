// storefront_cart/examples/cart_session.rs

//! Drives a `CartStore` through a short session against an in-memory cart
//! service, printing every notice.

use async_trait::async_trait;
use parking_lot::Mutex;
use storefront_cart::{
  AddToCartRequest, CartApi, CartError, CartResult, CartStore, NewCartItem, Notice, OrderSummary, ServerCart,
  ServerLine, ServerProduct,
};
use tracing::info;

#[derive(Default)]
struct InMemoryCart {
  cart: Mutex<ServerCart>,
  next_id: Mutex<u32>,
}

fn catalog_entry(product_id: &str) -> Option<ServerProduct> {
  let (name, price) = match product_id {
    "P1" => ("Linen Shirt", 25.0),
    "P2" => ("Coffee Mug", 10.0),
    _ => return None,
  };
  Some(ServerProduct {
    id: product_id.to_string(),
    name: name.to_string(),
    price,
    image: None,
    description: None,
    category: None,
  })
}

#[async_trait]
impl CartApi for InMemoryCart {
  async fn get_cart(&self) -> CartResult<ServerCart> {
    Ok(self.cart.lock().clone())
  }

  async fn add_to_cart(&self, request: &AddToCartRequest) -> CartResult<ServerCart> {
    let product = catalog_entry(&request.product_id)
      .ok_or_else(|| CartError::NotFound(format!("product {}", request.product_id)))?;
    let line_id = {
      let mut next = self.next_id.lock();
      *next += 1;
      format!("line-{}", *next)
    };
    let mut cart = self.cart.lock();
    match cart.items.iter_mut().find(|l| l.product.as_ref().map(|p| p.id()) == Some(product.id.as_str())) {
      Some(existing) => existing.quantity += request.quantity,
      None => cart.items.push(ServerLine {
        id: line_id,
        product: Some(product.into()),
        quantity: request.quantity,
        selected_size: None,
        selected_color: None,
      }),
    }
    Ok(cart.clone())
  }

  async fn delete_line(&self, line_id: &str) -> CartResult<ServerCart> {
    let mut cart = self.cart.lock();
    cart.items.retain(|l| l.id != line_id);
    Ok(cart.clone())
  }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  let store = CartStore::new(InMemoryCart::default());
  let printer = |notice: Notice| println!("{}", notice);

  store.load().await;
  store.add_item(NewCartItem::new("P1").named("Linen Shirt").with_quantity(2), Some(&printer)).await;
  store.add_item(NewCartItem::new("P2").named("Coffee Mug"), Some(&printer)).await;
  store.add_item(NewCartItem::new("P404").named("Ghost"), Some(&printer)).await;

  let shirt_line = store
    .items()
    .into_iter()
    .find(|item| item.product_id == "P1")
    .map(|item| item.id)
    .ok_or_else(|| anyhow::anyhow!("shirt line missing"))?;
  store.update_quantity(&shirt_line, 3, Some(&printer)).await;

  let summary = OrderSummary::from_items(&store.items());
  info!(
    items = store.cart_items_count(),
    subtotal = summary.subtotal,
    total = summary.total,
    "Cart before clearing."
  );

  store.clear_cart(Some(&printer)).await;
  info!(items = store.cart_items_count(), error = ?store.error(), "Session finished.");
  Ok(())
}
