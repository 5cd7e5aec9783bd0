// demos/storefront_app/src/session.rs

//! `session` subcommand: a scripted shopping session against a running cart
//! service, printing what a storefront UI would show.

use std::sync::Arc;
use storefront_cart::{
  format_price, place_order, AuthClient, CartClientConfig, CartStore, CatalogClient, HttpCartApi, NewCartItem,
  Notice, OrderSummary, StaticToken, TokenSource,
};
use tracing::{info, instrument, warn};

use crate::errors::Result;

#[derive(Debug, Clone)]
pub struct SessionPlan {
  pub product_id: String,
  pub quantity: u32,
  pub updated_quantity: i32,
  pub checkout: bool,
  /// Email and password to log in with before anything else.
  pub login: Option<(String, String)>,
}

#[instrument(name = "session::run", skip(config, plan), fields(product_id = %plan.product_id))]
pub async fn run(config: &CartClientConfig, plan: SessionPlan) -> Result<()> {
  let session_token = Arc::new(StaticToken::new(config.api_token.clone()));
  let tokens: Arc<dyn TokenSource> = session_token.clone();
  let catalog = CatalogClient::new(config, tokens.clone())?;
  let store = CartStore::new(HttpCartApi::from_config(config, tokens)?);
  let printer = |notice: Notice| println!("{}", notice);

  if let Some((email, password)) = &plan.login {
    let auth = AuthClient::new(config, session_token.clone())?;
    match auth.login(email, password).await {
      Ok(_) => println!("logged in as {}", email),
      Err(e) => warn!(error = %e, "Login failed; continuing with the configured token."),
    }
  }

  let product_name = match catalog.get_all_products().await {
    Ok(products) => {
      info!(count = products.len(), "Catalog loaded.");
      products
        .into_iter()
        .find(|p| p.id == plan.product_id)
        .map(|p| p.name)
    }
    Err(e) => {
      // An auth failure here has already logged the session out.
      warn!(error = %e, logged_in = session_token.token().is_some(), "Catalog unavailable; adding by id only.");
      None
    }
  };

  store.load().await;
  report(&store, "loaded");

  let mut item = NewCartItem::new(plan.product_id.clone()).with_quantity(plan.quantity);
  if let Some(name) = product_name {
    item = item.named(name);
  }
  store.add_item(item, Some(&printer)).await;
  report(&store, "after add");

  let line_id = store
    .items()
    .into_iter()
    .find(|line| line.product_id == plan.product_id)
    .map(|line| line.id);
  match line_id {
    Some(line_id) => {
      store.update_quantity(&line_id, plan.updated_quantity, Some(&printer)).await;
      report(&store, "after update");
    }
    None => warn!(product_id = %plan.product_id, "Product did not make it into the cart; skipping update."),
  }

  let summary = OrderSummary::from_items(&store.items());
  println!(
    "subtotal {}  shipping {}  tax {}  total {}",
    format_price(summary.subtotal),
    format_price(summary.shipping),
    format_price(summary.tax),
    format_price(summary.total)
  );

  if plan.checkout && summary.item_count > 0 {
    let confirmation = place_order(summary);
    println!(
      "order {} placed at {}",
      confirmation.order_number,
      confirmation.placed_at.to_rfc3339()
    );
    store.clear_cart(Some(&printer)).await;
    report(&store, "after checkout");
  }

  if let Some(error) = store.error() {
    warn!(%error, "Session ended with a cart error.");
  }
  Ok(())
}

fn report(store: &CartStore, stage: &str) {
  println!(
    "[{}] {} item(s), {} line(s), total {}",
    stage,
    store.cart_items_count(),
    store.items().len(),
    format_price(store.cart_total())
  );
}
