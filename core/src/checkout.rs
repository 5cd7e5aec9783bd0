// storefront_cart/src/checkout.rs

//! Order summary math and the simulated order confirmation shown after
//! checkout. Nothing here talks to the network.

use crate::model::item::{cart_items_count, cart_total, CartItem};
use chrono::{DateTime, Utc};
use rand_core::{OsRng, RngCore};
use serde::Serialize;

/// Subtotals strictly above this ship free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 200.0;
pub const FLAT_SHIPPING: f64 = 15.0;
pub const TAX_RATE: f64 = 0.10;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
  pub item_count: u64,
  pub subtotal: f64,
  pub shipping: f64,
  pub tax: f64,
  pub total: f64,
}

impl OrderSummary {
  pub fn from_items(items: &[CartItem]) -> Self {
    let subtotal = cart_total(items);
    let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
      0.0
    } else {
      FLAT_SHIPPING
    };
    let tax = subtotal * TAX_RATE;
    Self {
      item_count: cart_items_count(items),
      subtotal,
      shipping,
      tax,
      total: subtotal + shipping + tax,
    }
  }

  pub fn has_free_shipping(&self) -> bool {
    self.shipping == 0.0
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
  pub order_number: String,
  pub placed_at: DateTime<Utc>,
  pub summary: OrderSummary,
}

/// Produces a confirmation for `summary`. The order number is
/// `ORD-` followed by a random number below one million.
pub fn place_order(summary: OrderSummary) -> OrderConfirmation {
  let order_number = format!("ORD-{}", OsRng.next_u32() % 1_000_000);
  tracing::info!(%order_number, total = summary.total, "Order placed (simulated).");
  OrderConfirmation {
    order_number,
    placed_at: Utc::now(),
    summary,
  }
}

/// Formats an amount as US dollars: `$1,234.56`.
pub fn format_price(amount: f64) -> String {
  let cents = (amount.abs() * 100.0).round() as u64;
  let whole = (cents / 100).to_string();
  let fraction = cents % 100;

  let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
  for (i, digit) in whole.chars().enumerate() {
    if i > 0 && (whole.len() - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(digit);
  }

  let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
  format!("{}${}.{:02}", sign, grouped, fraction)
}
