// tests/common/mod.rs
#![allow(dead_code)] // Each test binary uses a different subset

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use storefront_cart::{
  AddToCartRequest, CartApi, CartError, CartResult, CartStore, Notice, NoticeKind, Notifier, ServerCart, ServerLine,
  ServerProduct,
};
use tracing::Level;

// --- Fixtures ---

pub fn product(id: &str, name: &str, price: f64) -> ServerProduct {
  ServerProduct {
    id: id.to_string(),
    name: name.to_string(),
    price,
    image: None,
    description: None,
    category: None,
  }
}

pub fn line(line_id: &str, product_id: &str, name: &str, price: f64, quantity: u32) -> ServerLine {
  ServerLine {
    id: line_id.to_string(),
    product: Some(product(product_id, name, price).into()),
    quantity,
    selected_size: None,
    selected_color: None,
  }
}

pub fn cart(lines: Vec<ServerLine>) -> ServerCart {
  ServerCart {
    id: Some("cart-1".to_string()),
    user_id: Some("user-1".to_string()),
    items: lines,
    ..Default::default()
  }
}

/// Two lines: a shirt (L1, 25.00 x 2) and a mug (L2, 10.00 x 1).
pub fn two_line_cart() -> ServerCart {
  cart(vec![
    line("L1", "P1", "Shirt", 25.0, 2),
    line("L2", "P2", "Mug", 10.0, 1),
  ])
}

pub fn server_error() -> CartError {
  CartError::Status {
    status: 500,
    message: "Internal Server Error".to_string(),
  }
}

pub fn not_found() -> CartError {
  CartError::NotFound("Cart not found".to_string())
}

// --- Scripted transport ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
  GetCart,
  AddToCart { product_id: String, quantity: u32 },
  DeleteLine(String),
}

struct Scripted {
  result: CartResult<ServerCart>,
  delay: Option<Duration>,
}

/// A `CartApi` that replays queued responses per endpoint and records every
/// call it receives. An endpoint with an empty queue answers with an
/// internal error so unexpected calls fail loudly.
#[derive(Default)]
pub struct ScriptedApi {
  get_cart: Mutex<VecDeque<Scripted>>,
  add_to_cart: Mutex<VecDeque<Scripted>>,
  delete_line: Mutex<VecDeque<Scripted>>,
  calls: Mutex<Vec<ApiCall>>,
}

impl ScriptedApi {
  pub fn new() -> Arc<Self> {
    Arc::new(Self::default())
  }

  pub fn on_get_cart(&self, result: CartResult<ServerCart>) -> &Self {
    self.get_cart.lock().push_back(Scripted { result, delay: None });
    self
  }

  pub fn on_get_cart_after(&self, delay: Duration, result: CartResult<ServerCart>) -> &Self {
    self.get_cart.lock().push_back(Scripted {
      result,
      delay: Some(delay),
    });
    self
  }

  pub fn on_add_to_cart(&self, result: CartResult<ServerCart>) -> &Self {
    self.add_to_cart.lock().push_back(Scripted { result, delay: None });
    self
  }

  pub fn on_add_to_cart_after(&self, delay: Duration, result: CartResult<ServerCart>) -> &Self {
    self.add_to_cart.lock().push_back(Scripted {
      result,
      delay: Some(delay),
    });
    self
  }

  pub fn on_delete_line(&self, result: CartResult<ServerCart>) -> &Self {
    self.delete_line.lock().push_back(Scripted { result, delay: None });
    self
  }

  pub fn calls(&self) -> Vec<ApiCall> {
    self.calls.lock().clone()
  }

  async fn answer(queue: &Mutex<VecDeque<Scripted>>, endpoint: &str) -> CartResult<ServerCart> {
    let next = queue.lock().pop_front();
    match next {
      Some(Scripted { result, delay }) => {
        if let Some(delay) = delay {
          tokio::time::sleep(delay).await;
        }
        result
      }
      None => Err(CartError::Internal(format!("no scripted response for {}", endpoint))),
    }
  }
}

#[async_trait]
impl CartApi for ScriptedApi {
  async fn get_cart(&self) -> CartResult<ServerCart> {
    self.calls.lock().push(ApiCall::GetCart);
    Self::answer(&self.get_cart, "getCart").await
  }

  async fn add_to_cart(&self, request: &AddToCartRequest) -> CartResult<ServerCart> {
    self.calls.lock().push(ApiCall::AddToCart {
      product_id: request.product_id.clone(),
      quantity: request.quantity,
    });
    Self::answer(&self.add_to_cart, "addToCart").await
  }

  async fn delete_line(&self, line_id: &str) -> CartResult<ServerCart> {
    self.calls.lock().push(ApiCall::DeleteLine(line_id.to_string()));
    Self::answer(&self.delete_line, "deletedProduct").await
  }
}

/// Store over a scripted api, already loaded with `initial`.
pub async fn loaded_store(api: &Arc<ScriptedApi>, initial: ServerCart) -> CartStore {
  api.on_get_cart(Ok(initial));
  let store = CartStore::new(api.clone());
  store.load().await;
  store
}

// --- Notifications ---

#[derive(Clone, Default)]
pub struct RecordingNotifier {
  notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
  /// The form the store operations take.
  pub fn sink(&self) -> Option<&dyn Notifier> {
    Some(self)
  }

  pub fn notices(&self) -> Vec<Notice> {
    self.notices.lock().clone()
  }

  pub fn of_kind(&self, kind: NoticeKind) -> Vec<String> {
    self
      .notices
      .lock()
      .iter()
      .filter(|n| n.kind == kind)
      .map(|n| n.message.clone())
      .collect()
  }
}

impl Notifier for RecordingNotifier {
  fn notify(&self, notice: Notice) {
    self.notices.lock().push(notice);
  }
}

// --- Helper for Tracing Setup ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
