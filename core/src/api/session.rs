// storefront_cart/src/api/session.rs

//! Where the bearer credential comes from. Persisting it is the caller's
//! business; the clients only ask for the current value on each request.

use parking_lot::RwLock;

pub trait TokenSource: Send + Sync {
  fn token(&self) -> Option<String>;

  /// Called when the server rejects the credential. Sources that can't
  /// forget their token ignore it.
  fn invalidate(&self) {}
}

/// No credential; requests go out unauthenticated.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenSource for NoToken {
  fn token(&self) -> Option<String> {
    None
  }
}

/// An in-memory token that can be swapped at login/logout.
#[derive(Debug, Default)]
pub struct StaticToken(RwLock<Option<String>>);

impl StaticToken {
  pub fn new(token: Option<String>) -> Self {
    // Blank values are treated as "logged out".
    StaticToken(RwLock::new(token.filter(|t| !t.trim().is_empty())))
  }

  pub fn set(&self, token: Option<String>) {
    *self.0.write() = token.filter(|t| !t.trim().is_empty());
  }

  pub fn clear(&self) {
    *self.0.write() = None;
  }
}

impl TokenSource for StaticToken {
  fn token(&self) -> Option<String> {
    self.0.read().clone()
  }

  fn invalidate(&self) {
    self.clear();
  }
}
