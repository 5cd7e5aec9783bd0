// storefront_cart/src/notify.rs

//! User-facing feedback emitted by cart operations (toasts in a UI, lines in a
//! terminal). Delivery is fire-and-forget; a notifier cannot fail an operation.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
  /// Something was put into the cart or changed there.
  Cart,
  /// Neutral information (removals, clears).
  Info,
  /// An operation failed.
  Error,
}

impl fmt::Display for NoticeKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      NoticeKind::Cart => "cart",
      NoticeKind::Info => "info",
      NoticeKind::Error => "error",
    };
    f.write_str(label)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  pub message: String,
  pub kind: NoticeKind,
}

impl Notice {
  pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
    Self {
      message: message.into(),
      kind,
    }
  }

  pub fn cart(message: impl Into<String>) -> Self {
    Self::new(message, NoticeKind::Cart)
  }

  pub fn info(message: impl Into<String>) -> Self {
    Self::new(message, NoticeKind::Info)
  }

  pub fn error(message: impl Into<String>) -> Self {
    Self::new(message, NoticeKind::Error)
  }
}

impl fmt::Display for Notice {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}] {}", self.kind, self.message)
  }
}

pub trait Notifier: Send + Sync {
  fn notify(&self, notice: Notice);
}

impl<F> Notifier for F
where
  F: Fn(Notice) + Send + Sync,
{
  fn notify(&self, notice: Notice) {
    self(notice)
  }
}

/// Sends `notice` if a notifier was supplied.
pub(crate) fn emit(notify: Option<&dyn Notifier>, notice: Notice) {
  if let Some(notifier) = notify {
    notifier.notify(notice);
  }
}
