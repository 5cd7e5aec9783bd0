// src/lib.rs

//! storefront_cart: client-side cart state for a storefront backed by a
//! remote REST cart service.
//!
//! The crate keeps a local, eventually consistent copy of the session's cart
//! and exposes:
//!  - `CartStore`, the cart state store (load, add, remove, update quantity,
//!    clear) plus derived reads (count, total, membership).
//!  - `CartApi`, the transport seam, with `HttpCartApi` as the reqwest-backed
//!    implementation.
//!  - `Plan`, a small named-step runner used for the operations that need
//!    several round trips.
//!  - Login, catalog fetching, product admin and checkout summaries for the
//!    surrounding storefront.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod notify;
pub mod plan;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::api::{CartApi, HttpCartApi, NoToken, StaticToken, TokenSource};
pub use crate::auth::{AuthClient, LoginSession};
pub use crate::catalog::{CatalogClient, TokenStatus};
pub use crate::checkout::{format_price, place_order, OrderConfirmation, OrderSummary};
pub use crate::config::CartClientConfig;
pub use crate::core::control::{PlanOutcome, StepControl};
pub use crate::core::state_data::StateData;
pub use crate::core::step::{SkipCondition, StepDef};
pub use crate::error::{CartError, CartResult};
pub use crate::model::{
  AddToCartRequest, CartItem, CartState, NewCartItem, Product, ProductDraft, ProductRef, ServerCart, ServerLine, ServerProduct,
};
pub use crate::notify::{Notice, NoticeKind, Notifier};
pub use crate::plan::Plan;
pub use crate::store::CartStore;
