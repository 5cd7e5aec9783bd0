// storefront_cart/src/plan/mod.rs

//! Named-step plans for cart operations that need more than one round trip
//! (quantity update, cart clear). Construction lives in `definition`,
//! execution in `execution`.

pub mod definition;
pub mod execution;

pub use definition::{Plan, StepHandler};
