// demos/storefront_app/src/state.rs
use crate::config::AppConfig;
use crate::services::mock_auth::MockAuthService;
use crate::services::mock_cart::MockCartService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub carts: Arc<MockCartService>,
  pub auth: Arc<MockAuthService>,
  pub config: Arc<AppConfig>,
}
