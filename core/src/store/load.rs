// storefront_cart/src/store/load.rs

use super::CartStore;
use tracing::instrument;

impl CartStore {
  /// Fetches the current cart and replaces the local items with it.
  #[instrument(name = "CartStore::load", skip(self))]
  pub async fn load(&self) {
    self.begin();
    let result = self.api.get_cart().await;
    self.apply_load_result(result);
  }
}
