// storefront_cart/src/store/update.rs

//! Quantity updates.
//!
//! The cart service has no update endpoint, so a new quantity is applied as
//! delete line → add product with the new quantity → reload. The sequence is
//! not atomic: if the delete lands and the add fails, the line is gone on the
//! server until the user adds it again. Nothing is rolled back, and the local
//! items stay as they were before the call until the next successful load.

use super::{CartStore, UPDATE_FAILED};
use crate::core::control::{PlanOutcome, StepControl};
use crate::core::state_data::StateData;
use crate::error::CartError;
use crate::model::item::CartItem;
use crate::model::wire::AddToCartRequest;
use crate::notify::{emit, Notice, Notifier};
use crate::plan::Plan;
use tracing::{info, instrument, warn};

pub(crate) const LOCATE_LINE: &str = "locate_line";
pub(crate) const REMOVE_LINE: &str = "remove_line";
pub(crate) const RE_ADD_LINE: &str = "re_add_line";
pub(crate) const RELOAD_CART: &str = "reload_cart";

pub(crate) struct UpdateQuantityData {
  pub store: CartStore,
  pub item_id: String,
  pub new_quantity: u32,
  pub line: Option<CartItem>,
}

pub(crate) fn update_quantity_plan() -> Plan<UpdateQuantityData> {
  let mut plan = Plan::new(
    "update_quantity",
    &[(LOCATE_LINE, None), (REMOVE_LINE, None), (RE_ADD_LINE, None), (RELOAD_CART, None)],
  );

  plan.on(LOCATE_LINE, |data: StateData<UpdateQuantityData>| async move {
    let line = {
      let guard = data.read();
      let line = guard.store.state.read().find(&guard.item_id).cloned();
      line
    };
    match line {
      Some(line) => {
        data.write().line = Some(line);
        Ok::<_, CartError>(StepControl::Continue)
      }
      None => {
        warn!(item_id = %data.read().item_id, "Line is not in the local cart; nothing to update.");
        Ok(StepControl::Stop)
      }
    }
  });

  plan.on(REMOVE_LINE, |data: StateData<UpdateQuantityData>| async move {
    let (api, item_id) = {
      let guard = data.read();
      (guard.store.api.clone(), guard.item_id.clone())
    };
    api.delete_line(&item_id).await?;
    Ok::<_, CartError>(StepControl::Continue)
  });

  plan.on(RE_ADD_LINE, |data: StateData<UpdateQuantityData>| async move {
    let (api, request) = {
      let guard = data.read();
      let line = guard
        .line
        .as_ref()
        .ok_or_else(|| CartError::Internal("re-add ran without a located line".to_string()))?;
      let request = AddToCartRequest {
        product_id: line.product_id.clone(),
        quantity: guard.new_quantity,
      };
      (guard.store.api.clone(), request)
    };
    api.add_to_cart(&request).await?;
    Ok::<_, CartError>(StepControl::Continue)
  });

  // A failed reload is recorded like any failed load; the update itself
  // already happened server-side.
  plan.on(RELOAD_CART, |data: StateData<UpdateQuantityData>| async move {
    let store = data.read().store.clone();
    let result = store.api.get_cart().await;
    store.apply_load_result(result);
    Ok::<_, CartError>(StepControl::Continue)
  });

  plan
}

impl CartStore {
  /// Sets the quantity of line `item_id`. Zero or negative quantities remove
  /// the line instead.
  #[instrument(name = "CartStore::update_quantity", skip(self, notify))]
  pub async fn update_quantity(&self, item_id: &str, new_quantity: i32, notify: Option<&dyn Notifier>) {
    let new_quantity = match u32::try_from(new_quantity) {
      Ok(q) if q > 0 => q,
      _ => return self.remove_item(item_id, notify).await,
    };

    self.begin();
    let data = StateData::new(UpdateQuantityData {
      store: self.clone(),
      item_id: item_id.to_string(),
      new_quantity,
      line: None,
    });

    match update_quantity_plan().run(data.clone()).await {
      Ok(PlanOutcome::Completed) => {
        self.settle();
        let name = data.read().line.as_ref().map(|l| l.name.clone()).unwrap_or_default();
        info!(%name, new_quantity, "Quantity updated.");
        emit(notify, Notice::cart(format!("Updated {} quantity to {}", name, new_quantity)));
      }
      Ok(PlanOutcome::Stopped) => self.settle(),
      Err(e) => {
        self.fail("update_quantity", &e);
        emit(notify, Notice::error(UPDATE_FAILED));
      }
    }
  }
}
