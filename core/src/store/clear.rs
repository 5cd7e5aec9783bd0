// storefront_cart/src/store/clear.rs

//! Clearing the cart one line at a time; the service has no bulk delete.

use super::{CartStore, CLEARED, CLEAR_FAILED};
use crate::core::control::StepControl;
use crate::core::state_data::StateData;
use crate::core::step::SkipCondition;
use crate::error::CartError;
use crate::model::wire::ServerCart;
use crate::notify::{emit, Notice, Notifier};
use crate::plan::Plan;
use std::sync::Arc;
use tracing::{info, instrument};

pub(crate) struct ClearCartData {
  pub store: CartStore,
  pub deleted: usize,
  /// Cart as the server reported it after the most recent successful delete.
  pub last_cart: Option<ServerCart>,
}

/// One step per line id, in cart order. A step is skipped once a previous
/// delete's answer shows its line already gone (repeated ids, or lines the
/// server dropped on its own).
pub(crate) fn clear_cart_plan(line_ids: &[String]) -> Plan<ClearCartData> {
  let step_names: Vec<String> = line_ids
    .iter()
    .enumerate()
    .map(|(idx, id)| format!("delete_line[{}]:{}", idx, id))
    .collect();
  let mut plan = Plan::from_step_names("clear_cart", step_names.clone());

  for (step_name, line_id) in step_names.iter().zip(line_ids.iter()) {
    plan.set_skip_condition(step_name, Some(already_gone(line_id.clone())));

    let line_id = line_id.clone();
    plan.on(step_name, move |data: StateData<ClearCartData>| {
      let line_id = line_id.clone();
      async move {
        let api = data.read().store.api.clone();
        let cart = api.delete_line(&line_id).await?;
        let mut guard = data.write();
        guard.deleted += 1;
        guard.last_cart = Some(cart);
        Ok::<_, CartError>(StepControl::Continue)
      }
    });
  }
  plan
}

fn already_gone(line_id: String) -> SkipCondition<ClearCartData> {
  Arc::new(move |data: StateData<ClearCartData>| {
    data
      .read()
      .last_cart
      .as_ref()
      .map_or(false, |cart| !cart.items.iter().any(|line| line.id == line_id))
  })
}

impl CartStore {
  /// Deletes every line in the current snapshot, sequentially.
  ///
  /// When all deletes succeed the local cart is emptied without a confirming
  /// reload. When one fails, the remaining lines are not attempted and the
  /// store adopts whatever the server reported after the last delete that
  /// did succeed.
  #[instrument(name = "CartStore::clear_cart", skip(self, notify))]
  pub async fn clear_cart(&self, notify: Option<&dyn Notifier>) {
    self.begin();
    let line_ids: Vec<String> = self.state.read().items.iter().map(|item| item.id.clone()).collect();
    let data = StateData::new(ClearCartData {
      store: self.clone(),
      deleted: 0,
      last_cart: None,
    });

    match clear_cart_plan(&line_ids).run(data.clone()).await {
      Ok(_) => {
        self.state.update(|s| {
          s.reset_to_empty();
          s.error = None;
          s.loading = false;
        });
        info!(lines = line_ids.len(), "Cart cleared.");
        emit(notify, Notice::info(CLEARED));
      }
      Err(e) => {
        let (deleted, last_cart) = {
          let mut guard = data.write();
          (guard.deleted, guard.last_cart.take())
        };
        if let Some(cart) = last_cart {
          self.settle_with_cart(cart);
        }
        info!(deleted, total = line_ids.len(), "Cart clear stopped part way.");
        self.fail("clear_cart", &e);
        emit(notify, Notice::error(CLEAR_FAILED));
      }
    }
  }
}
