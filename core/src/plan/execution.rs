// storefront_cart/src/plan/execution.rs

//! `Plan::run()`: executes steps in order, stopping on `StepControl::Stop`
//! or on the first handler error.

use crate::core::control::{PlanOutcome, StepControl};
use crate::core::state_data::StateData;
use crate::error::{CartError, CartResult};
use crate::plan::definition::Plan;
use tracing::{event, info_span, instrument, Instrument, Level};

impl<TData> Plan<TData>
where
  TData: 'static + Send + Sync,
{
  /// Runs the plan against `state`.
  ///
  /// A step whose skip condition holds is passed over. A step with no
  /// handlers is a configuration error. Steps already executed are not
  /// undone when a later one fails.
  #[instrument(
    name = "Plan::run",
    skip_all,
    fields(plan = %self.name, num_steps = self.steps.len()),
    err(Display)
  )]
  pub async fn run(&self, state: StateData<TData>) -> CartResult<PlanOutcome> {
    event!(Level::DEBUG, "Plan execution starting.");

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_name = step_def.name.as_str();

      if let Some(skip_cond_fn) = &step_def.skip_if {
        if skip_cond_fn(state.clone()) {
          event!(Level::INFO, step_name, "Step skipped due to 'skip_if' condition.");
          continue;
        }
      }

      let handlers = match self.handlers.get(step_name) {
        Some(handlers) if !handlers.is_empty() => handlers,
        _ => {
          event!(Level::ERROR, step_name, "Step has no handlers.");
          return Err(CartError::StepHandlerMissing {
            step_name: step_def.name.clone(),
          });
        }
      };

      let step_span = info_span!("plan_step", step_name, step_index = step_idx);
      for handler_fn in handlers {
        match handler_fn(state.clone()).instrument(step_span.clone()).await {
          Ok(StepControl::Continue) => {}
          Ok(StepControl::Stop) => {
            event!(Level::INFO, step_name, "Plan stopped by a handler.");
            return Ok(PlanOutcome::Stopped);
          }
          Err(e) => {
            event!(Level::ERROR, step_name, error = %e, "Step handler failed.");
            return Err(e);
          }
        }
      }
    }

    event!(Level::DEBUG, "Plan execution completed.");
    Ok(PlanOutcome::Completed)
  }
}
