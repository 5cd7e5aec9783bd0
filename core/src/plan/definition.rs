// storefront_cart/src/plan/definition.rs

//! The `Plan<TData>` struct and its construction methods.

use crate::core::control::StepControl;
use crate::core::state_data::StateData;
use crate::core::step::{SkipCondition, StepDef};
use crate::error::{CartError, CartResult};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

/// Boxed async step handler. Receives a clone of the plan's shared state.
///
/// Handlers must drop any lock guard they take before awaiting.
pub type StepHandler<TData> = Box<
  dyn Fn(StateData<TData>) -> Pin<Box<dyn Future<Output = CartResult<StepControl>> + Send>> + Send + Sync,
>;

/// An ordered list of named steps, each with zero or more async handlers,
/// run sequentially against one `StateData<TData>`.
pub struct Plan<TData>
where
  TData: 'static + Send + Sync,
{
  pub(crate) name: String,
  pub(crate) steps: Vec<StepDef<TData>>,
  pub(crate) handlers: HashMap<String, Vec<StepHandler<TData>>>,
}

impl<TData> Plan<TData>
where
  TData: 'static + Send + Sync,
{
  /// Creates a plan from `(step_name, skip_if)` pairs.
  pub fn new(name: &str, step_defs: &[(&str, Option<SkipCondition<TData>>)]) -> Self {
    let steps = step_defs
      .iter()
      .map(|(step_name, skip_if)| StepDef {
        name: (*step_name).to_string(),
        skip_if: skip_if.clone(),
      })
      .collect();
    Self {
      name: name.to_string(),
      steps,
      handlers: HashMap::new(),
    }
  }

  /// Creates a plan whose step names are only known at runtime.
  pub fn from_step_names<I, S>(name: &str, step_names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let steps = step_names
      .into_iter()
      .map(|step_name| StepDef {
        name: step_name.into(),
        skip_if: None,
      })
      .collect();
    Self {
      name: name.to_string(),
      steps,
      handlers: HashMap::new(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(|s| s.name.as_str()).collect()
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  /// Panics on an unknown step name: plans are assembled in code, so a typo
  /// here is a programming error rather than a runtime condition.
  fn ensure_step_exists(&self, step_name: &str) {
    if !self.steps.iter().any(|s| s.name == step_name) {
      panic!(
        "plan '{}' setup error: step '{}' not found in plan definition",
        self.name, step_name
      );
    }
  }

  pub fn set_skip_condition(&mut self, step_name: &str, skip_if: Option<SkipCondition<TData>>) {
    self.ensure_step_exists(step_name);
    if let Some(step) = self.steps.iter_mut().find(|s| s.name == step_name) {
      step.skip_if = skip_if;
    }
  }

  /// Registers a handler for `step_name`. Handlers of one step run in
  /// registration order. Any error type convertible into `CartError` works.
  pub fn on<F, HandlerErr>(&mut self, step_name: &str, handler_fn: impl Fn(StateData<TData>) -> F + Send + Sync + 'static)
  where
    F: Future<Output = Result<StepControl, HandlerErr>> + Send + 'static,
    HandlerErr: Into<CartError> + Send + Sync + 'static,
  {
    self.ensure_step_exists(step_name);
    let handler: StepHandler<TData> = Box::new(move |state| {
      let user_fut = handler_fn(state);
      Box::pin(async move { user_fut.await.map_err(Into::into) })
    });
    self.handlers.entry(step_name.to_string()).or_default().push(handler);
  }
}

impl<TData> std::fmt::Debug for Plan<TData>
where
  TData: 'static + Send + Sync,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Plan")
      .field("name", &self.name)
      .field("steps", &self.steps)
      .field("handled_steps", &self.handlers.len())
      .finish()
  }
}
