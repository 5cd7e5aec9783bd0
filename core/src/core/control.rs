// storefront_cart/src/core/control.rs

//! Signals for controlling plan flow and the outcome of a plan run.

/// Returned by a step handler to say whether the plan should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepControl {
  /// Proceed to the next step.
  Continue,
  /// Halt the plan; no further steps run. Not an error.
  Stop,
}

/// Outcome of a full plan execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOutcome {
  /// Every non-skipped step ran to completion.
  Completed,
  /// A handler returned `StepControl::Stop`.
  Stopped,
}
