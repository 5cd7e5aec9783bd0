pub mod control;
pub mod state_data;
pub mod step;

pub use control::{PlanOutcome, StepControl};
pub use state_data::StateData;
pub use step::{SkipCondition, StepDef};
