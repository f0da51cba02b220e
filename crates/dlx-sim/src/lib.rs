pub mod plan;
pub mod runner;

// Re-export the pieces the CLI needs
pub use plan::{FailurePolicy, Plan, SimConfig, Step};
pub use runner::{run_plan, DryRunner, StepFailure, StepRunner, Summary, SystemRunner};
