//! Stepwise-execution types: the status lifecycle, the mutable execution
//! record, the handler contract, and the shared cross-step state.
//!
//! Payloads and shared state are free-form `serde_json::Value`s; handlers
//! thread one value through a step's chain and may commit shared updates at
//! any point.

mod execution_snapshot;
mod execution_state;
#[cfg(test)]
mod execution_state_test;
mod execution_status;
#[cfg(test)]
mod execution_status_test;
mod shared_state;
#[cfg(test)]
mod shared_state_test;
mod step_handler;
#[cfg(test)]
mod step_handler_test;

pub use execution_snapshot::ExecutionSnapshot;
pub use execution_state::ExecutionState;
pub use execution_status::ExecutionStatus;
pub use shared_state::{SharedState, SharedUpdate};
pub use step_handler::{FnHandler, Handler, Step, StepHandler, StepsAndHandlers, handler};
