//! The single mutable record behind one orchestrator instance.

use std::fmt;

use serde_json::Value;

use super::{ExecutionStatus, StepsAndHandlers};

/// The single mutable record behind one orchestrator instance: step cursor,
/// handler registry, last committed chain output, status, completion flag.
///
/// `step_output` is never cleared on navigation; it carries over as the input
/// seed for the next step's first handler. `all_done` is sticky: only the raw
/// setters clear it.
pub struct ExecutionState {
  pub current_step: usize,
  pub steps: StepsAndHandlers,
  pub step_output: Option<Value>,
  pub status: ExecutionStatus,
  pub all_done: bool,
}

impl ExecutionState {
  pub fn new(steps: StepsAndHandlers, initial_step: usize) -> Self {
    Self {
      current_step: initial_step,
      steps,
      step_output: None,
      status: ExecutionStatus::NotStarted,
      all_done: false,
    }
  }

  /// True when the cursor is at or past the last registered step. Also true
  /// for an empty registry, so a forced `next` on one marks completion.
  pub fn at_last_step(&self) -> bool {
    self.current_step + 1 >= self.steps.len()
  }
}

impl fmt::Debug for ExecutionState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ExecutionState")
      .field("current_step", &self.current_step)
      .field("steps", &self.steps.len())
      .field("step_output", &self.step_output)
      .field("status", &self.status)
      .field("all_done", &self.all_done)
      .finish()
  }
}
