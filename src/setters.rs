//! Raw mutators: the escape hatch around the navigation guarantees.

use serde_json::Value;

use crate::executor::StepwiseExecutor;
use crate::types::{ExecutionStatus, StepsAndHandlers};

/// Raw mutators for advanced callers, obtained from
/// [StepwiseExecutor::setters].
///
/// Everything here writes the execution record directly, bypassing the rules
/// the main surface maintains (status reset on navigation, output committed
/// only on success, sticky all-done). A cursor moved with
/// [set_current_step_only](RawSetters::set_current_step_only) keeps a status
/// that describes a different step. Use the main surface unless you need to
/// desynchronize on purpose.
pub struct RawSetters<'a> {
  executor: &'a StepwiseExecutor,
}

impl<'a> RawSetters<'a> {
  pub(crate) fn new(executor: &'a StepwiseExecutor) -> Self {
    Self { executor }
  }

  /// Sets the step cursor without resetting status. Prefer
  /// [StepwiseExecutor::next] or [StepwiseExecutor::move_to_step].
  pub fn set_current_step_only(&self, step: usize) {
    self.executor.lock_state().current_step = step;
  }

  /// Sets the cursor and resets status to NotStarted; the graceful move,
  /// identical to [StepwiseExecutor::move_to_step].
  pub fn set_current_step_and_reset(&self, step: usize) {
    self.executor.move_to_step(step);
  }

  /// Overwrites the shared cross-step value.
  pub fn set_shared_state(&self, value: Value) {
    self.executor.shared().replace(value);
  }

  /// Replaces the whole step registry. The status and cursor are left as they
  /// are, so the next `execute` runs whatever the cursor now points at.
  pub fn set_steps_and_handlers(&self, steps: StepsAndHandlers) {
    self.executor.lock_state().steps = steps;
  }

  /// Overwrites the committed chain output, which also reseeds the next
  /// chain's first handler.
  pub fn set_step_output(&self, output: Option<Value>) {
    self.executor.lock_state().step_output = output;
  }

  /// Overwrites the status, detaching it from any actual execution attempt.
  pub fn set_status(&self, status: ExecutionStatus) {
    self.executor.lock_state().status = status;
  }

  /// Overwrites the all-done flag; passing `false` is the only way to clear
  /// it once `next` on the last step has set it.
  pub fn set_all_done(&self, all_done: bool) {
    self.executor.lock_state().all_done = all_done;
  }
}
