//! The orchestrator: drives one step's handler chain at a time over a single
//! mutable execution record.
//!
//! [StepwiseExecutor] owns the record behind a mutex, the shared cross-step
//! state, and a single-flight gate serializing overlapping `execute` calls.
//! Reads are snapshots; navigation and shared-state updates stay responsive
//! while a chain is in flight.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::error::ExecuteError;
use crate::setters::RawSetters;
use crate::types::{
  ExecutionSnapshot, ExecutionState, ExecutionStatus, SharedState, SharedUpdate, StepsAndHandlers,
};

/// Stepwise execution orchestrator.
///
/// Created over an ordered step registry; each step is a chain of async
/// handlers run strictly in order, the output of one awaited and fed to the
/// next. The instance is `Send + Sync`; share it behind an `Arc` to observe
/// status from other tasks while a chain runs.
pub struct StepwiseExecutor {
  state: Arc<Mutex<ExecutionState>>,
  shared: SharedState,
  execute_gate: tokio::sync::Mutex<()>,
}

impl StepwiseExecutor {
  /// Creates an orchestrator over `steps`, starting at step 0. `steps` may be
  /// empty; `execute` on an empty registry is a no-op returning `None`.
  pub fn new(steps: StepsAndHandlers) -> Self {
    Self::with_initial_step(steps, 0)
  }

  /// Creates an orchestrator starting at `initial_step`. The index is not
  /// validated against the registry length.
  pub fn with_initial_step(steps: StepsAndHandlers, initial_step: usize) -> Self {
    Self {
      state: Arc::new(Mutex::new(ExecutionState::new(steps, initial_step))),
      shared: SharedState::new(),
      execute_gate: tokio::sync::Mutex::new(()),
    }
  }

  pub(crate) fn lock_state(&self) -> MutexGuard<'_, ExecutionState> {
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub(crate) fn shared(&self) -> &SharedState {
    &self.shared
  }

  /// Current step index.
  pub fn current_step(&self) -> usize {
    self.lock_state().current_step
  }

  /// Status of the current step's latest execution attempt.
  pub fn status(&self) -> ExecutionStatus {
    self.lock_state().status
  }

  /// True while a handler chain for the current step is running.
  pub fn is_loading(&self) -> bool {
    self.status().is_loading()
  }

  /// Output committed by the most recent successful chain, `None` until one
  /// succeeds. Navigation does not clear it.
  pub fn step_output(&self) -> Option<Value> {
    self.lock_state().step_output.clone()
  }

  /// Snapshot of the shared cross-step state.
  pub fn shared_state(&self) -> Value {
    self.shared.get()
  }

  /// True once `next` has been called on the last registered step.
  pub fn is_all_done(&self) -> bool {
    self.lock_state().all_done
  }

  /// Number of registered steps.
  pub fn step_count(&self) -> usize {
    self.lock_state().steps.len()
  }

  /// Number of handlers registered for `step`, `None` if no such step.
  pub fn handler_count(&self, step: usize) -> Option<usize> {
    self.lock_state().steps.get(step).map(Vec::len)
  }

  /// Clone of the registered step registry (handlers are shared, not copied).
  pub fn steps_and_handlers(&self) -> StepsAndHandlers {
    self.lock_state().steps.clone()
  }

  /// Handle to the shared state for committing updates from outside a handler.
  pub fn shared_handle(&self) -> SharedState {
    self.shared.clone()
  }

  /// One consistent snapshot of the observable surface.
  pub fn snapshot(&self) -> ExecutionSnapshot {
    let state = self.lock_state();
    ExecutionSnapshot {
      current_step: state.current_step,
      status: state.status,
      is_loading: state.status.is_loading(),
      step_output: state.step_output.clone(),
      shared_state: self.shared.get(),
      is_all_done: state.all_done,
      step_count: state.steps.len(),
    }
  }

  /// Commits a shared-state update: a replacement value or a function of the
  /// previous value. The result is stored without validation.
  pub fn update_shared_state(&self, update: SharedUpdate) {
    self.shared.commit(update);
  }

  /// Raw mutators bypassing the guarantees `execute`/`next`/`move_to_step`
  /// maintain. See [RawSetters] for the caveats.
  pub fn setters(&self) -> RawSetters<'_> {
    RawSetters::new(self)
  }

  /// Runs every handler of the current step in order and returns the final
  /// output.
  ///
  /// - Empty registry: returns `Ok(None)` without touching any state.
  /// - `status == Success` and `force` is false: returns the committed output
  ///   without invoking any handler.
  /// - Cursor past the registry (an unchecked `move_to_step`): the step has no
  ///   handlers, so this returns `Ok(None)` without touching any state.
  /// - Otherwise sets InProgress, then folds the chain left to right: the
  ///   first handler is seeded with the carried `step_output` (`Null` when
  ///   unset), each later handler with the awaited output of the one before
  ///   it. On success the final output is committed and returned; on a handler
  ///   failure status becomes Error, the committed output stays untouched, and
  ///   the failure propagates.
  ///
  /// Overlapping calls on one instance serialize through an internal
  /// single-flight gate: a second caller waits for the in-flight chain, then
  /// (unforced) takes the Success short-circuit. Shared-state updates from
  /// earlier handlers persist even when a later handler fails.
  #[instrument(level = "trace", skip(self))]
  pub async fn execute(&self, force: bool) -> Result<Option<Value>, ExecuteError> {
    let _running = self.execute_gate.lock().await;

    let (step, handlers, seed) = {
      let mut state = self.lock_state();
      if state.steps.is_empty() {
        return Ok(None);
      }
      if !force && state.status == ExecutionStatus::Success {
        return Ok(state.step_output.clone());
      }
      let Some(chain) = state.steps.get(state.current_step) else {
        return Ok(None);
      };
      let handlers = chain.clone();
      state.status = ExecutionStatus::InProgress;
      (state.current_step, handlers, state.step_output.clone())
    };

    debug!(step, handlers = handlers.len(), "executing step chain");
    let mut accumulator = seed.unwrap_or(Value::Null);
    for (index, handler) in handlers.iter().enumerate() {
      let snapshot = self.shared.get();
      match handler.run(accumulator, snapshot, self.shared.clone()).await {
        Ok(output) => accumulator = output,
        Err(source) => {
          self.lock_state().status = ExecutionStatus::Error;
          warn!(step, handler = index, error = %source, "handler failed");
          return Err(ExecuteError {
            step,
            handler: index,
            source,
          });
        }
      }
    }

    let mut state = self.lock_state();
    state.step_output = Some(accumulator.clone());
    state.status = ExecutionStatus::Success;
    info!(step, "step chain completed");
    Ok(Some(accumulator))
  }

  /// Moves to the next step, only when `force` is true or the current step
  /// succeeded. At the last index this sets the all-done flag and leaves the
  /// cursor and status alone; otherwise it increments the cursor and resets
  /// status to NotStarted. A no-op when the precondition does not hold.
  #[instrument(level = "trace", skip(self))]
  pub fn next(&self, force: bool) {
    let mut state = self.lock_state();
    if !(force || state.status == ExecutionStatus::Success) {
      return;
    }
    if state.at_last_step() {
      info!(step = state.current_step, "all steps done");
      state.all_done = true;
    } else {
      state.current_step += 1;
      state.status = ExecutionStatus::NotStarted;
      debug!(step = state.current_step, "advanced to step");
    }
  }

  /// Moves the cursor to `step` and resets status to NotStarted, regardless
  /// of the current status. The index is not bounds-checked; `execute` on a
  /// nonexistent step is the no-handlers no-op. Leaves the all-done flag, the
  /// committed output, and the shared state untouched.
  #[instrument(level = "trace", skip(self))]
  pub fn move_to_step(&self, step: usize) {
    let mut state = self.lock_state();
    state.current_step = step;
    state.status = ExecutionStatus::NotStarted;
    debug!(step, "moved to step");
  }
}
