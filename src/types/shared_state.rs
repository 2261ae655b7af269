//! Shared cross-step state: one free-form JSON value visible to every handler.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::{Map, Value};
use tracing::instrument;

/// Update applied to the shared state: either a full replacement value or a
/// function of the previous value.
pub enum SharedUpdate {
  /// Overwrite the whole shared value.
  Replace(Value),
  /// Compute the new value from the previous one.
  Apply(Box<dyn FnOnce(Value) -> Value + Send>),
}

impl SharedUpdate {
  /// Replacement update from any serializable-as-Value payload.
  pub fn replace(value: impl Into<Value>) -> Self {
    SharedUpdate::Replace(value.into())
  }

  /// Functional update over the previous value.
  pub fn apply(updater: impl FnOnce(Value) -> Value + Send + 'static) -> Self {
    SharedUpdate::Apply(Box::new(updater))
  }
}

impl fmt::Debug for SharedUpdate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SharedUpdate::Replace(v) => f.debug_tuple("Replace").field(v).finish(),
      SharedUpdate::Apply(_) => f.debug_tuple("Apply").field(&"<updater>").finish(),
    }
  }
}

/// Handle to the shared cross-step value. Clones refer to the same value, so
/// the handle given to each handler and the one held by the orchestrator see
/// every committed update.
///
/// Updates commit immediately. They are not rolled back when a later handler
/// in the same chain fails; a chain that ends in Error leaves all updates its
/// earlier handlers made.
#[derive(Clone)]
pub struct SharedState {
  cell: Arc<Mutex<Value>>,
}

impl SharedState {
  /// New shared state holding an empty JSON object.
  pub fn new() -> Self {
    Self {
      cell: Arc::new(Mutex::new(Value::Object(Map::new()))),
    }
  }

  fn lock(&self) -> MutexGuard<'_, Value> {
    self.cell.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Snapshot of the current value.
  pub fn get(&self) -> Value {
    self.lock().clone()
  }

  /// Commits an update: replaces the value, or applies the updater to the
  /// previous value. The result is stored as-is, without validation.
  #[instrument(level = "trace", skip(self, update))]
  pub fn commit(&self, update: SharedUpdate) {
    let mut guard = self.lock();
    match update {
      SharedUpdate::Replace(value) => *guard = value,
      SharedUpdate::Apply(updater) => {
        let previous = std::mem::take(&mut *guard);
        *guard = updater(previous);
      }
    }
  }

  /// Replaces the whole shared value.
  pub fn replace(&self, value: impl Into<Value>) {
    self.commit(SharedUpdate::Replace(value.into()));
  }

  /// Applies `updater` to the previous value and stores the result.
  pub fn update(&self, updater: impl FnOnce(Value) -> Value + Send + 'static) {
    self.commit(SharedUpdate::Apply(Box::new(updater)));
  }
}

impl Default for SharedState {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for SharedState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SharedState").field("value", &self.get()).finish()
  }
}
