//! Read-only snapshot of the observable state surface, for host UI binding.

use serde::Serialize;
use serde_json::Value;

use super::ExecutionStatus;

/// Read-only snapshot of everything a host layer renders from: cursor,
/// status (plus the derived loading flag), last output, shared state,
/// completion flag, and the registry size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionSnapshot {
  pub current_step: usize,
  pub status: ExecutionStatus,
  pub is_loading: bool,
  pub step_output: Option<Value>,
  pub shared_state: Value,
  pub is_all_done: bool,
  pub step_count: usize,
}
