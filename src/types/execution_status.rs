//! Lifecycle status of the current step's latest execution attempt.

use std::fmt;

use serde::Serialize;

/// Lifecycle status of the current step's latest execution attempt.
///
/// Per step visit the machine is `NotStarted → InProgress → {Success, Error}`.
/// Success re-enters InProgress only through a forced execute; navigation
/// resets a freshly-visited step to NotStarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
  NotStarted,
  InProgress,
  Success,
  Error,
}

impl ExecutionStatus {
  /// True while a handler chain is running for the current step.
  pub fn is_loading(&self) -> bool {
    matches!(self, ExecutionStatus::InProgress)
  }
}

impl fmt::Display for ExecutionStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ExecutionStatus::NotStarted => write!(f, "not_started"),
      ExecutionStatus::InProgress => write!(f, "in_progress"),
      ExecutionStatus::Success => write!(f, "success"),
      ExecutionStatus::Error => write!(f, "error"),
    }
  }
}
