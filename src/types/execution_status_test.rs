//! Tests for `ExecutionStatus`.

use super::ExecutionStatus;

#[test]
fn display_renders_snake_case() {
  assert_eq!(ExecutionStatus::NotStarted.to_string(), "not_started");
  assert_eq!(ExecutionStatus::InProgress.to_string(), "in_progress");
  assert_eq!(ExecutionStatus::Success.to_string(), "success");
  assert_eq!(ExecutionStatus::Error.to_string(), "error");
}

#[test]
fn is_loading_only_in_progress() {
  assert!(ExecutionStatus::InProgress.is_loading());
  assert!(!ExecutionStatus::NotStarted.is_loading());
  assert!(!ExecutionStatus::Success.is_loading());
  assert!(!ExecutionStatus::Error.is_loading());
}

#[test]
fn serializes_to_snake_case_strings() {
  assert_eq!(
    serde_json::to_value(ExecutionStatus::NotStarted).unwrap(),
    serde_json::json!("not_started")
  );
  assert_eq!(
    serde_json::to_value(ExecutionStatus::Success).unwrap(),
    serde_json::json!("success")
  );
}
