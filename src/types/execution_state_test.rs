//! Tests for `ExecutionState`.

use serde_json::json;

use super::{ExecutionState, ExecutionStatus, Step};

fn empty_step() -> Step {
  vec![]
}

#[test]
fn new_starts_not_started_with_no_output() {
  let state = ExecutionState::new(vec![empty_step(), empty_step()], 0);
  assert_eq!(state.current_step, 0);
  assert_eq!(state.status, ExecutionStatus::NotStarted);
  assert_eq!(state.step_output, None);
  assert!(!state.all_done);
}

#[test]
fn new_respects_initial_step() {
  let state = ExecutionState::new(vec![empty_step(), empty_step(), empty_step()], 2);
  assert_eq!(state.current_step, 2);
}

#[test]
fn at_last_step_for_single_and_final_index() {
  let one = ExecutionState::new(vec![empty_step()], 0);
  assert!(one.at_last_step());

  let mut three = ExecutionState::new(vec![empty_step(), empty_step(), empty_step()], 0);
  assert!(!three.at_last_step());
  three.current_step = 2;
  assert!(three.at_last_step());
  three.current_step = 7;
  assert!(three.at_last_step());
}

#[test]
fn at_last_step_true_for_empty_registry() {
  let state = ExecutionState::new(vec![], 0);
  assert!(state.at_last_step());
}

#[test]
fn debug_summarizes_registry_size() {
  let mut state = ExecutionState::new(vec![empty_step()], 0);
  state.step_output = Some(json!(100));
  let printed = format!("{state:?}");
  assert!(printed.contains("steps: 1"));
  assert!(printed.contains("current_step: 0"));
}
