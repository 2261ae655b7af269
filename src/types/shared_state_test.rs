//! Tests for `SharedState` and `SharedUpdate`.

use serde_json::{Value, json};

use super::{SharedState, SharedUpdate};

#[test]
fn starts_as_empty_object() {
  let shared = SharedState::new();
  assert_eq!(shared.get(), json!({}));
}

#[test]
fn replace_overwrites_whole_value() {
  let shared = SharedState::new();
  shared.replace(json!({"first_name": "john"}));
  shared.replace(json!(["a", "b"]));
  assert_eq!(shared.get(), json!(["a", "b"]));
}

#[test]
fn update_receives_previous_value() {
  let shared = SharedState::new();
  shared.replace(json!(["a"]));
  shared.update(|previous| {
    let mut items = match previous {
      Value::Array(items) => items,
      _ => vec![],
    };
    items.push(json!("b"));
    Value::Array(items)
  });
  assert_eq!(shared.get(), json!(["a", "b"]));
}

#[test]
fn clones_share_the_same_value() {
  let shared = SharedState::new();
  let other = shared.clone();
  other.replace(json!({"seen": true}));
  assert_eq!(shared.get(), json!({"seen": true}));
}

#[test]
fn commit_accepts_both_update_shapes() {
  let shared = SharedState::new();
  shared.commit(SharedUpdate::replace(json!(1)));
  shared.commit(SharedUpdate::apply(|previous| {
    json!(previous.as_i64().unwrap_or(0) + 1)
  }));
  assert_eq!(shared.get(), json!(2));
}
