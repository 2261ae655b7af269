//! Tests for the handler adapter.

use serde_json::{Value, json};

use super::{SharedState, handler};
use crate::error::HandlerError;

#[tokio::test]
async fn fn_handler_threads_previous_output() {
  let h = handler(|previous, _state, _shared| async move {
    let mut s = previous.as_str().unwrap_or("").to_string();
    s.push('!');
    Ok(Value::String(s))
  });
  let out = h
    .run(json!("hello"), json!({}), SharedState::new())
    .await
    .unwrap();
  assert_eq!(out, json!("hello!"));
}

#[tokio::test]
async fn fn_handler_sees_shared_snapshot_and_commits_updates() {
  let shared = SharedState::new();
  shared.replace(json!({"count": 1}));
  let h = handler(|_previous, state, shared: SharedState| async move {
    let count = state["count"].as_i64().unwrap_or(0);
    shared.replace(json!({"count": count + 1}));
    Ok(json!(count))
  });
  let out = h.run(Value::Null, shared.get(), shared.clone()).await.unwrap();
  assert_eq!(out, json!(1));
  assert_eq!(shared.get(), json!({"count": 2}));
}

#[tokio::test]
async fn fn_handler_propagates_errors() {
  let h = handler(|_previous, _state, _shared| async move {
    Err::<Value, _>(HandlerError::new("Failed"))
  });
  let err = h
    .run(Value::Null, json!({}), SharedState::new())
    .await
    .unwrap_err();
  assert_eq!(err.to_string(), "Failed");
}
