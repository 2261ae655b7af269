//! # stepweave
//!
//! Stepwise async execution: an ordered sequence of steps, each a chain of
//! asynchronous handlers, driven one step at a time with shared mutable state
//! visible to every handler and a status lifecycle per step. Built for
//! multi-stage workflows (wizards, onboarding, multi-phase submission) where
//! each stage is itself a pipeline of async operations feeding one another.
//!
//! ## Architecture
//!
//! - [types::ExecutionState] — the single mutable record: cursor, registry,
//!   last output, status, completion flag.
//! - [StepwiseExecutor::execute] — the step reducer: a strict left-fold over
//!   the current step's handlers, each awaited before the next starts.
//! - [StepwiseExecutor::next] / [StepwiseExecutor::move_to_step] — navigation,
//!   always resetting status for the freshly-visited step.
//!
//! ## Usage
//!
//! ```
//! use serde_json::{Value, json};
//! use stepweave::{StepwiseExecutor, handler};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let steps = vec![
//!   // first step: fetch, then validate
//!   vec![
//!     handler(|_previous, _state, shared| async move {
//!       shared.update(|prev| {
//!         let mut fields = prev.as_object().cloned().unwrap_or_default();
//!         fields.insert("fetched".into(), json!(true));
//!         Value::Object(fields)
//!       });
//!       Ok(json!({"user": "john"}))
//!     }),
//!     handler(|previous, _state, _shared| async move {
//!       Ok(json!({"validated": previous["user"] == json!("john")}))
//!     }),
//!   ],
//!   // second step: submit the validated payload
//!   vec![handler(|previous, _state, _shared| async move { Ok(previous) })],
//! ];
//!
//! let executor = StepwiseExecutor::new(steps);
//! let output = executor.execute(false).await.expect("first step");
//! assert_eq!(output, Some(json!({"validated": true})));
//!
//! executor.next(false);
//! assert_eq!(executor.current_step(), 1);
//! executor.execute(false).await.expect("second step");
//! executor.next(false);
//! assert!(executor.is_all_done());
//! # }
//! ```
//!
//! Handlers signal failure by returning `Err`; the chain stops, status becomes
//! Error, and the error propagates from `execute`. Shared-state updates commit
//! immediately and survive a later failure in the same chain.

pub mod error;
pub mod executor;
pub mod setters;
pub mod types;

pub use error::{ExecuteError, HandlerError};
pub use executor::StepwiseExecutor;
pub use setters::RawSetters;
pub use types::{
  ExecutionSnapshot, ExecutionStatus, Handler, SharedState, SharedUpdate, Step, StepHandler,
  StepsAndHandlers, handler,
};
