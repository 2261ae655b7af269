//! Handler contract and the step registry aliases built from it.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::SharedState;
use crate::error::HandlerError;

/// One asynchronous handler in a step's chain.
///
/// A handler receives the resolved output of the previous handler (`Null` when
/// nothing has produced output yet), a snapshot of the shared state taken at
/// invocation time, and a [SharedState] handle for committing updates.
/// Returning `Err` is the designated way to signal step failure; the chain
/// stops there and the error propagates to the `execute` caller.
#[async_trait]
pub trait StepHandler: Send + Sync {
  async fn run(
    &self,
    previous_output: Value,
    shared_state: Value,
    shared: SharedState,
  ) -> Result<Value, HandlerError>;
}

/// A registered handler, shared by the registry and any in-flight chain.
pub type Handler = Arc<dyn StepHandler>;

/// One step: an ordered handler chain run under a single status lifecycle.
pub type Step = Vec<Handler>;

/// The full registry: steps in execution order, each a chain of handlers.
pub type StepsAndHandlers = Vec<Step>;

/// Adapter turning an async closure into a [StepHandler].
pub struct FnHandler<F>(F);

#[async_trait]
impl<F, Fut> StepHandler for FnHandler<F>
where
  F: Fn(Value, Value, SharedState) -> Fut + Send + Sync,
  Fut: Future<Output = Result<Value, HandlerError>> + Send + 'static,
{
  async fn run(
    &self,
    previous_output: Value,
    shared_state: Value,
    shared: SharedState,
  ) -> Result<Value, HandlerError> {
    (self.0)(previous_output, shared_state, shared).await
  }
}

/// Boxes an async closure as a registered [Handler].
///
/// ```
/// use serde_json::json;
/// use stepweave::handler;
///
/// let doubled = handler(|previous, _state, _shared| async move {
///   Ok(json!(previous.as_i64().unwrap_or(0) * 2))
/// });
/// # let _ = doubled;
/// ```
pub fn handler<F, Fut>(f: F) -> Handler
where
  F: Fn(Value, Value, SharedState) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = Result<Value, HandlerError>> + Send + 'static,
{
  Arc::new(FnHandler(f))
}
