//! Errors surfaced by step execution.
//!
//! There is exactly one failure kind at this layer: a handler rejecting.
//! Navigation and shared-state updates never error.

use thiserror::Error;

/// Failure signalled by a step handler. The orchestrator does not interpret
/// it; it records Error status and hands it back to the `execute` caller
/// wrapped in [ExecuteError].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HandlerError {
  message: String,
  #[source]
  source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl HandlerError {
  /// Failure carrying just a message.
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      source: None,
    }
  }

  /// Failure wrapping an underlying error, kept reachable via `source()`.
  pub fn with_source(
    message: impl Into<String>,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
  ) -> Self {
    Self {
      message: message.into(),
      source: Some(source.into()),
    }
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl From<String> for HandlerError {
  fn from(message: String) -> Self {
    Self::new(message)
  }
}

impl From<&str> for HandlerError {
  fn from(message: &str) -> Self {
    Self::new(message)
  }
}

/// Error returned by `execute` when a handler chain fails: which step and
/// which handler in its chain, with the handler's failure as the source.
#[derive(Debug, Error)]
#[error("step {step} handler {handler} failed: {source}")]
pub struct ExecuteError {
  /// Step whose chain failed.
  pub step: usize,
  /// Zero-based index of the failing handler within the step's chain.
  pub handler: usize,
  #[source]
  pub source: HandlerError,
}
