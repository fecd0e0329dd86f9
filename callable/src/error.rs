//! Error type for invocation.

use thiserror::Error;

/// Errors raised while invoking a [`Callable`](crate::Callable).
///
/// Coercion itself never fails. Only a function-backed callable can return
/// one of these, and only when its own invocation fails. A constant
/// callable always succeeds.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CallError {
    /// The arguments could not be decoded into the shape the function expects.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The function ran and reported a failure.
    #[error("call failed: {0}")]
    Failed(String),

    /// Catch-all. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl CallError {
    /// Whether the failure came from argument decoding rather than the function body.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, CallError::InvalidArguments(_))
    }
}

impl From<serde_json::Error> for CallError {
    fn from(err: serde_json::Error) -> Self {
        CallError::InvalidArguments(err.to_string())
    }
}
