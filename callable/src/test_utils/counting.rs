//! CountingInvocable — returns a fixed value and records how it was called.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;

use crate::error::CallError;
use crate::invocable::Invocable;

/// An invocable that returns a clone of its value and counts invocations.
///
/// Also totals the number of arguments seen across all calls, which lets
/// tests check that arguments reached the function.
pub struct CountingInvocable<T> {
    value: T,
    calls: AtomicUsize,
    args_seen: AtomicUsize,
}

impl<T> CountingInvocable<T> {
    /// Create an invocable that returns `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            calls: AtomicUsize::new(0),
            args_seen: AtomicUsize::new(0),
        }
    }

    /// Number of times this has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Total number of arguments received across all invocations.
    pub fn args_seen(&self) -> usize {
        self.args_seen.load(Ordering::SeqCst)
    }
}

impl<T: Clone + Send + Sync> Invocable<T> for CountingInvocable<T> {
    fn invoke(&self, args: &[Value]) -> Result<T, CallError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.args_seen.fetch_add(args.len(), Ordering::SeqCst);
        Ok(self.value.clone())
    }
}
