//! join_args — a variadic function over string arguments.

use serde_json::Value;

use crate::wrapper::Callable;

/// A callable that joins its arguments with single spaces.
///
/// Strings are used as-is; other values use their JSON text.
pub fn join_args() -> Callable<String> {
    Callable::function(|args: &[Value]| {
        args.iter()
            .map(|arg| match arg {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    })
}
