//! # callable — coerce any value into something you can call
//!
//! Configuration and hooks often accept "a value, or a function that
//! computes the value". This crate gives both shapes one calling
//! convention.
//!
//! | Item | What it does |
//! |------|-------------|
//! | [`Callable`] | A constant or a shared invocable, called the same way |
//! | [`Invocable`] | The protocol: call with any number of arguments |
//! | [`to_callable`] | Wrap a plain value, pass an invocable through |
//! | [`to_callable_or`] | Same, for an `Option`, with a default for `None` |
//! | [`to_callable_unless_null`] | Same, with a default for in-band nulls such as JSON `null` |
//! | [`is_callable`] | Is this value already invocable? |
//! | [`IntoCallable`] | The same operations in method position |
//!
//! ## Coercion rules
//!
//! 1. An absent value (`None` given to [`to_callable_or`], JSON `null` given
//!    to [`to_callable_unless_null`]) is replaced by the coerced default.
//! 2. A value that is already invocable is returned unchanged. Identity is
//!    kept: the result shares the same `Arc`.
//! 3. Anything else becomes a constant that ignores its arguments and
//!    returns the value on every call.
//!
//! ```
//! use callable::{to_callable, to_callable_or, Callable, IntoCallable};
//! use serde_json::json;
//!
//! let greeting = to_callable("hello");
//! assert_eq!(greeting.call(&[json!(1), json!(2)]).unwrap(), "hello");
//!
//! let add2 = Callable::typed(|(a, b): (String, String)| format!("{a} {b}"));
//! assert!(add2.is_callable());
//! let same = to_callable(add2.clone());
//! assert!(same.ptr_eq(&add2));
//! assert_eq!(same.call(&[json!("Call"), json!("me")]).unwrap(), "Call me");
//!
//! let fallback = to_callable_or(None::<&str>, "DEFAULT VALUE");
//! assert_eq!(fallback.call0().unwrap(), "DEFAULT VALUE");
//! ```
//!
//! ## Dependency Notes
//!
//! Arguments are `serde_json::Value`s. A slice of JSON values carries any
//! number of heterogeneous arguments through a single object-safe trait,
//! and [`Callable::typed`] decodes them back into Rust types with serde.

#![deny(missing_docs)]

pub mod coerce;
pub mod error;
pub mod invocable;
pub mod wrapper;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use coerce::{
    IntoCallable, Nullable, is_callable, to_callable, to_callable_or, to_callable_unless_null,
};
pub use error::CallError;
pub use invocable::{FnInvocable, Invocable, TryFnInvocable, TypedInvocable};
pub use wrapper::Callable;
