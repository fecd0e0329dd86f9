//! The invocable protocol and closure adapters.
//!
//! [`Invocable`] is the seam: anything that can be called with a list of
//! arguments and produce a `T`. Closures enter through one of the adapters
//! below, which is how [`Callable::function`](crate::Callable::function) and
//! friends build their trait objects.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CallError;

/// Something that can be invoked with any number of arguments.
///
/// Arguments are JSON values so that one trait object can accept a variable
/// number of heterogeneous arguments. Implementations decide their own arity
/// rules: they may ignore extra arguments, require an exact count, or fail.
///
/// Object safe, so heterogeneous invocables can live behind
/// `Arc<dyn Invocable<T>>`.
///
/// # Example
///
/// ```
/// use callable::{CallError, Invocable};
/// use serde_json::Value;
///
/// struct Count;
///
/// impl Invocable<usize> for Count {
///     fn invoke(&self, args: &[Value]) -> Result<usize, CallError> {
///         Ok(args.len())
///     }
/// }
///
/// assert_eq!(Count.invoke(&[Value::Null, Value::Null]).unwrap(), 2);
/// ```
pub trait Invocable<T>: Send + Sync {
    /// Invoke with the given arguments.
    fn invoke(&self, args: &[Value]) -> Result<T, CallError>;
}

/// Adapter for infallible closures that receive the raw argument list.
///
/// Behaves like a variadic function: every argument is passed through and
/// the closure picks what it needs.
pub struct FnInvocable<F> {
    f: F,
}

impl<F> FnInvocable<F> {
    /// Wrap a closure.
    #[must_use]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F> Invocable<T> for FnInvocable<F>
where
    F: Fn(&[Value]) -> T + Send + Sync,
{
    fn invoke(&self, args: &[Value]) -> Result<T, CallError> {
        Ok((self.f)(args))
    }
}

impl<F> fmt::Debug for FnInvocable<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnInvocable")
    }
}

/// Adapter for fallible closures that receive the raw argument list.
pub struct TryFnInvocable<F> {
    f: F,
}

impl<F> TryFnInvocable<F> {
    /// Wrap a closure.
    #[must_use]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F> Invocable<T> for TryFnInvocable<F>
where
    F: Fn(&[Value]) -> Result<T, CallError> + Send + Sync,
{
    fn invoke(&self, args: &[Value]) -> Result<T, CallError> {
        (self.f)(args)
    }
}

impl<F> fmt::Debug for TryFnInvocable<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TryFnInvocable")
    }
}

/// Adapter for closures over strongly-typed arguments.
///
/// The argument list is decoded as a JSON array into `A`, usually a tuple,
/// so `|(a, b): (String, String)| ...` takes exactly two string arguments.
/// Arity is strict: too few, too many, or mistyped arguments fail with
/// [`CallError::InvalidArguments`] and the closure is not run.
pub struct TypedInvocable<A, F> {
    f: F,
    _args: PhantomData<fn(A)>,
}

impl<A, F> TypedInvocable<A, F> {
    /// Wrap a closure.
    #[must_use]
    pub fn new(f: F) -> Self {
        Self {
            f,
            _args: PhantomData,
        }
    }
}

impl<A, T, F> Invocable<T> for TypedInvocable<A, F>
where
    A: DeserializeOwned,
    F: Fn(A) -> T + Send + Sync,
{
    fn invoke(&self, args: &[Value]) -> Result<T, CallError> {
        let decoded: A = serde_json::from_value(Value::Array(args.to_vec())).map_err(|err| {
            tracing::debug!(error = %err, arg_count = args.len(), "argument decoding failed");
            CallError::from(err)
        })?;
        Ok((self.f)(decoded))
    }
}

impl<A, F> fmt::Debug for TypedInvocable<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedInvocable")
            .field("args", &std::any::type_name::<A>())
            .finish()
    }
}
