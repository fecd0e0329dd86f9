//! `Callable<T>`: a value or an invocable producing one.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CallError;
use crate::invocable::{FnInvocable, Invocable, TryFnInvocable, TypedInvocable};

/// Either a plain value or an invocable that produces one.
///
/// Both cases are called the same way. A [`Constant`](Callable::Constant)
/// ignores its arguments and hands back a clone of the captured value on
/// every call. A [`Function`](Callable::Function) forwards the arguments to
/// the shared invocable, whose own arity rules apply.
///
/// Cloning a `Function` shares the same invocable; [`Callable::ptr_eq`]
/// tells whether two callables are the same function.
#[derive(Clone)]
pub enum Callable<T> {
    /// A captured value returned on every call.
    Constant(T),
    /// A shared invocable.
    Function(Arc<dyn Invocable<T>>),
}

impl<T> Callable<T> {
    /// Wrap a value so that calling it returns the value.
    #[must_use]
    pub fn constant(value: T) -> Self {
        Callable::Constant(value)
    }

    /// Build a function from a closure that receives the raw argument list.
    ///
    /// The closure sees every argument and may ignore any of them, so it
    /// accepts any number of arguments.
    #[must_use]
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> T + Send + Sync + 'static,
    {
        Callable::Function(Arc::new(FnInvocable::new(f)))
    }

    /// Build a function from a closure that can fail.
    #[must_use]
    pub fn try_function<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<T, CallError> + Send + Sync + 'static,
    {
        Callable::Function(Arc::new(TryFnInvocable::new(f)))
    }

    /// Build a function over strongly-typed arguments.
    ///
    /// Arguments are decoded into `A` (typically a tuple). A call with the
    /// wrong number or types of arguments fails with
    /// [`CallError::InvalidArguments`].
    ///
    /// ```
    /// use callable::Callable;
    /// use serde_json::json;
    ///
    /// let add2 = Callable::typed(|(a, b): (String, String)| format!("{a} {b}"));
    /// assert_eq!(add2.call(&[json!("Call"), json!("me")]).unwrap(), "Call me");
    /// ```
    #[must_use]
    pub fn typed<A, F>(f: F) -> Self
    where
        A: DeserializeOwned + 'static,
        F: Fn(A) -> T + Send + Sync + 'static,
    {
        Callable::Function(Arc::new(TypedInvocable::<A, F>::new(f)))
    }

    /// Wrap an existing [`Invocable`] implementation.
    #[must_use]
    pub fn from_invocable(invocable: impl Invocable<T> + 'static) -> Self {
        Callable::Function(Arc::new(invocable))
    }

    /// Wrap a shared invocable without re-allocating, keeping its identity.
    #[must_use]
    pub fn from_arc(invocable: Arc<dyn Invocable<T>>) -> Self {
        Callable::Function(invocable)
    }

    /// Whether this is backed by an invocable.
    pub fn is_function(&self) -> bool {
        matches!(self, Callable::Function(_))
    }

    /// Whether this wraps a plain value.
    pub fn is_constant(&self) -> bool {
        matches!(self, Callable::Constant(_))
    }

    /// The captured value, if this is a constant.
    pub fn as_constant(&self) -> Option<&T> {
        match self {
            Callable::Constant(value) => Some(value),
            Callable::Function(_) => None,
        }
    }

    /// The shared invocable, if this is a function.
    pub fn as_invocable(&self) -> Option<&Arc<dyn Invocable<T>>> {
        match self {
            Callable::Constant(_) => None,
            Callable::Function(f) => Some(f),
        }
    }

    /// Take the captured value out, if this is a constant.
    pub fn into_constant(self) -> Option<T> {
        match self {
            Callable::Constant(value) => Some(value),
            Callable::Function(_) => None,
        }
    }

    /// Whether both are functions sharing the same invocable.
    ///
    /// Constants never compare as identical, even when their values are equal.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Callable::Function(a), Callable::Function(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl<T: Clone> Callable<T> {
    /// Call with the given arguments.
    ///
    /// A constant ignores `args` and never fails. A function receives `args`
    /// unchanged.
    pub fn call(&self, args: &[Value]) -> Result<T, CallError> {
        match self {
            Callable::Constant(value) => Ok(value.clone()),
            Callable::Function(f) => f.invoke(args),
        }
    }

    /// Call with no arguments.
    pub fn call0(&self) -> Result<T, CallError> {
        self.call(&[])
    }
}

impl<T> From<T> for Callable<T> {
    fn from(value: T) -> Self {
        Callable::Constant(value)
    }
}

impl<T: Clone + Send + Sync> Invocable<T> for Callable<T> {
    fn invoke(&self, args: &[Value]) -> Result<T, CallError> {
        self.call(args)
    }
}

impl<T: fmt::Debug> fmt::Debug for Callable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Callable::Function(inner) => f
                .debug_tuple("Function")
                .field(&Arc::as_ptr(inner).cast::<()>())
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn _assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn callable_is_send_sync() {
        _assert_send_sync::<Callable<String>>();
        _assert_send_sync::<Callable<Value>>();
    }

    #[test]
    fn constant_ignores_arguments() {
        let c = Callable::constant("NOT CALLABLE".to_string());
        assert_eq!(c.call0().unwrap(), "NOT CALLABLE");
        assert_eq!(
            c.call(&[json!(1), json!(2), json!(3)]).unwrap(),
            "NOT CALLABLE"
        );
    }

    #[test]
    fn constant_returns_same_value_every_call() {
        let c = Callable::constant(vec![1, 2, 3]);
        for _ in 0..3 {
            assert_eq!(c.call0().unwrap(), vec![1, 2, 3]);
        }
    }

    #[test]
    fn function_receives_arguments() {
        let count = Callable::function(|args: &[Value]| args.len());
        assert_eq!(count.call0().unwrap(), 0);
        assert_eq!(count.call(&[json!("a"), json!(null)]).unwrap(), 2);
    }

    #[test]
    fn try_function_surfaces_its_own_error() {
        let failing: Callable<u32> =
            Callable::try_function(|_: &[Value]| Err(CallError::Failed("nope".into())));
        let err = failing.call0().unwrap_err();
        assert_eq!(err.to_string(), "call failed: nope");
    }

    #[test]
    fn clones_share_the_function() {
        let f = Callable::function(|_: &[Value]| 1u8);
        let g = f.clone();
        assert!(f.ptr_eq(&g));

        let other = Callable::function(|_: &[Value]| 1u8);
        assert!(!f.ptr_eq(&other));
    }

    #[test]
    fn constants_are_never_identical() {
        let a = Callable::constant(1);
        let b = a.clone();
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn from_arc_keeps_identity() {
        let shared: Arc<dyn Invocable<u8>> = Arc::new(FnInvocable::new(|_: &[Value]| 7u8));
        let c = Callable::from_arc(Arc::clone(&shared));
        let inner = c.as_invocable().unwrap();
        assert!(Arc::ptr_eq(inner, &shared));
    }

    #[test]
    fn accessors() {
        let c = Callable::from(5);
        assert!(c.is_constant());
        assert!(!c.is_function());
        assert_eq!(c.as_constant(), Some(&5));
        assert!(c.as_invocable().is_none());
        assert_eq!(c.into_constant(), Some(5));

        let f = Callable::function(|_: &[Value]| 5);
        assert!(f.is_function());
        assert!(f.as_constant().is_none());
        assert!(f.into_constant().is_none());
    }

    #[test]
    fn callable_nests_as_invocable() {
        let inner = Callable::constant("inner".to_string());
        let outer = Callable::from_invocable(inner);
        assert!(outer.is_function());
        assert_eq!(outer.call(&[json!(1)]).unwrap(), "inner");
    }

    #[test]
    fn debug_output() {
        let c = Callable::constant("x");
        assert_eq!(format!("{c:?}"), "Constant(\"x\")");
        let f = Callable::function(|_: &[Value]| "x");
        assert!(format!("{f:?}").starts_with("Function("));
    }
}
