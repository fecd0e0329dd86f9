//! Coercion of arbitrary values into callables.
//!
//! [`to_callable`] turns a plain value into a constant callable and passes
//! anything already invocable through untouched. [`to_callable_or`] does the
//! same for an optional value, coercing a default when the value is `None`.
//! [`to_callable_unless_null`] does it for values with an in-band absent
//! marker such as JSON `null`. [`is_callable`] answers whether a value is
//! already invocable.
//!
//! The same operations are available in method position through the
//! [`IntoCallable`] extension trait:
//!
//! ```
//! use callable::IntoCallable;
//!
//! let c = "NOT CALLABLE".into_callable();
//! assert_eq!(c.call0().unwrap(), "NOT CALLABLE");
//! assert!(!"x".is_callable());
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::sync::Arc;

use serde_json::Value;

use crate::invocable::Invocable;
use crate::wrapper::Callable;

/// A type with a canonical "no value" marker.
///
/// [`to_callable_unless_null`] uses this to decide when to fall back to its
/// default.
pub trait Nullable {
    /// The absent marker.
    fn null() -> Self;

    /// Whether this is the absent marker.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn null() -> Self {
        None
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl Nullable for Value {
    fn null() -> Self {
        Value::Null
    }

    fn is_null(&self) -> bool {
        Value::is_null(self)
    }
}

/// Conversion into a [`Callable`], and the "is this invocable?" predicate.
///
/// Implemented for [`Callable`] itself and `Arc<dyn Invocable<T>>` (both
/// pass through unchanged when they hold a function) and for common plain
/// value types, which become constants: scalars, strings, tuples up to six
/// elements, `Option`, `Box` and the std collections.
///
/// An `Option` is data: `Some(f)` becomes a constant holding `Some(f)`. To
/// treat an optional invocable as "this function, or a fallback", pass it to
/// [`to_callable_or`], which passes `f` through unchanged.
///
/// Any other type can enter through [`Callable::from`] or
/// [`Callable::constant`], or implement this trait to become coercible:
///
/// ```
/// use callable::{Callable, IntoCallable};
///
/// #[derive(Clone)]
/// struct Port(u16);
///
/// impl IntoCallable for Port {
///     type Output = Port;
///
///     fn into_callable(self) -> Callable<Port> {
///         Callable::constant(self)
///     }
/// }
///
/// assert_eq!(Port(8080).into_callable().call0().unwrap().0, 8080);
///
/// let c = Callable::from(std::time::Duration::from_secs(1));
/// assert_eq!(c.call0().unwrap().as_secs(), 1);
/// ```
pub trait IntoCallable {
    /// What the resulting callable produces.
    type Output;

    /// Coerce into a callable. Method-position form of [`to_callable`].
    fn into_callable(self) -> Callable<Self::Output>;

    /// Whether this value is already invocable. Method-position form of
    /// [`is_callable`].
    fn is_callable(&self) -> bool {
        false
    }
}

impl<T> IntoCallable for Callable<T> {
    type Output = T;

    fn into_callable(self) -> Callable<T> {
        self
    }

    fn is_callable(&self) -> bool {
        self.is_function()
    }
}

impl<T> IntoCallable for Arc<dyn Invocable<T>> {
    type Output = T;

    fn into_callable(self) -> Callable<T> {
        Callable::from_arc(self)
    }

    fn is_callable(&self) -> bool {
        true
    }
}

macro_rules! impl_plain_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoCallable for $ty {
                type Output = $ty;

                fn into_callable(self) -> Callable<$ty> {
                    Callable::Constant(self)
                }
            }
        )*
    };
}

impl_plain_value!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    Value,
);

impl<'a> IntoCallable for &'a str {
    type Output = &'a str;

    fn into_callable(self) -> Callable<&'a str> {
        Callable::Constant(self)
    }
}

impl<T> IntoCallable for Option<T> {
    type Output = Option<T>;

    fn into_callable(self) -> Callable<Option<T>> {
        Callable::Constant(self)
    }
}

impl<T> IntoCallable for Vec<T> {
    type Output = Vec<T>;

    fn into_callable(self) -> Callable<Vec<T>> {
        Callable::Constant(self)
    }
}

impl<K, V> IntoCallable for HashMap<K, V> {
    type Output = HashMap<K, V>;

    fn into_callable(self) -> Callable<HashMap<K, V>> {
        Callable::Constant(self)
    }
}

impl<K, V> IntoCallable for BTreeMap<K, V> {
    type Output = BTreeMap<K, V>;

    fn into_callable(self) -> Callable<BTreeMap<K, V>> {
        Callable::Constant(self)
    }
}

macro_rules! impl_plain_generic {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T> IntoCallable for $ty<T> {
                type Output = $ty<T>;

                fn into_callable(self) -> Callable<$ty<T>> {
                    Callable::Constant(self)
                }
            }
        )*
    };
}

impl_plain_generic!(Box, VecDeque, HashSet, BTreeSet);

macro_rules! impl_plain_tuple {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name),+> IntoCallable for ($($name,)+) {
                type Output = ($($name,)+);

                fn into_callable(self) -> Callable<Self::Output> {
                    Callable::Constant(self)
                }
            }
        )*
    };
}

impl_plain_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
);

/// Coerce `value` into a callable.
///
/// An invocable is returned unchanged, keeping its identity. Anything else
/// is wrapped in a constant that ignores its arguments and returns `value`.
/// Never fails.
///
/// ```
/// use callable::{to_callable, Callable};
/// use serde_json::{json, Value};
///
/// let c = to_callable("NOT CALLABLE");
/// assert_eq!(c.call(&[json!(1), json!(2), json!(3)]).unwrap(), "NOT CALLABLE");
///
/// let f = Callable::function(|args: &[Value]| args.len());
/// assert!(to_callable(f.clone()).ptr_eq(&f));
/// ```
pub fn to_callable<V: IntoCallable>(value: V) -> Callable<V::Output> {
    let callable = value.into_callable();
    if callable.is_function() {
        tracing::trace!("invocable passed through unchanged");
    } else {
        tracing::trace!("value wrapped as constant");
    }
    callable
}

/// Coerce an optional value into a callable, falling back to `default`.
///
/// `Some(value)` behaves exactly as [`to_callable`]: an invocable passes
/// through unchanged and a plain value is wrapped. `None` is replaced by
/// `to_callable(default)`, so an invocable default also passes through
/// unchanged. Never fails.
///
/// ```
/// use callable::{to_callable_or, Callable};
/// use serde_json::Value;
///
/// let c = to_callable_or(None::<&str>, "DEFAULT VALUE");
/// assert_eq!(c.call0().unwrap(), "DEFAULT VALUE");
///
/// let hook = Callable::function(|_: &[Value]| "hooked");
/// let c = to_callable_or(Some(hook.clone()), "DEFAULT VALUE");
/// assert!(c.ptr_eq(&hook));
/// ```
pub fn to_callable_or<V, D>(value: Option<V>, default: D) -> Callable<V::Output>
where
    V: IntoCallable,
    D: IntoCallable<Output = V::Output>,
{
    match value {
        Some(value) => to_callable(value),
        None => {
            tracing::debug!("absent value, coercing default instead");
            to_callable(default)
        }
    }
}

/// Coerce `value` into a callable, falling back to `default` when `value`
/// holds its type's absent marker (see [`Nullable`]).
///
/// This is the in-band counterpart of [`to_callable_or`] for types such as
/// `serde_json::Value` where "no value" is itself a value. A function is
/// never replaced, whatever it would return. If the default is absent too,
/// the result returns the absent marker.
///
/// ```
/// use callable::to_callable_unless_null;
/// use serde_json::json;
///
/// let c = to_callable_unless_null(json!(null), json!("DEFAULT VALUE"));
/// assert_eq!(c.call0().unwrap(), json!("DEFAULT VALUE"));
/// ```
pub fn to_callable_unless_null<V, D>(value: V, default: D) -> Callable<V::Output>
where
    V: IntoCallable,
    D: IntoCallable<Output = V::Output>,
    V::Output: Nullable,
{
    let callable = value.into_callable();
    if callable.as_constant().is_some_and(|v| v.is_null()) {
        tracing::debug!("null value, coercing default instead");
        return to_callable(default);
    }
    to_callable(callable)
}

/// Whether `value` is already invocable.
pub fn is_callable<V: IntoCallable>(value: &V) -> bool {
    value.is_callable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn option_nullability() {
        assert!(Option::<u8>::null().is_null());
        assert!(!Some(0u8).is_null());
    }

    #[test]
    fn json_nullability() {
        assert!(Value::null().is_null());
        assert!(Nullable::is_null(&json!(null)));
        assert!(!Nullable::is_null(&json!(0)));
    }

    #[test]
    fn plain_values_are_not_callable() {
        assert!(!is_callable(&1u32));
        assert!(!is_callable(&"x"));
        assert!(!is_callable(&String::from("x")));
        assert!(!is_callable(&json!({"a": 1})));
        assert!(!is_callable(&Some(3)));
        assert!(!is_callable(&vec![1, 2]));
        assert!(!is_callable(&()));
    }

    #[test]
    fn constant_callable_is_not_callable() {
        assert!(!is_callable(&Callable::constant(1)));
    }

    #[test]
    fn functions_are_callable() {
        let f = Callable::function(|_: &[Value]| 1);
        assert!(is_callable(&f));

        let shared: Arc<dyn Invocable<i32>> = Arc::new(Callable::constant(1));
        assert!(is_callable(&shared));
    }

    #[test]
    fn to_callable_wraps_plain_values() {
        let c = to_callable(42u64);
        assert!(c.is_constant());
        assert_eq!(c.call(&[json!("ignored")]).unwrap(), 42);
    }

    #[test]
    fn to_callable_passes_arc_through() {
        let shared: Arc<dyn Invocable<i32>> = Arc::new(Callable::constant(1));
        let c = to_callable(Arc::clone(&shared));
        assert!(Arc::ptr_eq(c.as_invocable().unwrap(), &shared));
    }

    #[test]
    fn collections_and_tuples_are_plain_values() {
        assert_eq!(to_callable((1, "two")).call(&[json!(3)]).unwrap(), (1, "two"));
        assert_eq!(to_callable(Box::new(5)).call0().unwrap(), Box::new(5));
        let set: BTreeSet<u8> = [1, 2].into_iter().collect();
        assert_eq!(to_callable(set.clone()).call0().unwrap(), set);
        assert!(!is_callable(&(1, 2, 3)));
        assert!(!is_callable(&HashSet::<u8>::new()));
        assert!(!is_callable(&VecDeque::<u8>::new()));
    }

    #[test]
    fn present_value_ignores_default() {
        let c = to_callable_or(Some(1), 2);
        assert_eq!(c.call0().unwrap(), 1);
    }

    #[test]
    fn absent_value_uses_plain_default() {
        let c = to_callable_or(None::<&str>, "DEFAULT VALUE");
        assert!(c.is_constant());
        assert_eq!(c.call0().unwrap(), "DEFAULT VALUE");
    }

    #[test]
    fn absent_value_with_absent_default_returns_absent() {
        let c = to_callable_or(None::<Option<u8>>, None);
        assert!(c.is_constant());
        assert_eq!(c.call0().unwrap(), None);
    }

    #[test]
    fn optional_function_passes_through() {
        let f = Callable::function(|_: &[Value]| 1u8);
        let g = Callable::function(|_: &[Value]| 2u8);
        let c = to_callable_or(Some(f.clone()), g.clone());
        assert!(c.ptr_eq(&f));
        assert!(!c.ptr_eq(&g));

        let c = to_callable_or(None::<Callable<u8>>, g.clone());
        assert!(c.ptr_eq(&g));
    }

    #[test]
    fn json_null_uses_default() {
        let c = to_callable_unless_null(Value::Null, json!("fallback"));
        assert_eq!(c.call0().unwrap(), json!("fallback"));
    }

    #[test]
    fn null_constant_callable_uses_default() {
        let c = to_callable_unless_null(Callable::constant(None), Some("d"));
        assert_eq!(c.call0().unwrap(), Some("d"));
    }

    #[test]
    fn null_and_null_default_returns_null() {
        let c = to_callable_unless_null(json!(null), json!(null));
        assert_eq!(c.call0().unwrap(), Value::Null);
    }

    #[test]
    fn function_is_not_replaced_by_default() {
        let f = Callable::function(|_: &[Value]| None::<u8>);
        let c = to_callable_unless_null(f.clone(), Some(9u8));
        assert!(c.ptr_eq(&f));
        assert_eq!(c.call0().unwrap(), None);
    }
}
