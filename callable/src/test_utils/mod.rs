//! Ready-made invocables for testing.
//!
//! Available behind the `test-utils` feature flag.

mod counting;
mod join;

pub use counting::CountingInvocable;
pub use join::join_args;
