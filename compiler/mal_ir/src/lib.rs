//! MAL IR - values, environments and printing for the MAL interpreter.
//!
//! This crate holds everything the reader and the evaluator share:
//!
//! - [`Value`]: the closed set of runtime values (exhaustive enum)
//! - [`Env`]: lexically scoped, parent-chained binding frames
//! - [`print_string`]: the inverse of the reader for literal values
//! - [`EvalError`] / [`EvalResult`]: first-class error results
//! - [`Runtime`]: the seam through which primitives call back into the evaluator
//! - [`ensure_sufficient_stack`]: stack growth for the recursive reader, printer and evaluator

mod env;
pub mod errors;
mod printer;
mod runtime;
mod stack;
mod value;

pub use env::{Env, Params, VARIADIC_MARKER};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use printer::{escape_string, print_string};
pub use runtime::Runtime;
pub use stack::ensure_sufficient_stack;
pub use value::{Atom, Closure, Heap, NativeFn, NativeFunction, Value};
