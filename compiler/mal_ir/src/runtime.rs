//! Callback interface from primitives into the evaluator.
//!
//! Primitive functions are plain `fn` pointers stored inside [`Value`]s, so
//! they cannot capture the interpreter. Instead every call receives a
//! `&mut dyn Runtime`, implemented by the evaluator, which exposes the few
//! services a primitive may need: applying a callable, evaluating a form at
//! the top level, and writing output.

use crate::{EvalResult, Value};

/// Services the evaluator offers to primitive functions.
pub trait Runtime {
    /// Apply a `Function` or `Closure` value to already-evaluated arguments.
    fn apply(&mut self, func: &Value, args: Vec<Value>) -> EvalResult;

    /// Evaluate `form` in the outermost (global) environment.
    fn eval_in_root(&mut self, form: Value) -> EvalResult;

    /// Write one line of output to the interpreter's print sink.
    fn print_line(&self, line: &str);
}
