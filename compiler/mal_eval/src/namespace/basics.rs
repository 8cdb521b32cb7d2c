//! Equality, negation, `eval` and `throw`.

use mal_ir::errors::thrown;
use mal_ir::{print_string, EvalResult, Runtime, Value};

use super::require_args;

/// Structural equality; lists and vectors with equal elements are equal.
pub(super) fn equal(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [a, b] = require_args::<2>(args)?;
    Ok(Value::bool(a == b))
}

pub(super) fn not(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [value] = require_args::<1>(args)?;
    Ok(Value::bool(!value.is_truthy()))
}

/// Evaluate a form in the global environment.
pub(super) fn eval(runtime: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [form] = require_args::<1>(args)?;
    runtime.eval_in_root(form.clone())
}

/// Raise an error whose message is the arguments printed raw.
pub(super) fn throw(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    if args.is_empty() {
        return Err(thrown("Exception"));
    }
    let message: Vec<String> = args.iter().map(|arg| print_string(arg, false)).collect();
    Err(thrown(message.join(" ")))
}
