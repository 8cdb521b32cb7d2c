//! Builtin functions bound in the global environment.
//!
//! Every builtin is a plain `fn(&mut dyn Runtime, &[Value]) -> EvalResult`
//! that validates its own arity and argument types and reports problems as
//! `EvalError`s, never panics.
//!
//! # Module Structure
//!
//! - [`arithmetic`]: `+ - * / %` and integer comparison
//! - [`basics`]: equality, `not`, `eval`, `throw`
//! - [`collections`]: list and vector functions
//! - [`printing`]: `str`, `pr-str`, `prn`, `println`
//! - [`atoms`]: mutable reference cells
//! - [`io`]: `read-string`, `slurp`

mod arithmetic;
mod atoms;
mod basics;
mod collections;
mod io;
mod printing;

use mal_ir::errors::{wrong_arg_count, wrong_arg_type};
use mal_ir::{Atom, Env, EvalError, NativeFunction, Value};

/// All builtins, in registration order.
pub(crate) const BUILTINS: &[NativeFunction] = &[
    // Arithmetic
    NativeFunction::new("+", arithmetic::add),
    NativeFunction::new("-", arithmetic::subtract),
    NativeFunction::new("*", arithmetic::multiply),
    NativeFunction::new("/", arithmetic::divide),
    NativeFunction::new("%", arithmetic::modulo),
    NativeFunction::new(">", arithmetic::greater_than),
    NativeFunction::new(">=", arithmetic::greater_or_equal),
    NativeFunction::new("<", arithmetic::less_than),
    NativeFunction::new("<=", arithmetic::less_or_equal),
    // Basics
    NativeFunction::new("=", basics::equal),
    NativeFunction::new("not", basics::not),
    NativeFunction::new("eval", basics::eval),
    NativeFunction::new("throw", basics::throw),
    // Printing
    NativeFunction::new("str", printing::str),
    NativeFunction::new("pr-str", printing::pr_str),
    NativeFunction::new("prn", printing::prn),
    NativeFunction::new("println", printing::println),
    // Collections
    NativeFunction::new("list", collections::list),
    NativeFunction::new("list?", collections::is_list),
    NativeFunction::new("empty?", collections::is_empty),
    NativeFunction::new("count", collections::count),
    NativeFunction::new("first", collections::first),
    NativeFunction::new("rest", collections::rest),
    NativeFunction::new("nth", collections::nth),
    NativeFunction::new("cons", collections::cons),
    NativeFunction::new("concat", collections::concat),
    NativeFunction::new("vec", collections::vec),
    // Atoms
    NativeFunction::new("atom", atoms::atom),
    NativeFunction::new("atom?", atoms::is_atom),
    NativeFunction::new("deref", atoms::deref),
    NativeFunction::new("reset!", atoms::reset),
    NativeFunction::new("swap!", atoms::swap),
    // Input
    NativeFunction::new("read-string", io::read_string),
    NativeFunction::new("slurp", io::slurp),
];

/// Bind every builtin in `env`.
pub(crate) fn register(env: &Env) {
    for builtin in BUILTINS {
        env.set(builtin.name(), Value::Function(*builtin));
    }
}

// Argument validation

/// Require exactly `N` arguments.
#[inline]
fn require_args<const N: usize>(args: &[Value]) -> Result<&[Value; N], EvalError> {
    args.try_into().map_err(|_| wrong_arg_count(N, args.len()))
}

#[inline]
fn require_int(value: &Value) -> Result<i64, EvalError> {
    value.as_int().ok_or_else(|| wrong_arg_type("integer", value))
}

#[inline]
fn require_str(value: &Value) -> Result<&str, EvalError> {
    value.as_str().ok_or_else(|| wrong_arg_type("string", value))
}

/// Elements of a List or Vector.
#[inline]
fn require_seq(value: &Value) -> Result<&[Value], EvalError> {
    value
        .as_seq()
        .ok_or_else(|| wrong_arg_type("list or vector", value))
}

#[inline]
fn require_atom(value: &Value) -> Result<&Atom, EvalError> {
    match value {
        Value::Atom(atom) => Ok(atom),
        other => Err(wrong_arg_type("atom", other)),
    }
}
