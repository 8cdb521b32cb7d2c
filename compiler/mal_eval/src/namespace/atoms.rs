//! Atoms: shared mutable reference cells.

use mal_ir::errors::{not_a_function, too_few_args};
use mal_ir::{EvalResult, Runtime, Value};

use super::{require_args, require_atom};

pub(super) fn atom(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [value] = require_args::<1>(args)?;
    Ok(Value::atom(value.clone()))
}

pub(super) fn is_atom(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [value] = require_args::<1>(args)?;
    Ok(Value::bool(matches!(value, Value::Atom(_))))
}

pub(super) fn deref(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [atom] = require_args::<1>(args)?;
    Ok(require_atom(atom)?.get())
}

pub(super) fn reset(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [atom, value] = require_args::<2>(args)?;
    Ok(require_atom(atom)?.set(value.clone()))
}

/// `(swap! atom f extra...)`: store `(f current extra...)`.
///
/// The atom is left untouched when `f` fails.
pub(super) fn swap(runtime: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [atom, func, extra @ ..] = args else {
        return Err(too_few_args(2, args.len()));
    };
    let atom = require_atom(atom)?;
    if !matches!(func, Value::Function(_) | Value::Closure(_)) {
        return Err(not_a_function(func));
    }

    let mut call_args = Vec::with_capacity(extra.len() + 1);
    call_args.push(atom.get());
    call_args.extend_from_slice(extra);
    let value = runtime.apply(func, call_args)?;
    Ok(atom.set(value))
}
