//! List and vector functions.
//!
//! `count`, `first` and `rest` treat `nil` as an empty list. Functions that
//! build a new sequence (`list`, `rest`, `cons`, `concat`) always return a
//! List; `vec` returns a Vector.

use mal_ir::errors::{index_out_of_bounds, wrong_arg_type};
use mal_ir::{EvalError, EvalResult, Runtime, Value};

use super::{require_args, require_int, require_seq};

/// Elements of a List or Vector, with `nil` as no elements.
fn seq_or_nil(value: &Value) -> Result<&[Value], EvalError> {
    match value {
        Value::Nil => Ok(&[]),
        other => require_seq(other),
    }
}

pub(super) fn list(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    Ok(Value::list(args.to_vec()))
}

pub(super) fn is_list(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [value] = require_args::<1>(args)?;
    Ok(Value::bool(value.is_list()))
}

pub(super) fn is_empty(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [value] = require_args::<1>(args)?;
    Ok(Value::bool(seq_or_nil(value)?.is_empty()))
}

pub(super) fn count(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [value] = require_args::<1>(args)?;
    let len = seq_or_nil(value)?.len();
    // Collections are far smaller than i64::MAX elements.
    Ok(Value::int(i64::try_from(len).unwrap_or(i64::MAX)))
}

pub(super) fn first(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [value] = require_args::<1>(args)?;
    Ok(seq_or_nil(value)?.first().cloned().unwrap_or(Value::Nil))
}

pub(super) fn rest(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [value] = require_args::<1>(args)?;
    let items = seq_or_nil(value)?;
    Ok(Value::list(items.get(1..).unwrap_or_default().to_vec()))
}

/// Zero-based element access.
pub(super) fn nth(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [seq, index] = require_args::<2>(args)?;
    let items = require_seq(seq)?;
    let index = require_int(index)?;
    usize::try_from(index)
        .ok()
        .and_then(|i| items.get(i))
        .cloned()
        .ok_or_else(|| index_out_of_bounds(index, items.len()))
}

/// Prepend an element, producing a List.
pub(super) fn cons(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [head, tail] = require_args::<2>(args)?;
    let tail = require_seq(tail)?;
    let mut items = Vec::with_capacity(tail.len() + 1);
    items.push(head.clone());
    items.extend_from_slice(tail);
    Ok(Value::list(items))
}

/// Join Lists and Vectors into one List.
pub(super) fn concat(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let mut items = Vec::new();
    for arg in args {
        items.extend_from_slice(require_seq(arg)?);
    }
    Ok(Value::list(items))
}

pub(super) fn vec(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [value] = require_args::<1>(args)?;
    match value {
        Value::Vector(_) => Ok(value.clone()),
        Value::List(items) => Ok(Value::vector(items.to_vec())),
        other => Err(wrong_arg_type("list or vector", other)),
    }
}
