//! Integer arithmetic and comparison.
//!
//! Arithmetic folds left over its arguments: `(- 10 3 2)` is `(10 - 3) - 2`
//! and a single argument is returned unchanged. Overflow is an error, not a
//! wrap-around.

use mal_ir::errors::{division_by_zero, integer_overflow, modulo_by_zero, too_few_args};
use mal_ir::{EvalError, EvalResult, Runtime, Value};

use super::{require_args, require_int};

/// Left fold over integer arguments; `identity` is the result for no arguments.
fn fold(
    args: &[Value],
    identity: Option<i64>,
    op: impl Fn(i64, i64) -> Result<i64, EvalError>,
) -> EvalResult {
    let Some((first, rest)) = args.split_first() else {
        return identity.map(Value::int).ok_or_else(|| too_few_args(1, 0));
    };
    let mut acc = require_int(first)?;
    for arg in rest {
        acc = op(acc, require_int(arg)?)?;
    }
    Ok(Value::int(acc))
}

pub(super) fn add(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    fold(args, Some(0), |a, b| {
        a.checked_add(b).ok_or_else(|| integer_overflow("addition"))
    })
}

pub(super) fn subtract(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    fold(args, None, |a, b| {
        a.checked_sub(b).ok_or_else(|| integer_overflow("subtraction"))
    })
}

pub(super) fn multiply(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    fold(args, Some(1), |a, b| {
        a.checked_mul(b)
            .ok_or_else(|| integer_overflow("multiplication"))
    })
}

/// Truncating division.
pub(super) fn divide(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    fold(args, None, |a, b| {
        if b == 0 {
            return Err(division_by_zero());
        }
        a.checked_div(b).ok_or_else(|| integer_overflow("division"))
    })
}

/// Remainder with the sign of the dividend.
pub(super) fn modulo(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    fold(args, None, |a, b| {
        if b == 0 {
            return Err(modulo_by_zero());
        }
        a.checked_rem(b).ok_or_else(|| integer_overflow("modulo"))
    })
}

fn compare(args: &[Value], op: fn(&i64, &i64) -> bool) -> EvalResult {
    let [a, b] = require_args::<2>(args)?;
    Ok(Value::bool(op(&require_int(a)?, &require_int(b)?)))
}

pub(super) fn greater_than(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    compare(args, i64::gt)
}

pub(super) fn greater_or_equal(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    compare(args, i64::ge)
}

pub(super) fn less_than(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    compare(args, i64::lt)
}

pub(super) fn less_or_equal(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    compare(args, i64::le)
}
