//! String building and output.
//!
//! | builtin   | rendering  | separator | result      |
//! |-----------|------------|-----------|-------------|
//! | `str`     | raw        | none      | string      |
//! | `pr-str`  | readable   | space     | string      |
//! | `prn`     | readable   | space     | prints, nil |
//! | `println` | raw        | space     | prints, nil |

use mal_ir::{print_string, EvalResult, Runtime, Value};

fn join(args: &[Value], readably: bool, separator: &str) -> String {
    args.iter()
        .map(|arg| print_string(arg, readably))
        .collect::<Vec<_>>()
        .join(separator)
}

pub(super) fn str(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    Ok(Value::string(join(args, false, "")))
}

pub(super) fn pr_str(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    Ok(Value::string(join(args, true, " ")))
}

pub(super) fn prn(runtime: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    runtime.print_line(&join(args, true, " "));
    Ok(Value::Nil)
}

pub(super) fn println(runtime: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    runtime.print_line(&join(args, false, " "));
    Ok(Value::Nil)
}
