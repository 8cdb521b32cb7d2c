//! End-to-end evaluator tests: source text in, printed value out.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod tco_tests;

use crate::{buffer_handler, Interpreter, InterpreterBuilder, SharedPrintHandler};

/// An interpreter whose output goes to a capture buffer.
pub(crate) fn interpreter() -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build()
        .unwrap()
}

/// An interpreter plus a handle to its captured output.
pub(crate) fn interpreter_with_output() -> (Interpreter, SharedPrintHandler) {
    let output = buffer_handler();
    let interpreter = InterpreterBuilder::new()
        .print_handler(output.clone())
        .build()
        .unwrap();
    (interpreter, output)
}

/// Evaluate each form in order in one interpreter; print the last result.
pub(crate) fn rep_all(forms: &[&str]) -> String {
    let mut interpreter = interpreter();
    let mut last = String::new();
    for form in forms {
        last = interpreter.rep(form);
    }
    last
}

/// Evaluate one form in a fresh interpreter and print the result.
pub(crate) fn rep(form: &str) -> String {
    rep_all(&[form])
}
