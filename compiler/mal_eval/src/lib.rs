//! MAL Eval - tree-walking interpreter for MAL.
//!
//! # Architecture
//!
//! - [`Interpreter`]: owns the global environment and evaluates forms with
//!   an explicit trampoline, so tail calls run in constant host stack
//! - [`InterpreterBuilder`]: binds the builtin namespace and `*ARGV*`, then
//!   runs the `load-file` bootstrap
//! - `namespace`: the builtin functions (`+`, `count`, `swap!`, `slurp`, ...)
//! - [`PrintHandlerImpl`]: where `prn` and `println` write (stdout, a capture
//!   buffer, or nowhere)
//!
//! Value, environment and error types live in `mal_ir` and are re-exported
//! here for convenience.

mod interpreter;
mod namespace;
mod print_handler;

pub use interpreter::{Interpreter, InterpreterBuilder, LOAD_FILE_BOOTSTRAP};
pub use mal_ir::{print_string, Env, EvalError, EvalErrorKind, EvalResult, Value};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};

#[cfg(test)]
mod tests;
