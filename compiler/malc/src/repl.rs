//! Interactive loop and script mode.

use std::io::{self, BufRead};

use mal_eval::{EvalError, Interpreter};
use tracing::debug;

pub const PROMPT: &str = "user> ";

/// Read lines from `input` until EOF, printing each result.
///
/// Errors are printed like any other result and the loop keeps going.
/// Blank lines are skipped without evaluation.
pub fn run_repl<R: BufRead>(interpreter: &mut Interpreter, input: R) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        interpreter.print_handler().print(PROMPT);
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let output = interpreter.rep(&line);
        interpreter.print_handler().println(&output);
    }
    // Leave the terminal on a fresh line after ^D.
    interpreter.print_handler().println("");
    debug!("repl reached end of input");
    Ok(())
}

/// Load `path` through `load-file`.
pub fn run_file(interpreter: &mut Interpreter, path: &str) -> Result<(), EvalError> {
    interpreter.load_file(path).map(drop)
}
