//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use mal_ir::{Env, EvalError, Value};
use tracing::debug;

use super::Interpreter;
use crate::namespace;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Defines `load-file` in terms of `slurp`, `read-string` and `eval`.
///
/// The file body is wrapped in `(do ... nil)` so every top-level form runs
/// and loading a file evaluates to `nil`.
pub const LOAD_FILE_BOOTSTRAP: &str =
    r#"(def! load-file (fn* (f) (eval (read-string (str "(do " (slurp f) "\nnil)")))))"#;

/// Builder for creating Interpreter instances.
///
/// Defaults: output to stdout, empty `*ARGV*`, bootstrap enabled.
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    argv: Vec<String>,
    bootstrap: bool,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            print_handler: None,
            argv: Vec::new(),
            bootstrap: true,
        }
    }

    /// Set where `prn` and `println` write.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the strings bound to `*ARGV*`.
    #[must_use]
    pub fn argv<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.argv = args.into_iter().map(Into::into).collect();
        self
    }

    /// Whether to evaluate [`LOAD_FILE_BOOTSTRAP`] when building.
    #[must_use]
    pub fn bootstrap(mut self, enabled: bool) -> Self {
        self.bootstrap = enabled;
        self
    }

    /// Bind the builtins and `*ARGV*`, then run the bootstrap.
    ///
    /// A bootstrap failure is returned rather than swallowed; the interpreter
    /// is not usable without it.
    pub fn build(self) -> Result<Interpreter, EvalError> {
        let global = Env::new();
        namespace::register(&global);
        global.set(
            "*ARGV*",
            Value::list(self.argv.into_iter().map(Value::string).collect()),
        );

        let mut interpreter = Interpreter {
            global,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        };
        if self.bootstrap {
            debug!("running bootstrap");
            interpreter.try_read_eval(LOAD_FILE_BOOTSTRAP)?;
        }
        Ok(interpreter)
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
