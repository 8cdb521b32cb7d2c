//! Tree-walking interpreter.
//!
//! # Evaluation
//!
//! [`Interpreter::eval`] is a loop over `(form, env)`. Each iteration either
//! finishes with a value or hands back the next form and environment to
//! evaluate ([`Step::Continue`]). Tail positions (`do`, `let*` bodies, `if`
//! branches, closure application and macro expansion) always continue the
//! loop instead of recursing, so a self-recursive tail call runs in constant
//! host stack.
//!
//! Non-tail positions (head and arguments of a call, collection elements,
//! `def!` values, quasiquote) recurse through `eval`, which grows the stack
//! on demand.

mod builder;
#[cfg(test)]
pub(crate) mod eval_depth;
mod quasiquote;
mod special_forms;

use mal_ir::errors::{not_a_function, thrown};
use mal_ir::{
    ensure_sufficient_stack, print_string, Closure, Env, EvalError, EvalResult, Heap, Runtime, Value,
};
use mal_reader::read_str;
use tracing::debug;

pub use builder::{InterpreterBuilder, LOAD_FILE_BOOTSTRAP};

use crate::print_handler::SharedPrintHandler;
use special_forms::SpecialForm;

/// Outcome of one evaluation step.
pub(crate) enum Step {
    /// Evaluation finished with this value.
    Done(Value),
    /// Evaluate this form in this environment next (tail position).
    Continue(Value, Env),
}

/// A MAL interpreter: the global environment plus the output sink.
///
/// Create one with [`InterpreterBuilder`].
pub struct Interpreter {
    global: Env,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The outermost environment (builtins, `*ARGV*`, top-level `def!`s).
    pub fn global(&self) -> &Env {
        &self.global
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Read the first form of `source` and evaluate it in the global environment.
    pub fn try_read_eval(&mut self, source: &str) -> EvalResult {
        let form = read_str(source)?;
        let global = self.global.clone();
        self.eval(form, &global)
    }

    /// Like [`Interpreter::try_read_eval`], with errors returned as `Value::Error`.
    pub fn read_eval(&mut self, source: &str) -> Value {
        self.try_read_eval(source).unwrap_or_else(Value::from)
    }

    /// Read, evaluate and print (readably).
    pub fn rep(&mut self, source: &str) -> String {
        print_string(&self.read_eval(source), true)
    }

    /// Evaluate `(load-file "path")` in the global environment.
    pub fn load_file(&mut self, path: &str) -> EvalResult {
        debug!(path, "load-file");
        let form = Value::list(vec![Value::symbol("load-file"), Value::string(path)]);
        let global = self.global.clone();
        self.eval(form, &global)
    }

    /// Evaluate `form` in `env`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn eval(&mut self, form: Value, env: &Env) -> EvalResult {
        #[cfg(test)]
        let _depth = eval_depth::DepthGuard::enter();
        ensure_sufficient_stack(move || {
            let mut form = form;
            let mut env = env.clone();
            loop {
                match self.eval_step(form, &env)? {
                    Step::Done(value) => return Ok(value),
                    Step::Continue(next_form, next_env) => {
                        form = next_form;
                        env = next_env;
                    }
                }
            }
        })
    }

    /// Apply a `Function` or `Closure` to already-evaluated arguments.
    #[tracing::instrument(level = "trace", skip_all, fields(args = args.len()))]
    pub fn apply(&mut self, func: &Value, args: Vec<Value>) -> EvalResult {
        match func {
            Value::Function(function) => function.call(self, &args),
            Value::Closure(closure) => {
                let frame = Env::with_bindings(closure.env(), closure.params(), args)?;
                self.eval(closure.body().clone(), &frame)
            }
            other => Err(not_a_function(other)),
        }
    }

    fn eval_step(&mut self, form: Value, env: &Env) -> Result<Step, EvalError> {
        let Value::List(items) = &form else {
            return self.eval_structural(&form, env).map(Step::Done);
        };
        let Some((head, operands)) = items.split_first() else {
            return Ok(Step::Done(form.clone()));
        };

        if let Some(special) = head.as_symbol().and_then(SpecialForm::from_symbol) {
            return self.eval_special_form(special, operands, env);
        }
        if let Some((mac, args)) = macro_call(&form, env) {
            let expansion = self.expand_macro(&mac, args)?;
            return Ok(Step::Continue(expansion, env.clone()));
        }

        let func = self.eval(head.clone(), env)?;
        let args = self.eval_all(operands, env)?;
        match func {
            Value::Closure(closure) => {
                let frame = Env::with_bindings(closure.env(), closure.params(), args)?;
                Ok(Step::Continue(closure.body().clone(), frame))
            }
            Value::Function(function) => function.call(self, &args).map(Step::Done),
            other => Err(not_a_function(&other)),
        }
    }

    /// Evaluate a form that is not a List.
    fn eval_structural(&mut self, form: &Value, env: &Env) -> EvalResult {
        match form {
            Value::Symbol(name) => env.lookup(name),
            Value::Vector(items) => self.eval_all(items, env).map(Value::vector),
            Value::Map(entries) => {
                let mut evaluated = Vec::with_capacity(entries.len());
                for (key, value) in entries.iter() {
                    evaluated.push((key.clone(), self.eval(value.clone(), env)?));
                }
                Ok(Value::map(evaluated))
            }
            Value::Error(message) => Err(thrown(message.as_str())),
            other => Ok(other.clone()),
        }
    }

    /// Evaluate each form in order; the first error wins.
    fn eval_all(&mut self, forms: &[Value], env: &Env) -> Result<Vec<Value>, EvalError> {
        forms.iter().map(|form| self.eval(form.clone(), env)).collect()
    }

    /// Bind the unevaluated `args` to the macro's parameters and evaluate its body.
    fn expand_macro(&mut self, mac: &Closure, args: Vec<Value>) -> EvalResult {
        debug!(args = args.len(), "expanding macro");
        let frame = Env::with_bindings(mac.env(), mac.params(), args)?;
        self.eval(mac.body().clone(), &frame)
    }
}

/// If `form` is a List whose head names a macro in `env`, the macro and the
/// (unevaluated) operands.
fn macro_call(form: &Value, env: &Env) -> Option<(Heap<Closure>, Vec<Value>)> {
    let Value::List(items) = form else {
        return None;
    };
    let (head, operands) = items.split_first()?;
    match env.get(head.as_symbol()?)? {
        Value::Closure(closure) if closure.is_macro() => Some((closure, operands.to_vec())),
        _ => None,
    }
}

impl Runtime for Interpreter {
    fn apply(&mut self, func: &Value, args: Vec<Value>) -> EvalResult {
        Interpreter::apply(self, func, args)
    }

    fn eval_in_root(&mut self, form: Value) -> EvalResult {
        let root = self.global.root();
        self.eval(form, &root)
    }

    fn print_line(&self, line: &str) {
        self.print_handler.println(line);
    }
}
