//! Special forms: list forms whose head symbol is not evaluated as a callable.
//!
//! Forms in tail position (`let*`, `do`, `if`) return [`Step::Continue`] so
//! the trampoline in `Interpreter::eval` picks up the next form without
//! growing the host stack. Everything else finishes with [`Step::Done`].

use mal_ir::errors::invalid_form;
use mal_ir::{Closure, Env, EvalError, EvalResult, Params, Value};
use tracing::trace;

use super::{macro_call, Interpreter, Step};

/// The special form names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum SpecialForm {
    Def,
    Let,
    Do,
    If,
    Fn,
    Quote,
    Quasiquote,
    DefMacro,
    MacroExpand,
}

impl SpecialForm {
    pub(super) fn from_symbol(name: &str) -> Option<Self> {
        Some(match name {
            "def!" => SpecialForm::Def,
            "let*" => SpecialForm::Let,
            "do" => SpecialForm::Do,
            "if" => SpecialForm::If,
            "fn*" => SpecialForm::Fn,
            "quote" => SpecialForm::Quote,
            "quasiquote" => SpecialForm::Quasiquote,
            "defmacro!" => SpecialForm::DefMacro,
            "macroexpand" => SpecialForm::MacroExpand,
            _ => return None,
        })
    }

    pub(super) fn name(self) -> &'static str {
        match self {
            SpecialForm::Def => "def!",
            SpecialForm::Let => "let*",
            SpecialForm::Do => "do",
            SpecialForm::If => "if",
            SpecialForm::Fn => "fn*",
            SpecialForm::Quote => "quote",
            SpecialForm::Quasiquote => "quasiquote",
            SpecialForm::DefMacro => "defmacro!",
            SpecialForm::MacroExpand => "macroexpand",
        }
    }
}

/// Operand count error for `form`.
fn operand_count(form: SpecialForm, expected: &str, got: usize) -> EvalError {
    invalid_form(
        form.name(),
        format!("expected {expected} operands, got {got}"),
    )
}

/// The Symbol a binding form names, or an error for `form`.
fn binding_name(form: SpecialForm, value: &Value) -> Result<&str, EvalError> {
    value.as_symbol().ok_or_else(|| {
        invalid_form(
            form.name(),
            format!("expected a symbol, got {}", value.type_name()),
        )
    })
}

impl Interpreter {
    pub(super) fn eval_special_form(
        &mut self,
        form: SpecialForm,
        operands: &[Value],
        env: &Env,
    ) -> Result<Step, EvalError> {
        trace!(form = form.name(), operands = operands.len(), "special form");
        match form {
            SpecialForm::Def => self.eval_def(operands, env).map(Step::Done),
            SpecialForm::Let => self.eval_let(operands, env),
            SpecialForm::Do => self.eval_do(operands, env),
            SpecialForm::If => self.eval_if(operands, env),
            SpecialForm::Fn => eval_fn(operands, env).map(Step::Done),
            SpecialForm::Quote => match operands {
                [quoted] => Ok(Step::Done(quoted.clone())),
                _ => Err(operand_count(form, "1", operands.len())),
            },
            SpecialForm::Quasiquote => match operands {
                [template] => self.quasiquote(template, env).map(Step::Done),
                _ => Err(operand_count(form, "1", operands.len())),
            },
            SpecialForm::DefMacro => self.eval_defmacro(operands, env).map(Step::Done),
            SpecialForm::MacroExpand => self.eval_macroexpand(operands, env).map(Step::Done),
        }
    }

    /// `(def! name value)`: bind in the current frame.
    fn eval_def(&mut self, operands: &[Value], env: &Env) -> EvalResult {
        let [name, value] = operands else {
            return Err(operand_count(SpecialForm::Def, "2", operands.len()));
        };
        let name = binding_name(SpecialForm::Def, name)?;
        let value = self.eval(value.clone(), env)?;
        Ok(env.set(name, value))
    }

    /// `(let* (name value ...) body)`: sequential bindings in a child frame.
    fn eval_let(&mut self, operands: &[Value], env: &Env) -> Result<Step, EvalError> {
        let [bindings, body] = operands else {
            return Err(operand_count(SpecialForm::Let, "2", operands.len()));
        };
        let Some(bindings) = bindings.as_seq() else {
            return Err(invalid_form(
                SpecialForm::Let.name(),
                format!("expected a binding list or vector, got {}", bindings.type_name()),
            ));
        };
        if bindings.len() % 2 != 0 {
            return Err(invalid_form(
                SpecialForm::Let.name(),
                "binding list has an odd number of items",
            ));
        }

        let frame = env.child();
        for pair in bindings.chunks_exact(2) {
            let name = binding_name(SpecialForm::Let, &pair[0])?;
            let value = self.eval(pair[1].clone(), &frame)?;
            frame.set(name, value);
        }
        Ok(Step::Continue(body.clone(), frame))
    }

    /// `(do form ...)`: every form but the last for effect, the last in tail position.
    fn eval_do(&mut self, operands: &[Value], env: &Env) -> Result<Step, EvalError> {
        let Some((last, init)) = operands.split_last() else {
            return Ok(Step::Done(Value::Nil));
        };
        for form in init {
            self.eval(form.clone(), env)?;
        }
        Ok(Step::Continue(last.clone(), env.clone()))
    }

    /// `(if cond then else?)`: only `false` and `nil` select the else branch.
    fn eval_if(&mut self, operands: &[Value], env: &Env) -> Result<Step, EvalError> {
        let (condition, then_branch, else_branch) = match operands {
            [condition, then_branch] => (condition, then_branch, None),
            [condition, then_branch, else_branch] => (condition, then_branch, Some(else_branch)),
            _ => return Err(operand_count(SpecialForm::If, "2 or 3", operands.len())),
        };
        let branch = if self.eval(condition.clone(), env)?.is_truthy() {
            then_branch.clone()
        } else {
            match else_branch {
                Some(branch) => branch.clone(),
                None => return Ok(Step::Done(Value::Nil)),
            }
        };
        Ok(Step::Continue(branch, env.clone()))
    }

    /// `(defmacro! name fn)`: like `def!`, storing the closure flagged as a macro.
    fn eval_defmacro(&mut self, operands: &[Value], env: &Env) -> EvalResult {
        let [name, value] = operands else {
            return Err(operand_count(SpecialForm::DefMacro, "2", operands.len()));
        };
        let name = binding_name(SpecialForm::DefMacro, name)?;
        match self.eval(value.clone(), env)? {
            Value::Closure(closure) => Ok(env.set(name, Value::closure(closure.to_macro()))),
            other => Err(invalid_form(
                SpecialForm::DefMacro.name(),
                format!("expected a function, got {}", other.type_name()),
            )),
        }
    }

    /// `(macroexpand form)`: expand `form` while its head names a macro.
    fn eval_macroexpand(&mut self, operands: &[Value], env: &Env) -> EvalResult {
        let [form] = operands else {
            return Err(operand_count(SpecialForm::MacroExpand, "1", operands.len()));
        };
        let mut form = form.clone();
        while let Some((mac, args)) = macro_call(&form, env) {
            form = self.expand_macro(&mac, args)?;
        }
        Ok(form)
    }
}

/// `(fn* (params) body)`: a closure over the current environment.
fn eval_fn(operands: &[Value], env: &Env) -> EvalResult {
    let [params, body] = operands else {
        return Err(operand_count(SpecialForm::Fn, "2", operands.len()));
    };
    let Some(params) = params.as_seq() else {
        return Err(invalid_form(
            SpecialForm::Fn.name(),
            format!("expected a parameter list or vector, got {}", params.type_name()),
        ));
    };
    let params = Params::parse(params)?;
    Ok(Value::closure(Closure::new(params, body.clone(), env.clone())))
}
