//! Quasiquote: rebuild a template, evaluating only the unquoted parts.
//!
//! ```text
//! (def! l '(2 3))
//! `(1 ~l 4)   => (1 (2 3) 4)
//! `(1 ~@l 4)  => (1 2 3 4)
//! `[1 ~@l]    => [1 2 3]
//! ```

use mal_ir::errors::invalid_form;
use mal_ir::{ensure_sufficient_stack, Env, EvalError, EvalResult, Value};

use super::Interpreter;

/// `(name operand)` with `name` the given symbol, as the operand.
fn unquoted<'a>(form: &'a Value, name: &str) -> Option<&'a Value> {
    match form {
        Value::List(items) => match items.as_slice() {
            [head, operand] if head.is_symbol(name) => Some(operand),
            _ => None,
        },
        _ => None,
    }
}

impl Interpreter {
    /// Expand `template`: lists and vectors are rebuilt element by element,
    /// `(unquote x)` is replaced by the value of `x`, `(splice-unquote x)`
    /// by the elements of the value of `x`. Anything else is quoted.
    pub(super) fn quasiquote(&mut self, template: &Value, env: &Env) -> EvalResult {
        ensure_sufficient_stack(|| {
            if let Some(operand) = unquoted(template, "unquote") {
                return self.eval(operand.clone(), env);
            }
            match template {
                Value::List(items) => self.quasiquote_seq(items, env).map(Value::list),
                Value::Vector(items) => self.quasiquote_seq(items, env).map(Value::vector),
                other => Ok(other.clone()),
            }
        })
    }

    fn quasiquote_seq(&mut self, items: &[Value], env: &Env) -> Result<Vec<Value>, EvalError> {
        let mut expanded = Vec::with_capacity(items.len());
        for item in items {
            let Some(operand) = unquoted(item, "splice-unquote") else {
                expanded.push(self.quasiquote(item, env)?);
                continue;
            };
            match self.eval(operand.clone(), env)? {
                Value::List(spliced) | Value::Vector(spliced) => {
                    expanded.extend(spliced.iter().cloned());
                }
                other => {
                    return Err(invalid_form(
                        "splice-unquote",
                        format!("expected a list or vector, got {}", other.type_name()),
                    ))
                }
            }
        }
        Ok(expanded)
    }
}
