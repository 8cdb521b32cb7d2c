//! Callable and mutable value payloads: primitives, closures and atoms.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::env::{Env, Params};
use crate::runtime::Runtime;
use crate::EvalResult;

use super::Value;

/// Signature of a host primitive.
pub type NativeFn = fn(&mut dyn Runtime, &[Value]) -> EvalResult;

/// A host-callable primitive (`+`, `count`, `slurp`, ...).
#[derive(Clone, Copy)]
pub struct NativeFunction {
    name: &'static str,
    func: NativeFn,
}

impl NativeFunction {
    pub const fn new(name: &'static str, func: NativeFn) -> Self {
        NativeFunction { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn call(&self, runtime: &mut dyn Runtime, args: &[Value]) -> EvalResult {
        (self.func)(runtime, args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeFunction").field(&self.name).finish()
    }
}

/// A user-defined function (or macro) created by `fn*`.
///
/// Macros and functions share this representation; they differ only in
/// `is_macro`, which decides whether call arguments are evaluated first.
pub struct Closure {
    params: Params,
    body: Value,
    env: Env,
    is_macro: bool,
}

impl Closure {
    pub fn new(params: Params, body: Value, env: Env) -> Self {
        Closure {
            params,
            body,
            env,
            is_macro: false,
        }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// The environment the closure was defined in.
    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn is_macro(&self) -> bool {
        self.is_macro
    }

    /// A copy of this closure flagged as a macro.
    #[must_use]
    pub fn to_macro(&self) -> Closure {
        Closure {
            params: self.params.clone(),
            body: self.body.clone(),
            env: self.env.clone(),
            is_macro: true,
        }
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The captured environment is omitted: it usually (indirectly) contains the closure.
        f.debug_struct("Closure")
            .field("params", &self.params)
            .field("body", &self.body)
            .field("is_macro", &self.is_macro)
            .finish_non_exhaustive()
    }
}

/// Single mutable slot shared by every copy of the atom value.
#[derive(Clone)]
pub struct Atom(Rc<RefCell<Value>>);

impl Atom {
    pub(super) fn new(value: Value) -> Self {
        Atom(Rc::new(RefCell::new(value)))
    }

    /// The currently held value.
    pub fn get(&self) -> Value {
        self.0.borrow().clone()
    }

    /// Overwrite the held value, returning the new value.
    pub fn set(&self, value: Value) -> Value {
        *self.0.borrow_mut() = value.clone();
        value
    }

    pub fn ptr_eq(&self, other: &Atom) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared slot, for cycle detection.
    pub(crate) fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Atom").field(&*self.0.borrow()).finish()
    }
}
