//! Environments: lexically scoped, parent-chained binding frames.
//!
//! A frame is created for every `let*` block and every closure application.
//! Frames are shared, not owned: a closure keeps the frame it was created in
//! alive for as long as the closure itself lives, so frames are reference
//! counted (`LocalScope<Scope>`) rather than arranged as a strict tree.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::errors::{invalid_parameters, symbol_not_found, too_few_args, wrong_arg_count};
use crate::{EvalError, Value};

/// Marker symbol separating positional parameters from the variadic one.
pub const VARIADIC_MARKER: &str = "&";

/// A single-threaded, reference-counted cell for scope frames.
///
/// Wraps `Rc<RefCell<T>>` so every frame allocation goes through
/// [`LocalScope::new`]. Not thread-safe: evaluation is single-threaded.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles refer to the same frame.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One frame of bindings.
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<Env>,
}

impl Scope {
    fn with_parent(parent: Option<Env>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent,
        }
    }
}

/// Handle to an environment frame (and, through it, its parent chain).
///
/// Cloning is cheap and yields a handle to the *same* frame.
#[derive(Clone)]
pub struct Env {
    scope: LocalScope<Scope>,
}

impl Env {
    /// Create a root environment with no parent.
    pub fn new() -> Self {
        Env {
            scope: LocalScope::new(Scope::with_parent(None)),
        }
    }

    /// Create an empty frame whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Env {
        Env {
            scope: LocalScope::new(Scope::with_parent(Some(self.clone()))),
        }
    }

    /// Bind `name` in this frame (shadowing any outer binding) and return the value.
    pub fn set(&self, name: &str, value: Value) -> Value {
        self.scope
            .borrow_mut()
            .bindings
            .insert(name.to_owned(), value.clone());
        value
    }

    /// Find `name` in this frame or the nearest enclosing frame that binds it.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut scope = self.scope.clone();
        loop {
            let parent = {
                let frame = scope.borrow();
                if let Some(value) = frame.bindings.get(name) {
                    return Some(value.clone());
                }
                frame.parent.as_ref().map(|env| env.scope.clone())
            };
            scope = parent?;
        }
    }

    /// Like [`Env::get`], failing with "symbol not found" when unbound.
    pub fn lookup(&self, name: &str) -> Result<Value, EvalError> {
        self.get(name).ok_or_else(|| symbol_not_found(name))
    }

    /// Create one child frame of `parent` binding `params` to `args`.
    ///
    /// Positional parameters are bound in order; a variadic parameter
    /// receives the remaining arguments as a List. Without a variadic
    /// parameter the argument count must match exactly.
    pub fn with_bindings(parent: &Env, params: &Params, args: Vec<Value>) -> Result<Env, EvalError> {
        let required = params.positional.len();
        match &params.variadic {
            Some(_) if args.len() < required => return Err(too_few_args(required, args.len())),
            None if args.len() != required => return Err(wrong_arg_count(required, args.len())),
            _ => {}
        }

        let env = parent.child();
        {
            let mut frame = env.scope.borrow_mut();
            let mut args = args.into_iter();
            for (name, value) in params.positional.iter().zip(args.by_ref()) {
                frame.bindings.insert(name.clone(), value);
            }
            if let Some(rest) = &params.variadic {
                frame.bindings.insert(rest.clone(), Value::list(args.collect()));
            }
        }
        Ok(env)
    }

    /// The outermost frame of this chain.
    #[must_use]
    pub fn root(&self) -> Env {
        let mut env = self.clone();
        loop {
            let parent = env.scope.borrow().parent.clone();
            match parent {
                Some(parent) => env = parent,
                None => return env,
            }
        }
    }

    /// Number of frames from this one up to the root (root has depth 1).
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut env = self.clone();
        loop {
            let parent = env.scope.borrow().parent.clone();
            match parent {
                Some(parent) => {
                    depth += 1;
                    env = parent;
                }
                None => return depth,
            }
        }
    }

    /// Whether both handles refer to the same frame.
    pub fn ptr_eq(&self, other: &Env) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Env")
            .field("depth", &self.depth())
            .field("bindings", &self.scope.borrow().bindings.len())
            .finish()
    }
}

/// A validated `fn*` parameter list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    positional: Vec<String>,
    variadic: Option<String>,
}

impl Params {
    /// Validate the elements of a parameter list/vector.
    ///
    /// Every element must be a Symbol; `&` must be followed by exactly one
    /// more Symbol, which becomes the variadic parameter.
    pub fn parse(forms: &[Value]) -> Result<Self, EvalError> {
        let mut positional = Vec::with_capacity(forms.len());
        let mut forms = forms.iter();
        while let Some(form) = forms.next() {
            let Some(name) = form.as_symbol() else {
                return Err(invalid_parameters(format!(
                    "expected a symbol, got {}",
                    form.type_name()
                )));
            };
            if name == VARIADIC_MARKER {
                let rest = match (forms.next(), forms.next()) {
                    (Some(Value::Symbol(rest)), None) => rest.as_str().to_owned(),
                    _ => {
                        return Err(invalid_parameters(format!(
                            "'{VARIADIC_MARKER}' must be followed by exactly one symbol"
                        )))
                    }
                };
                return Ok(Params {
                    positional,
                    variadic: Some(rest),
                });
            }
            positional.push(name.to_owned());
        }
        Ok(Params {
            positional,
            variadic: None,
        })
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn variadic(&self) -> Option<&str> {
        self.variadic.as_deref()
    }
}

#[cfg(test)]
mod tests;
