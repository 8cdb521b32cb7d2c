//! Runtime values for the MAL interpreter.
//!
//! `Value` is a closed enum: every consumer matches exhaustively, so adding a
//! variant is a compile error everywhere it needs handling.
//!
//! Heap payloads go through `Heap<T>` (an `Rc` wrapper with a private
//! constructor), so the factory methods below are the only way to build them:
//!
//! ```text
//! let s = Value::string("hello");
//! let xs = Value::list(vec![Value::int(1), Value::int(2)]);
//! ```

mod composite;
mod heap;

use std::fmt;

pub use composite::{Atom, Closure, NativeFn, NativeFunction};
pub use heap::Heap;

use crate::printer::print_string;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    // Scalars
    /// Signed 64-bit integer.
    Int(i64),
    Bool(bool),
    Nil,
    /// End-of-input sentinel produced by the reader.
    Eof,
    Symbol(Heap<String>),
    /// Keyword, stored without its leading colon.
    Keyword(Heap<String>),
    Str(Heap<String>),

    // Collections
    List(Heap<Vec<Value>>),
    Vector(Heap<Vec<Value>>),
    /// Insertion-ordered key/value pairs with unique keys.
    Map(Heap<Vec<(Value, Value)>>),

    // Callables
    /// Host primitive.
    Function(NativeFunction),
    /// User function or macro.
    Closure(Heap<Closure>),

    /// Mutable reference cell.
    Atom(Atom),

    /// First-class error result.
    Error(Heap<String>),
}

// Factory methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(Heap::new(name.into()))
    }

    /// Create a keyword; `name` excludes the leading colon.
    pub fn keyword(name: impl Into<String>) -> Self {
        Value::Keyword(Heap::new(name.into()))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    pub fn vector(items: Vec<Value>) -> Self {
        Value::Vector(Heap::new(items))
    }

    /// Create a map from key/value pairs.
    ///
    /// A key that appears more than once keeps its position from the first
    /// occurrence and the value from the last.
    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        let mut unique: Vec<(Value, Value)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            match unique.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => unique.push((key, value)),
            }
        }
        Value::Map(Heap::new(unique))
    }

    pub fn function(name: &'static str, func: NativeFn) -> Self {
        Value::Function(NativeFunction::new(name, func))
    }

    pub fn closure(closure: Closure) -> Self {
        Value::Closure(Heap::new(closure))
    }

    pub fn atom(value: Value) -> Self {
        Value::Atom(Atom::new(value))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(Heap::new(message.into()))
    }
}

// Queries

impl Value {
    /// Everything except `false` and `nil` is truthy (including `0`, `""` and `()`).
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Elements of a List or Vector.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Vector(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this is a Symbol with the given name.
    pub fn is_symbol(&self, name: &str) -> bool {
        self.as_symbol() == Some(name)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::Nil => "nil",
            Value::Eof => "eof",
            Value::Symbol(_) => "symbol",
            Value::Keyword(_) => "keyword",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Vector(_) => "vector",
            Value::Map(_) => "map",
            Value::Function(_) => "function",
            Value::Closure(c) if c.is_macro() => "macro",
            Value::Closure(_) => "closure",
            Value::Atom(_) => "atom",
            Value::Error(_) => "error",
        }
    }
}

// Equality

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        values_equal(self, other, &mut Vec::new())
    }
}

/// Atom slot pairs being compared, outermost first.
type OpenAtoms = Vec<(*const (), *const ())>;

/// Structural equality.
///
/// `open_atoms` holds the atom pairs whose contents are being compared
/// further up. Meeting such a pair again means both sides went round the
/// same cycle, which counts as equal.
fn values_equal(a: &Value, b: &Value, open_atoms: &mut OpenAtoms) -> bool {
    match (a, b) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Nil, Value::Nil) | (Value::Eof, Value::Eof) => true,
        (Value::Symbol(a), Value::Symbol(b))
        | (Value::Keyword(a), Value::Keyword(b))
        | (Value::Str(a), Value::Str(b))
        | (Value::Error(a), Value::Error(b)) => a == b,
        (Value::List(a) | Value::Vector(a), Value::List(b) | Value::Vector(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|(x, y)| values_equal(x, y, open_atoms))
        }
        (Value::Map(a), Value::Map(b)) => maps_equal(a, b, open_atoms),
        (Value::Function(a), Value::Function(b)) => a.name() == b.name(),
        (Value::Closure(a), Value::Closure(b)) => Heap::ptr_eq(a, b),
        (Value::Atom(a), Value::Atom(b)) => {
            if a.ptr_eq(b) {
                return true;
            }
            let pair = (a.addr(), b.addr());
            if open_atoms.contains(&pair) {
                return true;
            }
            open_atoms.push(pair);
            let equal = values_equal(&a.get(), &b.get(), open_atoms);
            open_atoms.pop();
            equal
        }
        _ => false,
    }
}

/// Order-independent comparison of two maps with unique keys.
fn maps_equal(a: &[(Value, Value)], b: &[(Value, Value)], open_atoms: &mut OpenAtoms) -> bool {
    a.len() == b.len()
        && a.iter().all(|(key, value)| {
            b.iter()
                .find(|(other_key, _)| other_key == key)
                .is_some_and(|(_, other_value)| values_equal(other_value, value, open_atoms))
        })
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_string(self, true))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_string(self, true))
    }
}

#[cfg(test)]
mod tests;
