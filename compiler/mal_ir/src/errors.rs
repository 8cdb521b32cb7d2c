//! Error types for reading and evaluation.
//!
//! Errors are ordinary results, never panics: every recoverable condition
//! (bad arity, bad argument type, unknown symbol, division by zero, malformed
//! special form, filesystem failure) is an [`EvalError`] carried through
//! `Result` and, at the interpreter boundary, turned into a `Value::Error`.
//!
//! Factory functions (`division_by_zero()`, `symbol_not_found(..)`, ...) are
//! the public way to build errors; they keep the message wording in one place.

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Lookup
    #[error("Symbol '{name}' not found")]
    SymbolNotFound { name: String },

    // Calls
    #[error("Invalid number of arguments, expected {expected} instead of {got}.")]
    ArityMismatch { expected: usize, got: usize },
    #[error("Invalid number of arguments, expected at least {min} arguments, got {got}.")]
    TooFewArguments { min: usize, got: usize },
    #[error("Invalid argument type, expected {expected}, got {got}")]
    WrongArgType {
        expected: &'static str,
        got: &'static str,
    },
    #[error("Not a function ({type_name})")]
    NotAFunction { type_name: &'static str },
    #[error("Invalid parameter list, {reason}")]
    InvalidParameters { reason: String },

    // Special forms
    #[error("Invalid '{form}' form, {reason}")]
    InvalidForm { form: &'static str, reason: String },

    // Arithmetic
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Modulo by zero")]
    ModuloByZero,
    #[error("Integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    // Collections
    #[error("Index out of bounds (index {index}, length {len})")]
    IndexOutOfBounds { index: i64, len: usize },

    // Filesystem
    #[error("File \"{path}\" does not exist")]
    FileNotFound { path: String },
    #[error("Can not read \"{path}\" ({reason})")]
    FileUnreadable { path: String, reason: String },
    #[error("File is too large (\"{path}\", {size} bytes)")]
    FileTooLarge { path: String, size: u64 },

    // Reader
    #[error("{message}")]
    Read { message: String },

    // User
    #[error("{message}")]
    Thrown { message: String },
}

/// An evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    kind: EvalErrorKind,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    /// The user-facing message (what `Value::Error` carries).
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

impl From<EvalError> for Value {
    fn from(error: EvalError) -> Self {
        Value::error(error.message())
    }
}

// Lookup

pub fn symbol_not_found(name: &str) -> EvalError {
    EvalErrorKind::SymbolNotFound {
        name: name.to_owned(),
    }
    .into()
}

// Calls

pub fn wrong_arg_count(expected: usize, got: usize) -> EvalError {
    EvalErrorKind::ArityMismatch { expected, got }.into()
}

pub fn too_few_args(min: usize, got: usize) -> EvalError {
    EvalErrorKind::TooFewArguments { min, got }.into()
}

pub fn wrong_arg_type(expected: &'static str, got: &Value) -> EvalError {
    EvalErrorKind::WrongArgType {
        expected,
        got: got.type_name(),
    }
    .into()
}

pub fn not_a_function(value: &Value) -> EvalError {
    EvalErrorKind::NotAFunction {
        type_name: value.type_name(),
    }
    .into()
}

pub fn invalid_parameters(reason: impl Into<String>) -> EvalError {
    EvalErrorKind::InvalidParameters {
        reason: reason.into(),
    }
    .into()
}

// Special forms

pub fn invalid_form(form: &'static str, reason: impl Into<String>) -> EvalError {
    EvalErrorKind::InvalidForm {
        form,
        reason: reason.into(),
    }
    .into()
}

// Arithmetic

pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

pub fn modulo_by_zero() -> EvalError {
    EvalErrorKind::ModuloByZero.into()
}

pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalErrorKind::IntegerOverflow { operation }.into()
}

// Collections

pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalErrorKind::IndexOutOfBounds { index, len }.into()
}

// Filesystem

pub fn file_not_found(path: &str) -> EvalError {
    EvalErrorKind::FileNotFound {
        path: path.to_owned(),
    }
    .into()
}

pub fn file_unreadable(path: &str, reason: impl Into<String>) -> EvalError {
    EvalErrorKind::FileUnreadable {
        path: path.to_owned(),
        reason: reason.into(),
    }
    .into()
}

pub fn file_too_large(path: &str, size: u64) -> EvalError {
    EvalErrorKind::FileTooLarge {
        path: path.to_owned(),
        size,
    }
    .into()
}

// Reader and user errors

pub fn read_error(message: impl Into<String>) -> EvalError {
    EvalErrorKind::Read {
        message: message.into(),
    }
    .into()
}

pub fn thrown(message: impl Into<String>) -> EvalError {
    EvalErrorKind::Thrown {
        message: message.into(),
    }
    .into()
}
