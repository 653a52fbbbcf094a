//! Runtime errors.
//!
//! Only the startup checks (`main` missing or taking parameters) stop a
//! run. Everything else is reported, replaced by the kind's
//! [`fallback`](EvalErrorKind::fallback) value, and execution carries on.
//!
//! Factory functions (e.g. [`division_by_zero`]) are the constructors used
//! by the interpreter; spans are attached afterwards with
//! [`EvalError::with_span`].

use std::fmt;

use pico_diagnostic::{Diagnostic, ErrorCode};
use pico_ir::{BinaryOp, Span};

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Startup
    NoMain,
    MainHasParams {
        count: usize,
    },

    // Access
    UndefinedVariable {
        name: String,
    },
    UndefinedFunction {
        name: String,
    },
    NotIndexable {
        type_name: &'static str,
    },
    IndexOutOfBounds {
        index: i64,
        len: usize,
    },

    // Calls
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    CallDepthExceeded {
        depth: usize,
    },

    // Arithmetic
    DivisionByZero,
    ModuloByZero,
    UnsupportedOperands {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },

    // Warnings
    DuplicateFunction {
        name: String,
    },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::NoMain => ErrorCode::E6001,
            EvalErrorKind::MainHasParams { .. } => ErrorCode::E6002,
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E6003,
            EvalErrorKind::UndefinedFunction { .. } => ErrorCode::E6004,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6005,
            EvalErrorKind::NotIndexable { .. } => ErrorCode::E6006,
            EvalErrorKind::IndexOutOfBounds { .. } => ErrorCode::E6007,
            EvalErrorKind::DivisionByZero => ErrorCode::E6008,
            EvalErrorKind::ModuloByZero => ErrorCode::E6009,
            EvalErrorKind::UnsupportedOperands { .. } => ErrorCode::E6010,
            EvalErrorKind::CallDepthExceeded { .. } => ErrorCode::E6011,
            EvalErrorKind::DuplicateFunction { .. } => ErrorCode::W6001,
        }
    }

    /// Value the failed operation evaluates to.
    pub fn fallback(&self) -> Value {
        match self {
            EvalErrorKind::DivisionByZero => Value::Float(0.0),
            EvalErrorKind::ModuloByZero => Value::Int(0),
            _ => Value::Undefined,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalErrorKind::NoMain => write!(f, "no `main` function found"),
            EvalErrorKind::MainHasParams { count } => {
                write!(f, "`main` must take no parameters, but declares {count}")
            }
            EvalErrorKind::UndefinedVariable { name } => write!(f, "undefined variable `{name}`"),
            EvalErrorKind::UndefinedFunction { name } => write!(f, "undefined function `{name}`"),
            EvalErrorKind::NotIndexable { type_name } => {
                write!(f, "cannot index a value of type {type_name}")
            }
            EvalErrorKind::IndexOutOfBounds { index, len } => {
                write!(f, "array index {index} out of bounds for length {len}")
            }
            EvalErrorKind::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let plural = if *expected == 1 { "" } else { "s" };
                write!(
                    f,
                    "function `{name}` expects {expected} argument{plural}, got {got}"
                )
            }
            EvalErrorKind::CallDepthExceeded { depth } => {
                write!(f, "maximum call depth of {depth} exceeded")
            }
            EvalErrorKind::DivisionByZero => write!(f, "division by zero"),
            EvalErrorKind::ModuloByZero => write!(f, "modulo by zero"),
            EvalErrorKind::UnsupportedOperands { op, left, right } => {
                write!(f, "unsupported operand types for `{op}`: {left} and {right}")
            }
            EvalErrorKind::DuplicateFunction { name } => {
                write!(f, "function `{name}` is defined more than once")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Expression or statement the error arose in. `Span::DUMMY` until
    /// attached.
    pub span: Span,
}

impl EvalError {
    #[cold]
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn fallback(&self) -> Value {
        self.kind.fallback()
    }

    pub fn is_warning(&self) -> bool {
        self.code().is_warning()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = self.code();
        let base = if code.is_warning() {
            Diagnostic::warning(code)
        } else {
            Diagnostic::error(code)
        };
        let mut diag = base.with_message(self.kind.to_string());
        if self.span != Span::DUMMY {
            diag = diag.with_label(self.span, label_for(&self.kind));
        }
        match &self.kind {
            EvalErrorKind::NoMain => {
                diag.with_suggestion("add an entry point: `def main() { ... }`")
            }
            EvalErrorKind::DuplicateFunction { .. } => {
                diag.with_note("the last definition is the one that is called")
            }
            EvalErrorKind::IndexOutOfBounds { .. } => {
                diag.with_note("array indices start at 0")
            }
            _ => diag,
        }
    }
}

fn label_for(kind: &EvalErrorKind) -> &'static str {
    match kind {
        EvalErrorKind::UndefinedVariable { .. } => "not found in this scope",
        EvalErrorKind::UndefinedFunction { .. } => "no such function",
        EvalErrorKind::ArityMismatch { .. } => "wrong number of arguments",
        EvalErrorKind::NotIndexable { .. } => "not an array",
        EvalErrorKind::IndexOutOfBounds { .. } => "index out of bounds",
        EvalErrorKind::DivisionByZero | EvalErrorKind::ModuloByZero => "divisor is zero",
        EvalErrorKind::UnsupportedOperands { .. } => "unsupported operands",
        EvalErrorKind::CallDepthExceeded { .. } => "call nested too deeply",
        EvalErrorKind::DuplicateFunction { .. } => "redefined here",
        EvalErrorKind::NoMain | EvalErrorKind::MainHasParams { .. } => "",
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for EvalError {}

// Factory functions

#[cold]
pub fn no_main() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoMain)
}

#[cold]
pub fn main_has_params(count: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MainHasParams { count })
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_indexable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotIndexable { type_name })
}

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn call_depth_exceeded(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CallDepthExceeded { depth })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

#[cold]
pub fn unsupported_operands(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperands {
        op,
        left: left.type_name(),
        right: right.type_name(),
    })
}

#[cold]
pub fn duplicate_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateFunction {
        name: name.to_string(),
    })
}
