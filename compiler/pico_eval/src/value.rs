//! Runtime values and the implicit coercions between them.
//!
//! `Value` owns its payloads, so `clone()` is a deep copy: assigning an
//! array, passing it as an argument or reading one of its elements never
//! aliases the original.

use std::fmt;

use pico_ir::Literal;

/// A dynamically typed runtime datum.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Array(Vec<Value>),
    /// No value. Also what every failed operation evaluates to.
    #[default]
    Undefined,
}

impl Value {
    /// Value of a source literal. Character literals become one-character
    /// strings.
    pub fn from_literal(lit: &Literal) -> Self {
        match lit {
            Literal::Int(n) => Value::Int(*n),
            Literal::Float(n) => Value::Float(*n),
            Literal::Str(s) => Value::Str(s.clone()),
            Literal::Char(c) => Value::Str(c.to_string()),
            Literal::Bool(b) => Value::Bool(*b),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Array(_) => "array",
            Value::Undefined => "undefined",
        }
    }

    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }
}

/// Whole-string integer parse, ignoring surrounding whitespace.
fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Whole-string float parse, ignoring surrounding whitespace.
fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// Numeric reading of a string; other values pass through unchanged.
///
/// Text without a `.` is read as an integer, text with one as a float.
/// The whole trimmed text must be a number: there is no prefix parsing, so
/// `"5abc"` does not parse. Text that does not parse becomes `Int(0)`.
pub fn string_to_number(value: &Value) -> Value {
    let Value::Str(text) = value else {
        return value.clone();
    };
    let parsed = if text.contains('.') {
        parse_float(text).map(Value::Float)
    } else {
        parse_int(text).map(Value::Int)
    };
    parsed.unwrap_or(Value::Int(0))
}

/// Truthiness: numbers are true when nonzero, strings and arrays when
/// non-empty, `Undefined` never.
pub fn to_boolean(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Int(n) => *n != 0,
        Value::Float(n) => *n != 0.0,
        Value::Str(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Undefined => false,
    }
}

/// Numbers always; strings only when the whole text is a float.
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Int(_) | Value::Float(_) => true,
        Value::Str(s) => parse_float(s).is_some(),
        Value::Bool(_) | Value::Array(_) | Value::Undefined => false,
    }
}

/// Value as a float. Booleans read as `1.0`/`0.0`; anything that has no
/// numeric reading is `0.0`.
#[expect(
    clippy::cast_precision_loss,
    reason = "integers past 2^53 lose precision exactly as float arithmetic does"
)]
pub fn numeric_value(value: &Value) -> f64 {
    match value {
        Value::Int(n) => *n as f64,
        Value::Float(n) => *n,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Str(s) => parse_float(s).unwrap_or(0.0),
        Value::Array(_) | Value::Undefined => 0.0,
    }
}

/// Canonical output form, as written by `output`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n:.6}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Undefined => f.write_str("undefined"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
