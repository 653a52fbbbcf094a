//! Operator semantics over runtime values.
//!
//! The operand types are dynamic, so each operator decides by matching on
//! the operand pair. Integer arithmetic wraps on overflow; the result is an
//! integer only when both operands are.

use std::cmp::Ordering;

use pico_ir::{BinaryOp, UnaryOp};

use crate::errors::{division_by_zero, modulo_by_zero, unsupported_operands, EvalResult};
use crate::value::{numeric_value, string_to_number, to_boolean};
use crate::Value;

/// Evaluate a binary operation on two already evaluated operands.
///
/// `&&` and `||` are accepted here too; the interpreter short-circuits
/// them before the right operand is evaluated and only calls this when
/// both sides are needed.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => eval_add(left, right),
        BinaryOp::Sub => Ok(eval_arith(left, right, i64::wrapping_sub, |a, b| a - b)),
        BinaryOp::Mul => Ok(eval_arith(left, right, i64::wrapping_mul, |a, b| a * b)),
        BinaryOp::Div => eval_div(left, right),
        BinaryOp::Mod => eval_mod(left, right),
        BinaryOp::Eq
        | BinaryOp::NotEq
        | BinaryOp::Lt
        | BinaryOp::LtEq
        | BinaryOp::Gt
        | BinaryOp::GtEq => Ok(Value::Bool(eval_comparison(left, right, op))),
        BinaryOp::And => Ok(Value::Bool(to_boolean(left) && to_boolean(right))),
        BinaryOp::Or => Ok(Value::Bool(to_boolean(left) || to_boolean(right))),
    }
}

/// Evaluate a unary operation. Never fails.
pub fn evaluate_unary(operand: &Value, op: UnaryOp) -> Value {
    match op {
        UnaryOp::Neg => match operand {
            Value::Int(n) => Value::Int(n.wrapping_neg()),
            other => Value::Float(-numeric_value(other)),
        },
        UnaryOp::Not => Value::Bool(!to_boolean(operand)),
    }
}

/// `+`: two strings concatenate; a string next to a number is read as a
/// number first; two numbers add.
fn eval_add(left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(joined))
        }
        (Value::Str(_), Value::Int(_) | Value::Float(_)) => {
            Ok(add_numbers(&string_to_number(left), right))
        }
        (Value::Int(_) | Value::Float(_), Value::Str(_)) => {
            Ok(add_numbers(left, &string_to_number(right)))
        }
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            Ok(add_numbers(left, right))
        }
        _ => Err(unsupported_operands(BinaryOp::Add, left, right)),
    }
}

fn add_numbers(left: &Value, right: &Value) -> Value {
    eval_arith(left, right, i64::wrapping_add, |a, b| a + b)
}

/// Integer op when both operands are integers, float op on the numeric
/// readings otherwise.
fn eval_arith(
    left: &Value,
    right: &Value,
    int_op: fn(i64, i64) -> i64,
    float_op: fn(f64, f64) -> f64,
) -> Value {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Value::Int(int_op(*a, *b)),
        _ => Value::Float(float_op(numeric_value(left), numeric_value(right))),
    }
}

/// `/` always produces a float.
fn eval_div(left: &Value, right: &Value) -> EvalResult {
    let divisor = numeric_value(right);
    if divisor == 0.0 {
        return Err(division_by_zero());
    }
    Ok(Value::Float(numeric_value(left) / divisor))
}

/// `%` works on the operands truncated to integers.
fn eval_mod(left: &Value, right: &Value) -> EvalResult {
    let divisor = truncated(right);
    if divisor == 0 {
        return Err(modulo_by_zero());
    }
    Ok(Value::Int(truncated(left).wrapping_rem(divisor)))
}

/// Integer reading of a value, truncating toward zero.
#[expect(
    clippy::cast_possible_truncation,
    reason = "truncation toward zero is the defined conversion; out-of-range values saturate"
)]
fn truncated(value: &Value) -> i64 {
    match value {
        Value::Int(n) => *n,
        other => numeric_value(other) as i64,
    }
}

/// Strings compare lexicographically with each other; every other pairing
/// compares numerically.
fn eval_comparison(left: &Value, right: &Value, op: BinaryOp) -> bool {
    let ordering = match (left, right) {
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => numeric_value(left).partial_cmp(&numeric_value(right)),
    };
    // NaN compares unequal to everything, including itself.
    let Some(ordering) = ordering else {
        return op == BinaryOp::NotEq;
    };
    match op {
        BinaryOp::Eq => ordering == Ordering::Equal,
        BinaryOp::NotEq => ordering != Ordering::Equal,
        BinaryOp::Lt => ordering == Ordering::Less,
        BinaryOp::LtEq => ordering != Ordering::Greater,
        BinaryOp::Gt => ordering == Ordering::Greater,
        BinaryOp::GtEq => ordering != Ordering::Less,
        _ => false,
    }
}

/// Index into an array after truncating the index value.
pub(crate) fn index_position(index: &Value) -> i64 {
    truncated(index)
}
