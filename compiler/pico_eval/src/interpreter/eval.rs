//! Expression evaluation.

use pico_ir::{BinaryOp, Expr, ExprKind, Span};
use pico_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{index_out_of_bounds, not_indexable, undefined_variable, EvalError};
use crate::operators::{evaluate_binary, evaluate_unary, index_position};
use crate::value::to_boolean;
use crate::Value;

/// Copy of the element at `position`.
fn element_at(array: &Value, position: i64) -> Result<Value, EvalError> {
    let Value::Array(items) = array else {
        return Err(not_indexable(array.type_name()));
    };
    usize::try_from(position)
        .ok()
        .and_then(|i| items.get(i))
        .cloned()
        .ok_or_else(|| index_out_of_bounds(position, items.len()))
}

impl Interpreter {
    /// Evaluate `expr`. Errors are reported, never returned: a failing
    /// sub-expression evaluates to its fallback and evaluation continues.
    pub fn evaluate(&mut self, expr: &Expr) -> Value {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> Value {
        match &expr.kind {
            ExprKind::Literal(lit) => Value::from_literal(lit),
            ExprKind::Ident(name) => match self.env.lookup(name) {
                Some(value) => value.clone(),
                None => self.fail(undefined_variable(name).with_span(expr.span)),
            },
            ExprKind::Binary { op, left, right } => self.eval_binary(*op, left, right, expr.span),
            ExprKind::Unary { op, operand } => {
                let value = self.evaluate(operand);
                evaluate_unary(&value, *op)
            }
            ExprKind::Array(elements) => {
                Value::Array(elements.iter().map(|e| self.evaluate(e)).collect())
            }
            ExprKind::Grouped(inner) => self.evaluate(inner),
            ExprKind::Call { callee, args } => {
                let args: Vec<Value> = args.iter().map(|a| self.evaluate(a)).collect();
                self.call_function(callee, args, expr.span)
            }
            ExprKind::Index { target, index } => self.eval_index(target, index, expr.span),
        }
    }

    fn eval_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr, span: Span) -> Value {
        let left = self.evaluate(left);
        // The right operand of `&&`/`||` runs only when it decides the result.
        match op {
            BinaryOp::And if !to_boolean(&left) => return Value::Bool(false),
            BinaryOp::Or if to_boolean(&left) => return Value::Bool(true),
            _ => {}
        }
        let right = self.evaluate(right);
        match evaluate_binary(&left, &right, op) {
            Ok(value) => value,
            Err(err) => self.fail(err.with_span(span)),
        }
    }

    fn eval_index(&mut self, target: &Expr, index: &Expr, span: Span) -> Value {
        // Index a variable in place rather than copying the whole array.
        // Evaluating the index cannot rebind it: calls only touch their own
        // frame.
        if let ExprKind::Ident(name) = &target.kind {
            if self.env.lookup(name).is_some() {
                let position = index_position(&self.evaluate(index));
                let result = match self.env.lookup(name) {
                    Some(array) => element_at(array, position),
                    None => Err(undefined_variable(name)),
                };
                return result.unwrap_or_else(|err| self.fail(err.with_span(span)));
            }
        }

        let array = self.evaluate(target);
        let position = index_position(&self.evaluate(index));
        element_at(&array, position).unwrap_or_else(|err| self.fail(err.with_span(span)))
    }
}
