//! Operator matching helpers for the precedence chain.

use pico_ir::{BinaryOp, Operator, TokenKind, UnaryOp};

use crate::Parser;

impl Parser<'_> {
    fn current_operator(&self) -> Option<Operator> {
        match self.cursor.current_kind() {
            Some(TokenKind::Operator(op)) => Some(*op),
            _ => None,
        }
    }

    pub(crate) fn match_equality_op(&self) -> Option<BinaryOp> {
        match self.current_operator()? {
            Operator::EqEq => Some(BinaryOp::Eq),
            Operator::NotEq => Some(BinaryOp::NotEq),
            _ => None,
        }
    }

    pub(crate) fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.current_operator()? {
            Operator::Lt => Some(BinaryOp::Lt),
            Operator::LtEq => Some(BinaryOp::LtEq),
            Operator::Gt => Some(BinaryOp::Gt),
            Operator::GtEq => Some(BinaryOp::GtEq),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_operator()? {
            Operator::Plus => Some(BinaryOp::Add),
            Operator::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_operator()? {
            Operator::Star => Some(BinaryOp::Mul),
            Operator::Slash => Some(BinaryOp::Div),
            Operator::Percent => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.current_operator()? {
            Operator::Minus => Some(UnaryOp::Neg),
            Operator::Bang => Some(UnaryOp::Not),
            _ => None,
        }
    }
}
