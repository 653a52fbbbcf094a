//! Shared intermediate representation for the Pico pipeline.
//!
//! Everything the lexer, parser, and interpreter exchange lives here:
//! - [`Span`]: byte-offset source locations
//! - [`Token`] / [`TokenKind`]: the lexer's output
//! - [`ast`]: the syntax tree the parser builds and the interpreter walks
//!
//! The crate has no dependencies so every stage can use it without pulling
//! in the rest of the toolchain.

pub mod ast;
mod span;
mod token;

pub use ast::{
    BinaryOp, Block, Expr, ExprKind, Function, IfBranch, Program, Stmt, StmtKind, UnaryOp,
};
pub use span::Span;
pub use token::{Keyword, LexErrorKind, Literal, Operator, Separator, Token, TokenKind};
