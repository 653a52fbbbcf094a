//! Recursive descent parser for Pico.
//!
//! One token of lookahead, no backtracking, no recovery: the first rule
//! violation aborts the parse and is returned as a [`ParseError`]. Either
//! the whole program parses or nothing does.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;

use pico_diagnostic::ErrorCode;
use pico_ir::{Program, Separator, Span, Token};

/// Parser state: a cursor over one compilation unit's tokens.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], source: &str) -> Self {
        Parser {
            cursor: Cursor::new(tokens, source.len()),
        }
    }

    /// Error naming what was expected and the token actually found.
    #[cold]
    pub(crate) fn expected(&self, code: ErrorCode, what: &str) -> ParseError {
        ParseError::expected(code, what, self.cursor.current(), self.cursor.end_span())
    }

    /// Consume `sep` or fail with `code`, naming `what` was expected.
    pub(crate) fn expect_separator_with(
        &mut self,
        sep: Separator,
        code: ErrorCode,
        what: &str,
    ) -> Result<Span, ParseError> {
        if self.cursor.check_separator(sep) {
            let span = self.cursor.current_span();
            self.cursor.advance();
            Ok(span)
        } else {
            Err(self.expected(code, what))
        }
    }

    /// Consume an identifier and return its name and span.
    pub(crate) fn expect_ident(&mut self, what: &str) -> Result<(String, Span), ParseError> {
        match self.cursor.current() {
            Some(Token {
                kind: pico_ir::TokenKind::Ident(name),
                span,
            }) => {
                self.cursor.advance();
                Ok((name.clone(), *span))
            }
            _ => Err(self.expected(ErrorCode::E1004, what)),
        }
    }
}

/// Parse a token stream into a [`Program`].
///
/// `source` supplies the end-of-input position for errors at the end of
/// the file.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token], source: &str) -> Result<Program, ParseError> {
    let mut parser = Parser::new(tokens, source);
    let result = parser.parse_program();
    match &result {
        Ok(program) => tracing::debug!(functions = program.functions.len(), "parsed program"),
        Err(err) => tracing::debug!(code = %err.code, position = err.position(), "parse failed"),
    }
    result
}

/// Lex and parse `source` in one step.
///
/// Lexer warnings are dropped; use [`pico_lexer::tokenize`] and [`parse`]
/// separately to report them.
pub fn parse_source(source: &str) -> Result<Program, ParseError> {
    let lexed = pico_lexer::tokenize(source);
    parse(&lexed.tokens, source)
}

#[cfg(test)]
mod tests;
