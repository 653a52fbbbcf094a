//! Primary := Literal | IDENT [Call | Index] | '(' Expr ')' | '[' [Expr {',' Expr}] ']'

use pico_diagnostic::ErrorCode;
use pico_ir::{Expr, ExprKind, Separator, Span, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.cursor.current() else {
            return Err(self.expected(ErrorCode::E1002, "expression"));
        };
        let span = token.span;

        match &token.kind {
            TokenKind::Literal(lit) => {
                self.cursor.advance();
                Ok(Expr::new(ExprKind::Literal(lit.clone()), span))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                self.parse_ident_suffix(name.clone(), span)
            }
            TokenKind::Separator(Separator::LParen) => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.close_paren(span, "`)` after expression")?;
                let span = span.merge(self.cursor.previous_span());
                Ok(Expr::new(ExprKind::Grouped(Box::new(inner)), span))
            }
            TokenKind::Separator(Separator::LBracket) => {
                self.cursor.advance();
                let elements =
                    self.parse_expr_list(Separator::RBracket, span, "`,` or `]` in array literal")?;
                let span = span.merge(self.cursor.previous_span());
                Ok(Expr::new(ExprKind::Array(elements), span))
            }
            _ => Err(self.expected(ErrorCode::E1002, "expression")),
        }
    }

    /// A call or a single index directly after an identifier.
    fn parse_ident_suffix(&mut self, name: String, start: Span) -> Result<Expr, ParseError> {
        if self.cursor.check_separator(Separator::LParen) {
            let open = self.cursor.current_span();
            self.cursor.advance();
            let args =
                self.parse_expr_list(Separator::RParen, open, "`,` or `)` in argument list")?;
            let span = start.merge(self.cursor.previous_span());
            return Ok(Expr::new(ExprKind::Call { callee: name, args }, span));
        }

        let target = Expr::new(ExprKind::Ident(name), start);
        if self.cursor.check_separator(Separator::LBracket) {
            let open = self.cursor.current_span();
            self.cursor.advance();
            let index = self.parse_expr()?;
            if !self.cursor.eat_separator(Separator::RBracket) {
                return Err(self
                    .expected(ErrorCode::E1003, "`]` after index")
                    .with_context(open, "unclosed delimiter"));
            }
            let span = start.merge(self.cursor.previous_span());
            return Ok(Expr::new(
                ExprKind::Index {
                    target: Box::new(target),
                    index: Box::new(index),
                },
                span,
            ));
        }

        Ok(target)
    }

    /// Comma-separated expressions after an opening delimiter, through
    /// `close`. An empty list is allowed; a trailing comma is not.
    fn parse_expr_list(
        &mut self,
        close: Separator,
        open: Span,
        what: &str,
    ) -> Result<Vec<Expr>, ParseError> {
        let mut items = Vec::new();
        if self.cursor.eat_separator(close) {
            return Ok(items);
        }
        loop {
            items.push(self.parse_expr()?);
            if self.cursor.eat_separator(Separator::Comma) {
                continue;
            }
            if self.cursor.eat_separator(close) {
                return Ok(items);
            }
            return Err(self
                .expected(ErrorCode::E1003, what)
                .with_context(open, "unclosed delimiter"));
        }
    }
}
