//! Program := { FunctionDef }
//! FunctionDef := 'def' IDENT '(' [IDENT {',' IDENT}] ')' Block

use pico_diagnostic::ErrorCode;
use pico_ir::{Function, Keyword, Program, Separator};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut functions = Vec::new();
        while !self.cursor.is_at_end() {
            functions.push(self.parse_function()?);
        }
        Ok(Program { functions })
    }

    fn parse_function(&mut self) -> Result<Function, ParseError> {
        if !self.cursor.check_keyword(Keyword::Def) {
            return Err(self
                .expected(ErrorCode::E1005, "function definition")
                .with_label("expected `def`"));
        }
        let start = self.cursor.current_span();
        self.cursor.advance();

        let (name, _) = self.expect_ident("function name")?;
        tracing::trace!(%name, "function definition");

        let open = self.expect_separator_with(
            Separator::LParen,
            ErrorCode::E1001,
            "`(` after function name",
        )?;
        let params = self.parse_params(open)?;
        let body = self.parse_block()?;

        Ok(Function {
            name,
            params,
            span: start.merge(body.span),
            body,
        })
    }

    /// Parameter names after the opening `(`, through the closing `)`.
    fn parse_params(&mut self, open: pico_ir::Span) -> Result<Vec<String>, ParseError> {
        let mut params = Vec::new();
        if self.cursor.eat_separator(Separator::RParen) {
            return Ok(params);
        }
        loop {
            let (param, _) = self.expect_ident("parameter name")?;
            params.push(param);
            if self.cursor.eat_separator(Separator::Comma) {
                continue;
            }
            if self.cursor.eat_separator(Separator::RParen) {
                return Ok(params);
            }
            return Err(self
                .expected(ErrorCode::E1003, "`,` or `)` in parameter list")
                .with_context(open, "parameter list starts here"));
        }
    }
}
