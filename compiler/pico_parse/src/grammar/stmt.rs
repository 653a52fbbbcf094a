//! Blocks and statements.
//!
//! Every statement is chosen by its first token: `{` opens a nested block, a
//! keyword selects its statement, and a bare identifier starts an assignment.

use pico_diagnostic::ErrorCode;
use pico_ir::{Block, IfBranch, Keyword, Operator, Separator, Stmt, StmtKind, TokenKind};
use pico_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Block := '{' { Statement } '}'
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        ensure_sufficient_stack(|| self.parse_block_inner())
    }

    fn parse_block_inner(&mut self) -> Result<Block, ParseError> {
        let open = self.expect_separator_with(Separator::LBrace, ErrorCode::E1001, "`{`")?;
        let mut stmts = Vec::new();
        loop {
            if self.cursor.check_separator(Separator::RBrace) {
                let close = self.cursor.current_span();
                self.cursor.advance();
                return Ok(Block {
                    stmts,
                    span: open.merge(close),
                });
            }
            if self.cursor.is_at_end() {
                return Err(self
                    .expected(ErrorCode::E1003, "`}`")
                    .with_context(open, "block starts here"));
            }
            stmts.push(self.parse_stmt()?);
        }
    }

    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.cursor.current_span();
        let kind = match self.cursor.current_kind() {
            Some(TokenKind::Separator(Separator::LBrace)) => StmtKind::Block(self.parse_block()?),
            Some(TokenKind::Ident(_)) => {
                let stmt = self.parse_assignment()?;
                self.expect_terminator()?;
                stmt
            }
            Some(TokenKind::Keyword(Keyword::Input)) => {
                self.cursor.advance();
                let (name, _) = self.expect_ident("variable name after `input`")?;
                self.expect_terminator()?;
                StmtKind::Input { name }
            }
            Some(TokenKind::Keyword(Keyword::Output)) => {
                self.cursor.advance();
                let value = self.parse_expr()?;
                self.expect_terminator()?;
                StmtKind::Output(value)
            }
            Some(TokenKind::Keyword(Keyword::Return)) => {
                self.cursor.advance();
                let value = if self.cursor.check_separator(Separator::Semi) {
                    None
                } else {
                    Some(self.parse_expr()?)
                };
                self.expect_terminator()?;
                StmtKind::Return(value)
            }
            Some(TokenKind::Keyword(Keyword::If)) => self.parse_if()?,
            Some(TokenKind::Keyword(Keyword::For)) => self.parse_for()?,
            Some(TokenKind::Keyword(Keyword::Exit)) => {
                return Err(ParseError::new(
                    ErrorCode::E1001,
                    "unexpected keyword `exit`",
                    start,
                )
                .with_label("`exit` cannot be used as a statement"));
            }
            _ => return Err(self.expected(ErrorCode::E1001, "statement")),
        };
        Ok(Stmt::new(kind, start.merge(self.cursor.previous_span())))
    }

    /// `IDENT '=' Expr`, without the terminator. Shared by plain assignment
    /// statements and the two clauses of a `for` header.
    fn parse_assignment(&mut self) -> Result<StmtKind, ParseError> {
        let (name, _) = self.expect_ident("variable name")?;
        if !self.cursor.eat_operator(Operator::Assign) {
            return Err(self.expected(ErrorCode::E1001, "`=` after variable name"));
        }
        let value = self.parse_expr()?;
        Ok(StmtKind::Assign { name, value })
    }

    fn expect_terminator(&mut self) -> Result<(), ParseError> {
        self.expect_separator_with(Separator::Semi, ErrorCode::E1001, "`;` after statement")
            .map(|_| ())
    }

    /// If := 'if' '(' Expr ')' Block { 'elif' '(' Expr ')' Block } [ 'else' Block ]
    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let mut branches = vec![self.parse_if_branch("if")?];
        while self.cursor.check_keyword(Keyword::Elif) {
            self.cursor.advance();
            branches.push(self.parse_if_branch("elif")?);
        }
        let else_block = if self.cursor.check_keyword(Keyword::Else) {
            self.cursor.advance();
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(StmtKind::If {
            branches,
            else_block,
        })
    }

    fn parse_if_branch(&mut self, keyword: &str) -> Result<IfBranch, ParseError> {
        let open = self.expect_separator_with(
            Separator::LParen,
            ErrorCode::E1001,
            &format!("`(` after `{keyword}`"),
        )?;
        let condition = self.parse_expr()?;
        self.close_paren(open, "`)` after condition")?;
        let block = self.parse_block()?;
        Ok(IfBranch { condition, block })
    }

    /// For := 'for' '(' Assign ';' Expr ';' Assign ')' Block
    fn parse_for(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let open =
            self.expect_separator_with(Separator::LParen, ErrorCode::E1001, "`(` after `for`")?;

        let init_start = self.cursor.current_span();
        let init = self.parse_assignment()?;
        let init = Stmt::new(init, init_start.merge(self.cursor.previous_span()));
        self.expect_separator_with(
            Separator::Semi,
            ErrorCode::E1001,
            "`;` after loop initializer",
        )?;

        let condition = self.parse_expr()?;
        self.expect_separator_with(
            Separator::Semi,
            ErrorCode::E1001,
            "`;` after loop condition",
        )?;

        let step_start = self.cursor.current_span();
        let step = self.parse_assignment()?;
        let step = Stmt::new(step, step_start.merge(self.cursor.previous_span()));
        self.close_paren(open, "`)` after loop header")?;

        let body = self.parse_block()?;
        Ok(StmtKind::For {
            init: Box::new(init),
            condition,
            step: Box::new(step),
            body,
        })
    }

    /// Consume `)` or fail pointing back at the `(` left open.
    pub(crate) fn close_paren(
        &mut self,
        open: pico_ir::Span,
        what: &str,
    ) -> Result<(), ParseError> {
        if self.cursor.eat_separator(Separator::RParen) {
            Ok(())
        } else {
            Err(self
                .expected(ErrorCode::E1003, what)
                .with_context(open, "unclosed delimiter"))
        }
    }
}
