//! Token cursor for navigating the token stream.
//!
//! There is no end-of-input token; past the last token the cursor reports
//! `None` and positions collapse onto the end of the source.

use pico_ir::{Keyword, Operator, Separator, Span, Token, TokenKind};

pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Byte length of the source, used as the end-of-input position.
    end: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token], source_len: usize) -> Self {
        Cursor {
            tokens,
            pos: 0,
            end: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Current index into the token stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> Option<&'a TokenKind> {
        self.current().map(|t| &t.kind)
    }

    /// Span of the current token, or a point at the end of input.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current()
            .map_or_else(|| self.end_span(), |t| t.span)
    }

    pub fn end_span(&self) -> Span {
        Span::point(self.end)
    }

    pub fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::DUMMY, |t| t.span)
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    #[inline]
    pub fn check_separator(&self, sep: Separator) -> bool {
        matches!(self.current_kind(), Some(TokenKind::Separator(s)) if *s == sep)
    }

    #[inline]
    pub fn check_operator(&self, op: Operator) -> bool {
        matches!(self.current_kind(), Some(TokenKind::Operator(o)) if *o == op)
    }

    #[inline]
    pub fn check_keyword(&self, kw: Keyword) -> bool {
        matches!(self.current_kind(), Some(TokenKind::Keyword(k)) if *k == kw)
    }

    /// Consume the separator if it is next.
    pub fn eat_separator(&mut self, sep: Separator) -> bool {
        if self.check_separator(sep) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the operator if it is next.
    pub fn eat_operator(&mut self, op: Operator) -> bool {
        if self.check_operator(op) {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}
