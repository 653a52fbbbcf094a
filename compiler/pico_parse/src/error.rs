//! Parse error type.
//!
//! Parsing stops at the first error, so a `ParseError` is always the single
//! reason a compilation unit was rejected.

use std::fmt;

use pico_diagnostic::{Diagnostic, ErrorCode};
use pico_ir::{Span, Token, TokenKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    /// Offending token, or a point at end of input.
    pub span: Span,
    /// Text under the caret.
    pub label: String,
    /// Related location, such as the delimiter left open.
    pub context: Option<(Span, String)>,
}

impl ParseError {
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            label: String::new(),
            context: None,
        }
    }

    /// `expected <expected>, found <token>`.
    ///
    /// A lexical error token is reported with its own message and code
    /// instead: the parser never gets past it.
    #[cold]
    pub fn expected(
        code: ErrorCode,
        expected: &str,
        found: Option<&Token>,
        end_of_input: Span,
    ) -> Self {
        match found {
            Some(Token {
                kind: TokenKind::Error(kind),
                span,
            }) => ParseError::new(pico_lexer::lex_error_code(kind), kind.to_string(), *span)
                .with_label("invalid token"),
            Some(tok) => ParseError::new(
                code,
                format!("expected {expected}, found {}", tok.kind),
                tok.span,
            )
            .with_label(format!("expected {expected}")),
            None => ParseError::new(
                ErrorCode::E1006,
                format!("expected {expected}, found end of input"),
                end_of_input,
            )
            .with_label(format!("expected {expected}")),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_context(mut self, span: Span, message: impl Into<String>) -> Self {
        self.context = Some((span, message.into()));
        self
    }

    /// Byte offset the error refers to.
    pub fn position(&self) -> u32 {
        self.span.start
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, &self.label);
        if let Some((span, message)) = &self.context {
            diag = diag.with_secondary_label(*span, message);
        }
        diag
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.message, self.span.start)
    }
}

impl std::error::Error for ParseError {}
