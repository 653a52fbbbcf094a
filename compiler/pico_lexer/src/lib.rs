//! Lexer for Pico, built on logos.
//!
//! [`tokenize`] is total: malformed input becomes a [`TokenKind::Error`]
//! token and scanning resumes at the next character, so the token stream
//! always covers the whole source. The only problem that is not a token is
//! an unterminated block comment, which swallows the rest of the input and
//! is reported as a warning in [`LexOutput::diagnostics`].

mod convert;
mod raw_token;

use logos::Logos;
use pico_diagnostic::{Diagnostic, ErrorCode};
use pico_ir::{LexErrorKind, Span, Token, TokenKind};

use crate::convert::{convert_error, convert_token};
use crate::raw_token::RawToken;

/// Result of lexing one source file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    /// Tokens in source order; offsets never decrease.
    pub tokens: Vec<Token>,
    /// Problems that did not become tokens.
    pub diagnostics: Vec<Diagnostic>,
}

impl LexOutput {
    /// Error tokens with their payloads.
    pub fn errors(&self) -> impl Iterator<Item = (&Token, &LexErrorKind)> {
        self.tokens.iter().filter_map(|tok| match &tok.kind {
            TokenKind::Error(kind) => Some((tok, kind)),
            _ => None,
        })
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// One diagnostic per error token, followed by the lexer warnings.
    pub fn all_diagnostics(&self) -> Vec<Diagnostic> {
        self.errors()
            .map(|(tok, kind)| lex_error_diagnostic(kind, tok.span))
            .chain(self.diagnostics.iter().cloned())
            .collect()
    }
}

/// Error code for a malformed token.
pub fn lex_error_code(kind: &LexErrorKind) -> ErrorCode {
    match kind {
        LexErrorKind::UnknownCharacter(_) => ErrorCode::E0001,
        LexErrorKind::LeadingDot | LexErrorKind::MultipleDots | LexErrorKind::InvalidNumber(_) => {
            ErrorCode::E0002
        }
        LexErrorKind::UnclosedChar | LexErrorKind::EmptyChar => ErrorCode::E0003,
        LexErrorKind::InvalidEscape(_) => ErrorCode::E0004,
    }
}

pub fn lex_error_diagnostic(kind: &LexErrorKind, span: Span) -> Diagnostic {
    let diag = Diagnostic::error(lex_error_code(kind))
        .with_message(kind.to_string())
        .with_label(span, "");
    match kind {
        LexErrorKind::InvalidEscape(_) => {
            diag.with_note("recognized escapes are \\n, \\t, \\\\, \\' and \\\"")
        }
        LexErrorKind::MultipleDots => diag.with_note("a number literal may contain one `.`"),
        _ => diag,
    }
}

/// Lex `source` into tokens.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> LexOutput {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let slice = lexer.slice();
        let kind = match result {
            Ok(raw) => match convert_token(raw, slice) {
                Some(kind) => kind,
                None => continue,
            },
            Err(err) => {
                let kind = convert_error(err, slice);
                tracing::trace!(%span, error = %kind, "lex error");
                TokenKind::Error(kind)
            }
        };
        tokens.push(Token::new(kind, span));
    }

    let diagnostics = lexer
        .extras
        .unterminated_comments
        .iter()
        .map(|&start| {
            let span = Span::from_range(start..start + 2);
            Diagnostic::warning(ErrorCode::W0001)
                .with_message("unterminated block comment")
                .with_label(span, "comment starts here")
                .with_note("the rest of the file is treated as a comment")
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        tokens = tokens.len(),
        warnings = diagnostics.len(),
        "lexed source"
    );
    LexOutput {
        tokens,
        diagnostics,
    }
}

#[cfg(test)]
mod tests;
