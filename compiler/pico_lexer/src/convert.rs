//! Raw logos output to `pico_ir` token kinds.

use pico_ir::{Keyword, LexErrorKind, Literal, Operator, Separator, TokenKind};

use crate::raw_token::{Number, RawLexError, RawToken};

/// `None` for trivia that produces no token.
pub(crate) fn convert_token(raw: RawToken, slice: &str) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::Comment => return None,

        RawToken::Def => TokenKind::Keyword(Keyword::Def),
        RawToken::Input => TokenKind::Keyword(Keyword::Input),
        RawToken::Output => TokenKind::Keyword(Keyword::Output),
        RawToken::Exit => TokenKind::Keyword(Keyword::Exit),
        RawToken::If => TokenKind::Keyword(Keyword::If),
        RawToken::Elif => TokenKind::Keyword(Keyword::Elif),
        RawToken::Else => TokenKind::Keyword(Keyword::Else),
        RawToken::For => TokenKind::Keyword(Keyword::For),
        RawToken::Return => TokenKind::Keyword(Keyword::Return),
        RawToken::True => TokenKind::Literal(Literal::Bool(true)),
        RawToken::False => TokenKind::Literal(Literal::Bool(false)),

        RawToken::Ident => TokenKind::Ident(slice.to_string()),

        RawToken::Number(Number::Int(n)) => TokenKind::Literal(Literal::Int(n)),
        RawToken::Number(Number::Float(f)) => TokenKind::Literal(Literal::Float(f)),
        RawToken::Str => {
            // No escape processing; an unterminated string runs to end of input.
            let body = &slice[1..];
            let body = body.strip_suffix('"').unwrap_or(body);
            TokenKind::Literal(Literal::Str(body.to_string()))
        }
        RawToken::Char(c) => TokenKind::Literal(Literal::Char(c)),

        RawToken::Semi => TokenKind::Separator(Separator::Semi),
        RawToken::LParen => TokenKind::Separator(Separator::LParen),
        RawToken::RParen => TokenKind::Separator(Separator::RParen),
        RawToken::LBrace => TokenKind::Separator(Separator::LBrace),
        RawToken::RBrace => TokenKind::Separator(Separator::RBrace),
        RawToken::LBracket => TokenKind::Separator(Separator::LBracket),
        RawToken::RBracket => TokenKind::Separator(Separator::RBracket),
        RawToken::Comma => TokenKind::Separator(Separator::Comma),

        RawToken::EqEq => TokenKind::Operator(Operator::EqEq),
        RawToken::NotEq => TokenKind::Operator(Operator::NotEq),
        RawToken::LtEq => TokenKind::Operator(Operator::LtEq),
        RawToken::GtEq => TokenKind::Operator(Operator::GtEq),
        RawToken::AndAnd => TokenKind::Operator(Operator::AndAnd),
        RawToken::OrOr => TokenKind::Operator(Operator::OrOr),
        RawToken::Shl => TokenKind::Operator(Operator::Shl),
        RawToken::Shr => TokenKind::Operator(Operator::Shr),
        RawToken::Plus => TokenKind::Operator(Operator::Plus),
        RawToken::Minus => TokenKind::Operator(Operator::Minus),
        RawToken::Star => TokenKind::Operator(Operator::Star),
        RawToken::Slash => TokenKind::Operator(Operator::Slash),
        RawToken::Percent => TokenKind::Operator(Operator::Percent),
        RawToken::Lt => TokenKind::Operator(Operator::Lt),
        RawToken::Gt => TokenKind::Operator(Operator::Gt),
        RawToken::Bang => TokenKind::Operator(Operator::Bang),
        RawToken::Amp => TokenKind::Operator(Operator::Amp),
        RawToken::Pipe => TokenKind::Operator(Operator::Pipe),
        RawToken::Caret => TokenKind::Operator(Operator::Caret),
        RawToken::Assign => TokenKind::Operator(Operator::Assign),

        RawToken::NonAscii => TokenKind::Error(LexErrorKind::UnknownCharacter(first_char(slice))),
    };
    Some(kind)
}

pub(crate) fn convert_error(err: RawLexError, slice: &str) -> LexErrorKind {
    match err {
        RawLexError::UnknownCharacter => LexErrorKind::UnknownCharacter(first_char(slice)),
        RawLexError::LeadingDot => LexErrorKind::LeadingDot,
        RawLexError::MultipleDots => LexErrorKind::MultipleDots,
        RawLexError::InvalidNumber => LexErrorKind::InvalidNumber(slice.to_string()),
        RawLexError::InvalidEscape(c) => LexErrorKind::InvalidEscape(c),
        RawLexError::UnclosedChar => LexErrorKind::UnclosedChar,
        RawLexError::EmptyChar => LexErrorKind::EmptyChar,
    }
}

fn first_char(slice: &str) -> char {
    slice.chars().next().unwrap_or('\u{FFFD}')
}
