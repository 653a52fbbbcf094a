//! Tokens produced by the lexer.
//!
//! A token is created once and never modified. Lexical errors are ordinary
//! tokens ([`TokenKind::Error`]) so the stream always runs to the end of
//! the input.

use std::fmt;

use crate::Span;

/// A lexed token with its source span.
///
/// The token's position is `span.start`.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Byte offset of the token's first character.
    #[inline]
    pub fn position(&self) -> u32 {
        self.span.start
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error(_))
    }
}

/// Token discriminant plus payload.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Literal(Literal),
    Keyword(Keyword),
    Separator(Separator),
    Ident(String),
    Operator(Operator),
    /// Malformed input; `Display` on the payload gives the message.
    Error(LexErrorKind),
}

impl TokenKind {
    /// Short name of the token category, used in diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            TokenKind::Literal(_) => "literal",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Separator(_) => "separator",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Operator(_) => "operator",
            TokenKind::Error(_) => "invalid token",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Literal(lit) => write!(f, "{} `{lit}`", lit.kind_name()),
            TokenKind::Keyword(kw) => write!(f, "keyword `{}`", kw.as_str()),
            TokenKind::Separator(sep) => write!(f, "`{}`", sep.as_char()),
            TokenKind::Ident(name) => write!(f, "identifier `{name}`"),
            TokenKind::Operator(op) => write!(f, "`{}`", op.as_str()),
            TokenKind::Error(msg) => write!(f, "invalid token ({msg})"),
        }
    }
}

/// What went wrong in a malformed token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A character that starts no token.
    UnknownCharacter(char),
    /// `.` not followed by a digit.
    LeadingDot,
    /// A number with more than one `.`.
    MultipleDots,
    /// Digits that do not form a representable number.
    InvalidNumber(String),
    /// Backslash followed by something other than `n t \\ ' "`.
    InvalidEscape(char),
    /// Character literal not closed right after its character.
    UnclosedChar,
    /// `''`
    EmptyChar,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnknownCharacter(c) => write!(f, "unknown character: {c}"),
            LexErrorKind::LeadingDot => write!(f, "invalid float literal starting with '.'"),
            LexErrorKind::MultipleDots => write!(f, "multiple dots in number literal"),
            LexErrorKind::InvalidNumber(text) => write!(f, "invalid number format: {text}"),
            LexErrorKind::InvalidEscape(c) => write!(f, "invalid escape sequence: \\{c}"),
            LexErrorKind::UnclosedChar => write!(f, "unclosed character literal"),
            LexErrorKind::EmptyChar => write!(f, "empty character literal"),
        }
    }
}

/// Literal payloads.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    /// String contents without the surrounding quotes.
    Str(String),
    /// Character after escape processing.
    Char(char),
    Bool(bool),
}

impl Literal {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::Int(_) => "integer",
            Literal::Float(_) => "float",
            Literal::Str(_) => "string",
            Literal::Char(_) => "character",
            Literal::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Float(n) => write!(f, "{n:?}"),
            Literal::Str(s) => write!(f, "\"{s}\""),
            Literal::Char(c) => write!(f, "{c:?}"),
            Literal::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Reserved words.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Def,
    Input,
    Output,
    /// Reserved; no statement uses it.
    Exit,
    If,
    Elif,
    Else,
    For,
    Return,
}

impl Keyword {
    pub const ALL: &'static [Keyword] = &[
        Keyword::Def,
        Keyword::Input,
        Keyword::Output,
        Keyword::Exit,
        Keyword::If,
        Keyword::Elif,
        Keyword::Else,
        Keyword::For,
        Keyword::Return,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Def => "def",
            Keyword::Input => "input",
            Keyword::Output => "output",
            Keyword::Exit => "exit",
            Keyword::If => "if",
            Keyword::Elif => "elif",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::Return => "return",
        }
    }
}

/// Punctuation that delimits structure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Separator {
    Semi,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Semi => ';',
            Separator::LParen => '(',
            Separator::RParen => ')',
            Separator::LBrace => '{',
            Separator::RBrace => '}',
            Separator::LBracket => '[',
            Separator::RBracket => ']',
            Separator::Comma => ',',
        }
    }
}

/// Operator symbols.
///
/// Includes symbols the grammar never accepts (`<<`, `&`, `=` inside an
/// expression, ...). They still lex as operators so the parser can name
/// them in its diagnostic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    EqEq,
    NotEq,
    LtEq,
    GtEq,
    AndAnd,
    OrOr,
    Shl,
    Shr,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Lt,
    Gt,
    Bang,
    Amp,
    Pipe,
    Caret,
    Assign,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::EqEq => "==",
            Operator::NotEq => "!=",
            Operator::LtEq => "<=",
            Operator::GtEq => ">=",
            Operator::AndAnd => "&&",
            Operator::OrOr => "||",
            Operator::Shl => "<<",
            Operator::Shr => ">>",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Percent => "%",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Bang => "!",
            Operator::Amp => "&",
            Operator::Pipe => "|",
            Operator::Caret => "^",
            Operator::Assign => "=",
        }
    }
}

#[cfg(test)]
mod tests;
