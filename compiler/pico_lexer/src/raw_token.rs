//! Raw logos tokens and the callbacks that validate them.

use logos::{Lexer, Logos, Skip};

/// State carried through a logos pass.
#[derive(Default, Debug)]
pub(crate) struct LexExtras {
    /// Start offsets of block comments that never close.
    pub unterminated_comments: Vec<usize>,
}

/// Error produced by a rule callback, or by logos for unmatched input.
#[derive(Default, Debug, Clone, PartialEq)]
pub(crate) enum RawLexError {
    #[default]
    UnknownCharacter,
    LeadingDot,
    MultipleDots,
    InvalidNumber,
    InvalidEscape(char),
    UnclosedChar,
    EmptyChar,
}

/// A number literal after validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Number {
    Int(i64),
    Float(f64),
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(extras = LexExtras)]
#[logos(error = RawLexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*", logos::skip)]
    #[token("/*", block_comment)]
    Comment,

    // Keywords
    #[token("def")]
    Def,
    #[token("input")]
    Input,
    #[token("output")]
    Output,
    #[token("exit")]
    Exit,
    #[token("if")]
    If,
    #[token("elif")]
    Elif,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("return")]
    Return,
    #[token("true")]
    True,
    #[token("false")]
    False,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // Literals
    #[regex(r"[0-9]+(\.[0-9]*)*", number)]
    #[regex(r"\.[0-9.]*", number)]
    Number(Number),
    #[regex(r#""[^"]*"?"#)]
    Str,
    #[token("'", char_literal)]
    Char(char),

    // Separators
    #[token(";")]
    Semi,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,

    // Two-character operators
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,

    // Single-character operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("!")]
    Bang,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("=")]
    Assign,

    /// Non-ASCII characters outside literals, matched whole so the error
    /// token never splits a UTF-8 sequence.
    #[regex(r"[^\x00-\x7F]")]
    NonAscii,
}

/// Skip to the closing `*/`, or to the end of input if there is none.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> Skip {
    let rest = lex.remainder();
    if let Some(close) = rest.find("*/") {
        lex.bump(close + 2);
    } else {
        let start = lex.span().start;
        lex.extras.unterminated_comments.push(start);
        lex.bump(rest.len());
    }
    Skip
}

/// Validate a run of digits and dots.
///
/// `1.` and `.5` are floats; `.` alone, `.x` and anything with a second dot
/// are errors. The whole run is consumed either way.
fn number(lex: &mut Lexer<'_, RawToken>) -> Result<Number, RawLexError> {
    let text = lex.slice();
    if text.starts_with('.') && !text[1..].starts_with(|c: char| c.is_ascii_digit()) {
        return Err(RawLexError::LeadingDot);
    }
    match text.bytes().filter(|&b| b == b'.').count() {
        0 => text
            .parse::<i64>()
            .map(Number::Int)
            .map_err(|_| RawLexError::InvalidNumber),
        1 => text
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| RawLexError::InvalidNumber),
        _ => Err(RawLexError::MultipleDots),
    }
}

/// Lex the body of a character literal after its opening `'`.
fn char_literal(lex: &mut Lexer<'_, RawToken>) -> Result<char, RawLexError> {
    let mut chars = lex.remainder().chars();
    let (value, consumed) = match chars.next() {
        None | Some('\n') => return Err(RawLexError::UnclosedChar),
        Some('\'') => {
            lex.bump(1);
            return Err(RawLexError::EmptyChar);
        }
        Some('\\') => {
            let Some(escaped) = chars.next() else {
                lex.bump(1);
                return Err(RawLexError::UnclosedChar);
            };
            let value = match escaped {
                'n' => '\n',
                't' => '\t',
                '\\' => '\\',
                '\'' => '\'',
                '"' => '"',
                other => {
                    lex.bump(1 + other.len_utf8());
                    if chars.next() == Some('\'') {
                        lex.bump(1);
                    }
                    return Err(RawLexError::InvalidEscape(other));
                }
            };
            (value, 2)
        }
        Some(c) => (c, c.len_utf8()),
    };
    lex.bump(consumed);
    if chars.next() == Some('\'') {
        lex.bump(1);
        Ok(value)
    } else {
        Err(RawLexError::UnclosedChar)
    }
}
