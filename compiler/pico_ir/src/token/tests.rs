use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_token_position_is_span_start() {
    let tok = Token::new(TokenKind::Ident("x".into()), Span::new(4, 5));
    assert_eq!(tok.position(), 4);
    assert!(!tok.is_error());
}

#[test]
fn test_error_token() {
    let tok = Token::new(
        TokenKind::Error(LexErrorKind::UnknownCharacter('@')),
        Span::new(0, 1),
    );
    assert!(tok.is_error());
    assert_eq!(tok.kind.category(), "invalid token");
    assert_eq!(
        tok.kind.to_string(),
        "invalid token (unknown character: @)"
    );
}

#[test]
fn test_lex_error_messages() {
    assert_eq!(
        LexErrorKind::InvalidEscape('q').to_string(),
        "invalid escape sequence: \\q"
    );
    assert_eq!(
        LexErrorKind::LeadingDot.to_string(),
        "invalid float literal starting with '.'"
    );
    assert_eq!(
        LexErrorKind::InvalidNumber("99999999999999999999".into()).to_string(),
        "invalid number format: 99999999999999999999"
    );
}

#[test]
fn test_display_forms() {
    assert_eq!(TokenKind::Separator(Separator::Semi).to_string(), "`;`");
    assert_eq!(TokenKind::Operator(Operator::Shl).to_string(), "`<<`");
    assert_eq!(
        TokenKind::Keyword(Keyword::Def).to_string(),
        "keyword `def`"
    );
    assert_eq!(
        TokenKind::Ident("count".into()).to_string(),
        "identifier `count`"
    );
    assert_eq!(
        TokenKind::Literal(Literal::Int(42)).to_string(),
        "integer `42`"
    );
    assert_eq!(
        TokenKind::Literal(Literal::Float(1.0)).to_string(),
        "float `1.0`"
    );
    assert_eq!(
        TokenKind::Literal(Literal::Str("hi".into())).to_string(),
        "string `\"hi\"`"
    );
}

#[test]
fn test_keyword_spellings_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for kw in Keyword::ALL {
        assert!(seen.insert(kw.as_str()), "duplicate keyword {}", kw.as_str());
    }
    assert_eq!(seen.len(), 9);
}

#[test]
fn test_separator_chars() {
    let chars: String = [
        Separator::Semi,
        Separator::LParen,
        Separator::RParen,
        Separator::LBrace,
        Separator::RBrace,
        Separator::LBracket,
        Separator::RBracket,
        Separator::Comma,
    ]
    .iter()
    .map(|s| s.as_char())
    .collect();
    assert_eq!(chars, ";(){}[],");
}
