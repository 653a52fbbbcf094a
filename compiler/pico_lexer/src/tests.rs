use super::*;
use pico_ir::{Keyword, Literal, Operator, Separator};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).tokens.into_iter().map(|t| t.kind).collect()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Ident(name.to_string())
}

fn int(n: i64) -> TokenKind {
    TokenKind::Literal(Literal::Int(n))
}

fn float(n: f64) -> TokenKind {
    TokenKind::Literal(Literal::Float(n))
}

fn op(op: Operator) -> TokenKind {
    TokenKind::Operator(op)
}

fn sep(sep: Separator) -> TokenKind {
    TokenKind::Separator(sep)
}

#[test]
fn test_empty_and_whitespace_only() {
    assert_eq!(kinds(""), vec![]);
    assert_eq!(kinds("  \t\r\n\n  "), vec![]);
}

#[test]
fn test_function_header() {
    assert_eq!(
        kinds("def add(a, b) {"),
        vec![
            TokenKind::Keyword(Keyword::Def),
            ident("add"),
            sep(Separator::LParen),
            ident("a"),
            sep(Separator::Comma),
            ident("b"),
            sep(Separator::RParen),
            sep(Separator::LBrace),
        ]
    );
}

#[test]
fn test_keywords_and_booleans() {
    assert_eq!(
        kinds("input output exit if elif else for return true false"),
        vec![
            TokenKind::Keyword(Keyword::Input),
            TokenKind::Keyword(Keyword::Output),
            TokenKind::Keyword(Keyword::Exit),
            TokenKind::Keyword(Keyword::If),
            TokenKind::Keyword(Keyword::Elif),
            TokenKind::Keyword(Keyword::Else),
            TokenKind::Keyword(Keyword::For),
            TokenKind::Keyword(Keyword::Return),
            TokenKind::Literal(Literal::Bool(true)),
            TokenKind::Literal(Literal::Bool(false)),
        ]
    );
}

#[test]
fn test_keyword_prefixes_are_identifiers() {
    assert_eq!(
        kinds("define inputs _if for2 returned"),
        vec![
            ident("define"),
            ident("inputs"),
            ident("_if"),
            ident("for2"),
            ident("returned")
        ]
    );
}

#[test]
fn test_two_char_operators_are_greedy() {
    assert_eq!(
        kinds("== != <= >= && || << >>"),
        vec![
            op(Operator::EqEq),
            op(Operator::NotEq),
            op(Operator::LtEq),
            op(Operator::GtEq),
            op(Operator::AndAnd),
            op(Operator::OrOr),
            op(Operator::Shl),
            op(Operator::Shr),
        ]
    );
    assert_eq!(
        kinds("a<=b"),
        vec![ident("a"), op(Operator::LtEq), ident("b")]
    );
    assert_eq!(kinds("==="), vec![op(Operator::EqEq), op(Operator::Assign)]);
}

#[test]
fn test_single_char_operators() {
    assert_eq!(
        kinds("+ - * / % < > ! & | ^ ="),
        vec![
            op(Operator::Plus),
            op(Operator::Minus),
            op(Operator::Star),
            op(Operator::Slash),
            op(Operator::Percent),
            op(Operator::Lt),
            op(Operator::Gt),
            op(Operator::Bang),
            op(Operator::Amp),
            op(Operator::Pipe),
            op(Operator::Caret),
            op(Operator::Assign),
        ]
    );
}

#[test]
fn test_separators() {
    assert_eq!(
        kinds("; ( ) { } [ ] ,"),
        vec![
            sep(Separator::Semi),
            sep(Separator::LParen),
            sep(Separator::RParen),
            sep(Separator::LBrace),
            sep(Separator::RBrace),
            sep(Separator::LBracket),
            sep(Separator::RBracket),
            sep(Separator::Comma),
        ]
    );
}

// Numbers

#[test]
fn test_integer_and_float_literals() {
    assert_eq!(kinds("42"), vec![int(42)]);
    assert_eq!(kinds("3.25"), vec![float(3.25)]);
    assert_eq!(kinds("7."), vec![float(7.0)]);
    assert_eq!(kinds(".5"), vec![float(0.5)]);
    assert_eq!(kinds("007"), vec![int(7)]);
}

#[test]
fn test_minus_is_always_an_operator() {
    assert_eq!(kinds("-5"), vec![op(Operator::Minus), int(5)]);
    assert_eq!(
        kinds("a-5"),
        vec![ident("a"), op(Operator::Minus), int(5)]
    );
    assert_eq!(
        kinds("a -5"),
        vec![ident("a"), op(Operator::Minus), int(5)]
    );
}

#[test]
fn test_leading_dot_without_digit_is_error() {
    assert_eq!(
        kinds(". x"),
        vec![TokenKind::Error(LexErrorKind::LeadingDot), ident("x")]
    );
    assert_eq!(
        kinds(".x"),
        vec![TokenKind::Error(LexErrorKind::LeadingDot), ident("x")]
    );
}

#[test]
fn test_multiple_dots_consume_whole_run() {
    let out = tokenize("1.2.3 ;");
    assert_eq!(
        out.tokens[0],
        Token::new(TokenKind::Error(LexErrorKind::MultipleDots), Span::new(0, 5))
    );
    assert_eq!(out.tokens[1].kind, sep(Separator::Semi));
    assert_eq!(out.tokens.len(), 2);
}

#[test]
fn test_integer_overflow_is_error() {
    assert_eq!(
        kinds("99999999999999999999"),
        vec![TokenKind::Error(LexErrorKind::InvalidNumber(
            "99999999999999999999".into()
        ))]
    );
    assert_eq!(kinds("9223372036854775807"), vec![int(i64::MAX)]);
}

// Strings and characters

#[test]
fn test_string_literal_has_no_escapes() {
    assert_eq!(
        kinds(r#""a\nb""#),
        vec![TokenKind::Literal(Literal::Str(r"a\nb".into()))]
    );
    assert_eq!(
        kinds(r#""""#),
        vec![TokenKind::Literal(Literal::Str(String::new()))]
    );
}

#[test]
fn test_unterminated_string_runs_to_end() {
    let out = tokenize("output \"hello\nworld");
    assert_eq!(out.tokens.len(), 2);
    assert_eq!(
        out.tokens[1].kind,
        TokenKind::Literal(Literal::Str("hello\nworld".into()))
    );
    assert!(!out.has_errors());
}

#[test]
fn test_char_literals_and_escapes() {
    let lit = |c| TokenKind::Literal(Literal::Char(c));
    assert_eq!(kinds("'a'"), vec![lit('a')]);
    assert_eq!(
        kinds(r#"'\n' '\t' '\\' '\'' '\"'"#),
        vec![lit('\n'), lit('\t'), lit('\\'), lit('\''), lit('"')]
    );
    assert_eq!(kinds("'é'"), vec![lit('é')]);
}

#[test]
fn test_invalid_escape() {
    let out = tokenize(r"'\q' x");
    assert_eq!(
        out.tokens[0],
        Token::new(
            TokenKind::Error(LexErrorKind::InvalidEscape('q')),
            Span::new(0, 4)
        )
    );
    assert_eq!(out.tokens[1].kind, ident("x"));
}

#[test]
fn test_unclosed_char_literal() {
    assert_eq!(
        kinds("'ab'"),
        vec![
            TokenKind::Error(LexErrorKind::UnclosedChar),
            ident("b"),
            TokenKind::Error(LexErrorKind::UnclosedChar),
        ]
    );
    assert_eq!(kinds("'"), vec![TokenKind::Error(LexErrorKind::UnclosedChar)]);
    assert_eq!(kinds("''"), vec![TokenKind::Error(LexErrorKind::EmptyChar)]);
}

// Comments

#[test]
fn test_line_comments_are_skipped() {
    assert_eq!(
        kinds("x = 1; // trailing\n// whole line\ny"),
        vec![
            ident("x"),
            op(Operator::Assign),
            int(1),
            sep(Separator::Semi),
            ident("y")
        ]
    );
}

#[test]
fn test_block_comments_are_skipped() {
    assert_eq!(kinds("a /* one\ntwo */ b"), vec![ident("a"), ident("b")]);
    assert_eq!(kinds("a/**/b"), vec![ident("a"), ident("b")]);
    assert!(tokenize("a /* x */ b").diagnostics.is_empty());
}

#[test]
fn test_unterminated_block_comment_warns_and_continues() {
    let out = tokenize("x = 1; /* never closed\ny = 2;");
    assert_eq!(out.tokens.len(), 4);
    assert_eq!(out.diagnostics.len(), 1);
    let diag = &out.diagnostics[0];
    assert_eq!(diag.code, ErrorCode::W0001);
    assert!(!diag.is_error());
    assert_eq!(diag.primary_span(), Some(Span::new(7, 9)));
}

// Errors and positions

#[test]
fn test_unknown_characters_become_error_tokens() {
    let out = tokenize("a @ b # c");
    assert_eq!(
        out.tokens.iter().map(|t| t.kind.clone()).collect::<Vec<_>>(),
        vec![
            ident("a"),
            TokenKind::Error(LexErrorKind::UnknownCharacter('@')),
            ident("b"),
            TokenKind::Error(LexErrorKind::UnknownCharacter('#')),
            ident("c"),
        ]
    );
    assert_eq!(out.errors().count(), 2);
    assert_eq!(out.tokens[1].span, Span::new(2, 3));
}

#[test]
fn test_non_ascii_outside_literals_is_one_error_token() {
    let out = tokenize("x λ y");
    assert_eq!(
        out.tokens[1],
        Token::new(
            TokenKind::Error(LexErrorKind::UnknownCharacter('λ')),
            Span::new(2, 4)
        )
    );
    assert_eq!(out.tokens[2].kind, ident("y"));
}

#[test]
fn test_error_diagnostics_carry_codes() {
    let out = tokenize("$ 1.2.3 '\\z'");
    let codes: Vec<_> = out.all_diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![ErrorCode::E0001, ErrorCode::E0002, ErrorCode::E0004]
    );
    assert_eq!(out.all_diagnostics()[0].message, "unknown character: $");
}

#[test]
fn test_positions_are_first_character_offsets() {
    let out = tokenize("def main() {\n  output 10;\n}");
    let positions: Vec<u32> = out.tokens.iter().map(Token::position).collect();
    assert_eq!(positions, vec![0, 4, 8, 9, 11, 15, 22, 24, 26]);
}

mod proptest_lexer {
    use super::tokenize;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn tokenize_never_panics(source in "\\PC{0,200}") {
            let _ = tokenize(&source);
        }

        #[test]
        fn offsets_are_non_decreasing(source in "[a-z0-9 .'\"/*+=<>!&|;(){}\\[\\]@#\n-]{0,120}") {
            let out = tokenize(&source);
            for pair in out.tokens.windows(2) {
                prop_assert!(pair[0].span.start <= pair[1].span.start);
                prop_assert!(pair[0].span.end <= pair[1].span.start);
            }
            for tok in &out.tokens {
                prop_assert!(tok.span.end as usize <= source.len());
                prop_assert!(tok.span.start < tok.span.end);
            }
        }

        #[test]
        fn identifiers_round_trip(name in "[a-z_][a-z0-9_]{0,12}") {
            let out = tokenize(&name);
            prop_assert_eq!(out.tokens.len(), 1);
        }
    }
}
