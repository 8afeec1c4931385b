use steno_common::source::Span;

use super::{lex, Token, TokenIter, TokenType};
use crate::error::GrammarError;

/// Check that the lexer produces the expected token types without errors.
fn check(source: &str, expected: &[TokenType]) {
    let tokens: Vec<Token> = TokenIter::new(source)
        .collect::<Result<_, _>>()
        .unwrap_or_else(|span| panic!("unexpected invalid token at {span:?} in {source:?}"));

    assert_eq!(expected.len(), tokens.len(), "{tokens:?}");

    for (expected, actual) in expected.iter().zip(tokens) {
        assert_eq!(expected, &actual.kind);
    }
}

/// Check that the lexer rejects the source.
fn check_error(source: &str) {
    assert!(
        TokenIter::new(source).any(|token| token.is_err()),
        "expected an invalid token in {source:?}"
    );
}

#[test]
fn lex_names_and_keywords() {
    check(
        "foo order class async",
        &[
            TokenType::Name("foo".into()),
            TokenType::Name("order".into()),
            TokenType::Keyword("class".into()),
            TokenType::Keyword("async".into()),
        ],
    );
}

#[test]
fn lex_operator_words() {
    check(
        "or iter with await async iter async with",
        &[
            TokenType::Or,
            TokenType::Iter,
            TokenType::With,
            TokenType::Await,
            TokenType::AsyncIter,
            TokenType::AsyncWith,
        ],
    );
}

#[test]
fn lex_literals() {
    check(
        r#"True False None Ellipsis -12 0 "a \" b" 'c' b"d" b'e'"#,
        &[
            TokenType::True,
            TokenType::False,
            TokenType::None,
            TokenType::Ellipsis,
            TokenType::Integer("-12".into()),
            TokenType::Integer("0".into()),
            TokenType::String(r#""a \" b""#.into()),
            TokenType::String("'c'".into()),
            TokenType::Bytes(r#"b"d""#.into()),
            TokenType::Bytes("b'e'".into()),
        ],
    );
}

#[test]
fn lex_punctuation() {
    check(
        "_ ... . ? ( ) [ ] { } : , * ** / ->",
        &[
            TokenType::Underscore,
            TokenType::Dots,
            TokenType::Period,
            TokenType::Question,
            TokenType::LeftParen,
            TokenType::RightParen,
            TokenType::LeftBracket,
            TokenType::RightBracket,
            TokenType::LeftBrace,
            TokenType::RightBrace,
            TokenType::Colon,
            TokenType::Comma,
            TokenType::Star,
            TokenType::DoubleStar,
            TokenType::Slash,
            TokenType::Arrow,
        ],
    );
}

#[test]
fn lex_without_whitespace() {
    check(
        "??[x]",
        &[
            TokenType::Question,
            TokenType::Question,
            TokenType::LeftBracket,
            TokenType::Name("x".into()),
            TokenType::RightBracket,
        ],
    );

    check(
        "(a:A,*_)->R",
        &[
            TokenType::LeftParen,
            TokenType::Name("a".into()),
            TokenType::Colon,
            TokenType::Name("A".into()),
            TokenType::Comma,
            TokenType::Star,
            TokenType::Underscore,
            TokenType::RightParen,
            TokenType::Arrow,
            TokenType::Name("R".into()),
        ],
    );
}

#[test]
fn lex_word_boundaries() {
    check("oracle", &[TokenType::Name("oracle".into())]);
    check("iterable", &[TokenType::Name("iterable".into())]);
    check("Nonesuch", &[TokenType::Name("Nonesuch".into())]);

    check_error("or_else");
    check_error("_x");
    check_error("True1");
}

#[test]
fn lex_invalid_characters() {
    check_error("int32_t");
    check_error("a - b");
    check_error("foo$");
    check_error("\"unterminated");
}

#[test]
fn lex_spans() {
    let tokens = lex("  foo . bar").unwrap();
    let spans: Vec<_> = tokens.iter().map(|token| token.span).collect();

    assert_eq!(
        vec![Span::new(2, 5), Span::new(6, 7), Span::new(8, 11)],
        spans
    );
}

#[test]
fn lex_reports_invalid_text() {
    assert_eq!(
        Err(GrammarError::InvalidToken {
            span: Span::new(4, 5),
            text: "$".into(),
        }),
        lex("foo $")
    );
}
