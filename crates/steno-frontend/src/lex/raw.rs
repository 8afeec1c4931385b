use logos::{Lexer, Logos};

/// Raw tokens are the direct output of the lexer. Names are not yet checked
/// against the keyword table; that happens when they are turned into
/// [`TokenType`](super::TokenType)s.
#[derive(Logos, Clone, Debug, Eq, PartialEq)]
pub enum RawToken {
    #[regex(r"[a-zA-Z]+", |lexer| lexer.slice().to_string())]
    Name(String),

    #[regex(r"-?[0-9]+", |lexer| lexer.slice().to_string())]
    Integer(String),

    // Quotes and escapes are kept verbatim.
    #[regex(r#""([^"\\\n\r]|\\[^\n\r])*""#, |lexer| lexer.slice().to_string())]
    #[regex(r#"'([^'\\\n\r]|\\[^\n\r])*'"#, |lexer| lexer.slice().to_string())]
    String(String),

    #[regex(r#"b"([^"\\\n\r]|\\[^\n\r])*""#, |lexer| lexer.slice().to_string())]
    #[regex(r#"b'([^'\\\n\r]|\\[^\n\r])*'"#, |lexer| lexer.slice().to_string())]
    Bytes(String),

    #[token("or", word_end)]
    Or,
    #[token("iter", word_end)]
    Iter,
    #[token("with", word_end)]
    With,
    #[token("await", word_end)]
    Await,
    #[token("async iter", word_end)]
    AsyncIter,
    #[token("async with", word_end)]
    AsyncWith,

    #[token("True", word_end)]
    True,
    #[token("False", word_end)]
    False,
    #[token("None", word_end)]
    None,
    #[token("Ellipsis", word_end)]
    Ellipsis,

    #[token("_", word_end)]
    Underscore,

    #[token("...")]
    Dots,
    #[token(".")]
    Period,
    #[token("?")]
    Question,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,

    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("*")]
    Star,
    #[token("**")]
    DoubleStar,
    #[token("/")]
    Slash,
    #[token("->")]
    Arrow,

    #[error]
    #[regex(r"[ \t\n\r\f\v]+", logos::skip)]
    Error,
}

/// Word-like tokens only match as whole words, so `order` is a name and
/// `or_` is not `or` followed by something else.
fn word_end(lexer: &mut Lexer<RawToken>) -> bool {
    !lexer
        .remainder()
        .starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
