//! Tokenization turns the notation string into a list of tokens. The
//! notation is insignificant to whitespace, so this is a single pass over
//! [raw tokens](raw), which only needs to separate keywords from names and
//! attach spans.

mod raw;

#[cfg(test)]
mod tests;

use log::trace;
use logos::Logos;
use steno_common::source::Span;

use self::raw::RawToken;
use crate::error::GrammarError;
use crate::keywords::is_keyword;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Token {
    pub kind: TokenType,

    /// The span of this token.
    pub span: Span,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TokenType {
    Name(String),
    /// A reserved word of the host language with no meaning in the notation.
    Keyword(String),

    Integer(String),
    String(String),
    Bytes(String),

    Or,
    Iter,
    With,
    Await,
    AsyncIter,
    AsyncWith,

    True,
    False,
    None,
    Ellipsis,

    Underscore,
    Dots,
    Period,
    Question,

    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,

    Colon,
    Comma,
    Star,
    DoubleStar,
    Slash,
    Arrow,
}

impl TokenType {
    /// How this kind of token is called in "expected ..." messages.
    pub fn expectation(&self) -> &'static str {
        match self {
            Self::Name(_) => "NAME",
            Self::Keyword(_) => "KEYWORD",
            Self::Integer(_) => "INTEGER",
            Self::String(_) => "STRING",
            Self::Bytes(_) => "BYTES",

            Self::Or => "'or'",
            Self::Iter => "'iter'",
            Self::With => "'with'",
            Self::Await => "'await'",
            Self::AsyncIter => "'async iter'",
            Self::AsyncWith => "'async with'",

            Self::True => "'True'",
            Self::False => "'False'",
            Self::None => "'None'",
            Self::Ellipsis => "'Ellipsis'",

            Self::Underscore => "'_'",
            Self::Dots => "'...'",
            Self::Period => "'.'",
            Self::Question => "'?'",

            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::LeftBracket => "'['",
            Self::RightBracket => "']'",
            Self::LeftBrace => "'{'",
            Self::RightBrace => "'}'",

            Self::Colon => "':'",
            Self::Comma => "','",
            Self::Star => "'*'",
            Self::DoubleStar => "'**'",
            Self::Slash => "'/'",
            Self::Arrow => "'->'",
        }
    }

    /// The text carried by names and literals.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Name(text)
            | Self::Keyword(text)
            | Self::Integer(text)
            | Self::String(text)
            | Self::Bytes(text) => Some(text),
            _ => None,
        }
    }

    /// A description of this particular token, for "found ..." messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Name(text) => format!("name `{text}`"),
            Self::Keyword(text) => format!("keyword `{text}`"),
            Self::Integer(text) => format!("integer `{text}`"),
            Self::String(text) => format!("string {text}"),
            Self::Bytes(text) => format!("bytes {text}"),
            other => other.expectation().to_string(),
        }
    }
}

/// Turn a raw token into a token type, or `None` if it was invalid.
fn convert(raw: RawToken) -> Option<TokenType> {
    Some(match raw {
        RawToken::Name(name) if is_keyword(&name) => TokenType::Keyword(name),
        RawToken::Name(name) => TokenType::Name(name),
        RawToken::Integer(integer) => TokenType::Integer(integer),
        RawToken::String(string) => TokenType::String(string),
        RawToken::Bytes(bytes) => TokenType::Bytes(bytes),

        RawToken::Or => TokenType::Or,
        RawToken::Iter => TokenType::Iter,
        RawToken::With => TokenType::With,
        RawToken::Await => TokenType::Await,
        RawToken::AsyncIter => TokenType::AsyncIter,
        RawToken::AsyncWith => TokenType::AsyncWith,

        RawToken::True => TokenType::True,
        RawToken::False => TokenType::False,
        RawToken::None => TokenType::None,
        RawToken::Ellipsis => TokenType::Ellipsis,

        RawToken::Underscore => TokenType::Underscore,
        RawToken::Dots => TokenType::Dots,
        RawToken::Period => TokenType::Period,
        RawToken::Question => TokenType::Question,

        RawToken::LeftParen => TokenType::LeftParen,
        RawToken::RightParen => TokenType::RightParen,
        RawToken::LeftBracket => TokenType::LeftBracket,
        RawToken::RightBracket => TokenType::RightBracket,
        RawToken::LeftBrace => TokenType::LeftBrace,
        RawToken::RightBrace => TokenType::RightBrace,

        RawToken::Colon => TokenType::Colon,
        RawToken::Comma => TokenType::Comma,
        RawToken::Star => TokenType::Star,
        RawToken::DoubleStar => TokenType::DoubleStar,
        RawToken::Slash => TokenType::Slash,
        RawToken::Arrow => TokenType::Arrow,

        RawToken::Error => return None,
    })
}

/// An iterator producing a stream of tokens from a notation string. This
/// produces a result which is either `Ok(token)` with a token or `Err(span)`
/// when an invalid token was encountered at the given span.
pub struct TokenIter<'source> {
    lexer: logos::SpannedIter<'source, RawToken>,
}

impl<'source> TokenIter<'source> {
    pub fn new(content: &'source str) -> Self {
        Self {
            lexer: RawToken::lexer(content).spanned(),
        }
    }
}

impl Iterator for TokenIter<'_> {
    type Item = Result<Token, Span>;

    fn next(&mut self) -> Option<Self::Item> {
        let (raw, span) = self.lexer.next()?;
        let span = Span::from(span);

        let token = convert(raw)
            .map(|kind| Token { kind, span })
            .ok_or(span);

        Some(token)
    }
}

/// Tokenize all of `text`, failing on the first invalid token.
pub fn lex(text: &str) -> Result<Vec<Token>, GrammarError> {
    let tokens = TokenIter::new(text)
        .map(|token| {
            token.map_err(|span| GrammarError::InvalidToken {
                span,
                text: text[span.start..span.end].to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    trace!("lexed {} tokens", tokens.len());
    Ok(tokens)
}
