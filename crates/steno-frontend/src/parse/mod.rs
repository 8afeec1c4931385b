//! A backtracking recursive-descent parser over the single non-terminal
//! `TYPE`. Alternatives are ordered: the first one to succeed wins, and a
//! failed alternative restores the cursor before the next one is tried.
//!
//! Failures carry no information by themselves. Instead, every token the
//! parser wished for is recorded together with its position, and when the
//! parse as a whole fails the expectations at the furthest position reached
//! make up the error.

mod signature;
mod types;

#[cfg(test)]
mod tests;

use std::collections::{BTreeSet, HashMap};

use steno_common::elements::Steno;
use steno_common::source::Span;

use crate::error::GrammarError;
use crate::lex::{Token, TokenType};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    end: Span,

    /// The furthest token position at which something was expected, and what.
    furthest: usize,
    expected: BTreeSet<&'static str>,

    /// Results of `TYPE` by start position.
    memo: HashMap<usize, Option<(Steno, usize)>>,
}

impl Parser {
    /// Create a parser over the tokens of a text that is `len` bytes long.
    pub fn new(tokens: Vec<Token>, len: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            end: Span::empty(len),

            furthest: 0,
            expected: BTreeSet::new(),

            memo: HashMap::new(),
        }
    }

    /// Parse a single `TYPE` spanning every token.
    pub fn parse_all(&mut self) -> Result<Steno, GrammarError> {
        let result = self.parse_type().filter(|_| self.at_end());
        result.ok_or_else(|| self.error())
    }

    /// Whether every token has been consumed. Records the expectation if not.
    fn at_end(&mut self) -> bool {
        if self.pos < self.tokens.len() {
            self.expect("end of input");
            false
        } else {
            true
        }
    }

    fn error(&self) -> GrammarError {
        let (span, found) = match self.tokens.get(self.furthest) {
            Some(token) => (token.span, token.kind.describe()),
            None => (self.end, String::from("end of input")),
        };

        GrammarError::Unexpected {
            span,
            expected: self.expected.iter().map(|what| what.to_string()).collect(),
            found,
        }
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Record that `what` would have been accepted at the current position.
    fn expect(&mut self, what: &'static str) {
        if self.pos > self.furthest {
            self.furthest = self.pos;
            self.expected.clear();
        }

        if self.pos == self.furthest {
            self.expected.insert(what);
        }
    }

    /// Return `true` if the current token matches, without recording anything.
    fn peek(&self, matcher: impl Matcher) -> bool {
        self.current()
            .map(|token| matcher.matches(&token.kind))
            .unwrap_or(false)
    }

    /// Advance the parser and return its span if the current token matches.
    fn consume(&mut self, expected: TokenType) -> Option<Span> {
        match self.current() {
            Some(token) if expected.matches(&token.kind) => {
                let span = token.span;
                self.pos += 1;
                Some(span)
            }

            _ => {
                self.expect(expected.expectation());
                None
            }
        }
    }

    /// Consume a token carrying text, such as a name or a literal, and return
    /// that text.
    fn consume_text(&mut self, expected: TokenType) -> Option<String> {
        let text = self
            .current()
            .filter(|token| expected.matches(&token.kind))
            .and_then(|token| token.kind.text())
            .map(str::to_string);

        match text {
            Some(text) => {
                self.pos += 1;
                Some(text)
            }

            None => {
                self.expect(expected.expectation());
                None
            }
        }
    }

    /// Run `f`, restoring the cursor if it fails.
    fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.pos;
        let result = f(self);

        if result.is_none() {
            self.pos = start;
        }

        result
    }

    /// Try each alternative in order and return the first success.
    fn first_of<T>(&mut self, alternatives: &[fn(&mut Self) -> Option<T>]) -> Option<T> {
        alternatives
            .iter()
            .find_map(|alternative| self.attempt(alternative))
    }

    /// Parse `item {"," item}`. A comma not followed by an item is left
    /// unconsumed.
    fn delimited<T>(&mut self, item: fn(&mut Self) -> Option<T>) -> Option<Vec<T>> {
        let mut items = vec![item(self)?];

        while let Some(next) = self.attempt(|this| {
            this.consume(TokenType::Comma)?;
            item(this)
        }) {
            items.push(next);
        }

        Some(items)
    }
}

trait Matcher {
    fn matches(&self, token: &TokenType) -> bool;
}

impl Matcher for TokenType {
    fn matches(&self, token: &TokenType) -> bool {
        match (self, token) {
            (TokenType::Name(_), TokenType::Name(_)) => true,
            (TokenType::Keyword(_), TokenType::Keyword(_)) => true,
            (TokenType::Integer(_), TokenType::Integer(_)) => true,
            (TokenType::String(_), TokenType::String(_)) => true,
            (TokenType::Bytes(_), TokenType::Bytes(_)) => true,

            (a, b) => a == b,
        }
    }
}
