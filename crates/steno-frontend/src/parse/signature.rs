//! The parameter list follows the sections of a Python `def`:
//!
//! ```text
//! (a: A, B, /, C, d: D, *e: E, f: F, **g: G) -> R
//!  ^^^^^^^^^^  ^^^^^^^  ^^^^^^  ^^^^  ^^^^^^
//!  positional  mixed    args    keywords  kwargs
//! ```
//!
//! Each section is optional, but they always appear in this order.

use steno_common::elements::{Parameter, Signature, Steno};

use super::Parser;
use crate::lex::TokenType;

/// The parameter sections of a signature, before the return type is known.
#[derive(Debug, Default)]
struct Sections {
    positional: Vec<Parameter>,
    mixed: Vec<Parameter>,
    args: Option<Parameter>,
    keywords: Vec<Parameter>,
    kwargs: Option<Parameter>,
}

impl Sections {
    fn unconstrained() -> Self {
        Self {
            args: Some(Parameter::unnamed(Steno::Any)),
            ..Default::default()
        }
    }

    fn returning(self, returns: Steno) -> Signature {
        Signature {
            positional: self.positional,
            mixed: self.mixed,
            args: self.args,
            keywords: self.keywords,
            kwargs: self.kwargs,
            returns,
        }
    }
}

impl Parser {
    /// ```abnf
    /// signature = "(" parameters ")" "->" type
    /// ```
    pub(super) fn signature(&mut self) -> Option<Steno> {
        self.consume(TokenType::LeftParen)?;
        let sections = self.parameters()?;
        self.consume(TokenType::RightParen)?;
        self.consume(TokenType::Arrow)?;
        let returns = self.parse_type()?;

        Some(sections.returning(returns).into())
    }

    /// ```abnf
    /// parameters = [] / "..." / positional ["," no-posonly] / no-posonly
    /// ```
    fn parameters(&mut self) -> Option<Sections> {
        self.first_of(&[
            |this| {
                if this.peek(TokenType::RightParen) {
                    Some(Sections::default())
                } else {
                    None
                }
            },
            |this| {
                this.consume(TokenType::Dots)?;
                if this.peek(TokenType::RightParen) {
                    Some(Sections::unconstrained())
                } else {
                    this.expect(TokenType::RightParen.expectation());
                    None
                }
            },
            |this| {
                let positional = this.positional()?;
                let rest = this
                    .attempt(|this| {
                        this.consume(TokenType::Comma)?;
                        this.no_posonly()
                    })
                    .unwrap_or_default();

                Some(Sections { positional, ..rest })
            },
            Self::no_posonly,
        ])
    }

    /// ```abnf
    /// positional = parameter *("," parameter) "," "/"
    /// ```
    fn positional(&mut self) -> Option<Vec<Parameter>> {
        let parameters = self.delimited(Self::parameter)?;
        self.consume(TokenType::Comma)?;
        self.consume(TokenType::Slash)?;
        Some(parameters)
    }

    /// ```abnf
    /// no-posonly = mixed ["," starargs] / starargs
    /// mixed = parameter *("," parameter)
    /// ```
    fn no_posonly(&mut self) -> Option<Sections> {
        self.first_of(&[
            |this| {
                let mixed = this.delimited(Self::parameter)?;
                let rest = this
                    .attempt(|this| {
                        this.consume(TokenType::Comma)?;
                        this.starargs()
                    })
                    .unwrap_or_default();

                Some(Sections { mixed, ..rest })
            },
            Self::starargs,
        ])
    }

    /// ```abnf
    /// starargs = "*" [parameter] ["," keywords] ["," kwargs] / kwargs
    /// ```
    fn starargs(&mut self) -> Option<Sections> {
        self.first_of(&[
            |this| {
                this.consume(TokenType::Star)?;
                let args = this.attempt(Self::parameter);

                let keywords = this
                    .attempt(|this| {
                        this.consume(TokenType::Comma)?;
                        this.delimited(Self::keyword)
                    })
                    .unwrap_or_default();

                let kwargs = this.attempt(|this| {
                    this.consume(TokenType::Comma)?;
                    this.kwargs()
                });

                Some(Sections {
                    args,
                    keywords,
                    kwargs,
                    ..Default::default()
                })
            },
            |this| {
                let kwargs = this.kwargs()?;
                Some(Sections {
                    kwargs: Some(kwargs),
                    ..Default::default()
                })
            },
        ])
    }

    /// ```abnf
    /// kwargs = "**" parameter
    /// ```
    fn kwargs(&mut self) -> Option<Parameter> {
        self.consume(TokenType::DoubleStar)?;
        self.parameter()
    }

    /// ```abnf
    /// keyword = NAME ":" type
    /// ```
    fn keyword(&mut self) -> Option<Parameter> {
        let name = self.name()?;
        self.consume(TokenType::Colon)?;
        let base = self.parse_type()?;
        Some(Parameter::named(name, base))
    }

    /// ```abnf
    /// parameter = [NAME ":"] type
    /// ```
    fn parameter(&mut self) -> Option<Parameter> {
        self.attempt(Self::keyword)
            .or_else(|| self.parse_type().map(Parameter::unnamed))
    }
}
