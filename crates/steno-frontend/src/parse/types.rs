use std::str::FromStr;

use num_bigint::BigInt;
use steno_common::elements::{Identifier, Literal, Shorthand, Steno};

use super::Parser;
use crate::lex::TokenType;

impl Parser {
    /// ```abnf
    /// type = signature / union-type
    /// ```
    ///
    /// Results are memoized by position, since a `(` is first tried as a
    /// signature and then again as a tuple.
    pub fn parse_type(&mut self) -> Option<Steno> {
        let start = self.pos;

        if let Some(result) = self.memo.get(&start) {
            return result.clone().map(|(ty, end)| {
                self.pos = end;
                ty
            });
        }

        let result = self
            .attempt(Self::signature)
            .or_else(|| self.attempt(Self::union_type));

        let entry = result.clone().map(|ty| (ty, self.pos));
        self.memo.insert(start, entry);
        result
    }

    /// ```abnf
    /// union-type = operand *("or" operand)
    /// ```
    ///
    /// A union is only produced if there is at least one `or`. Its members are
    /// operands, never unions themselves, so unions are always flat.
    fn union_type(&mut self) -> Option<Steno> {
        let mut members = vec![self.operand()?];

        while let Some(member) = self.attempt(|this| {
            this.consume(TokenType::Or)?;
            this.operand()
        }) {
            members.push(member);
        }

        if members.len() == 1 {
            members.pop()
        } else {
            Some(Steno::Union(members))
        }
    }

    /// Any type except unions and signatures.
    ///
    /// ```abnf
    /// operand = tuple / list / dict / set / literal / shorthand / any / optional / typing
    /// ```
    fn operand(&mut self) -> Option<Steno> {
        self.first_of(&[
            Self::tuple,
            Self::list,
            Self::dict,
            Self::set,
            Self::literal,
            Self::shorthand,
            Self::any,
            Self::optional,
            Self::typing,
        ])
    }

    /// ```abnf
    /// any = "_"
    /// ```
    fn any(&mut self) -> Option<Steno> {
        self.consume(TokenType::Underscore)?;
        Some(Steno::Any)
    }

    /// ```abnf
    /// optional = "?" !"?" type
    /// ```
    fn optional(&mut self) -> Option<Steno> {
        self.consume(TokenType::Question)?;

        if self.peek(TokenType::Question) {
            self.expect("TYPE other than an optional");
            return None;
        }

        let base = self.parse_type()?;
        Some(Steno::optional(base))
    }

    /// ```abnf
    /// tuple = "(" type *("," type) ["," "..."] ")"
    /// ```
    fn tuple(&mut self) -> Option<Steno> {
        self.consume(TokenType::LeftParen)?;
        let mut elements = self.delimited(Self::parse_type)?;

        if self
            .attempt(|this| {
                this.consume(TokenType::Comma)?;
                this.consume(TokenType::Dots)
            })
            .is_some()
        {
            elements.push(Steno::Dots);
        }

        self.consume(TokenType::RightParen)?;
        Some(Steno::Tuple(elements))
    }

    /// ```abnf
    /// list = "[" type "]"
    /// ```
    fn list(&mut self) -> Option<Steno> {
        self.consume(TokenType::LeftBracket)?;
        let values = self.parse_type()?;
        self.consume(TokenType::RightBracket)?;
        Some(Steno::list(values))
    }

    /// ```abnf
    /// dict = "{" type ":" type "}"
    /// ```
    fn dict(&mut self) -> Option<Steno> {
        self.consume(TokenType::LeftBrace)?;
        let keys = self.parse_type()?;
        self.consume(TokenType::Colon)?;
        let values = self.parse_type()?;
        self.consume(TokenType::RightBrace)?;
        Some(Steno::dict(keys, values))
    }

    /// ```abnf
    /// set = "{" type "}"
    /// ```
    fn set(&mut self) -> Option<Steno> {
        self.consume(TokenType::LeftBrace)?;
        let values = self.parse_type()?;
        self.consume(TokenType::RightBrace)?;
        Some(Steno::set(values))
    }

    /// ```abnf
    /// literal = "True" / "False" / "None" / "Ellipsis" / INTEGER / STRING / BYTES
    /// ```
    fn literal(&mut self) -> Option<Steno> {
        let literal = self.first_of(&[
            |this| this.consume(TokenType::True).map(|_| Literal::Bool(true)),
            |this| this.consume(TokenType::False).map(|_| Literal::Bool(false)),
            |this| this.consume(TokenType::None).map(|_| Literal::None),
            |this| this.consume(TokenType::Ellipsis).map(|_| Literal::Ellipsis),
            |this| {
                let text = this.consume_text(TokenType::Integer(String::new()))?;
                BigInt::from_str(&text).ok().map(Literal::Int)
            },
            |this| {
                this.consume_text(TokenType::String(String::new()))
                    .map(Literal::Str)
            },
            |this| {
                this.consume_text(TokenType::Bytes(String::new()))
                    .map(Literal::Bytes)
            },
        ])?;

        Some(Steno::Literal(literal))
    }

    /// ```abnf
    /// shorthand = ("iter" / "with" / "await" / "async iter" / "async with") type
    /// ```
    fn shorthand(&mut self) -> Option<Steno> {
        let kind = self.first_of(&[
            |this| this.consume(TokenType::Iter).map(|_| Shorthand::Iterable),
            |this| this.consume(TokenType::With).map(|_| Shorthand::Context),
            |this| this.consume(TokenType::Await).map(|_| Shorthand::Awaitable),
            |this| {
                this.consume(TokenType::AsyncIter)
                    .map(|_| Shorthand::AsyncIterable)
            },
            |this| {
                this.consume(TokenType::AsyncWith)
                    .map(|_| Shorthand::AsyncContext)
            },
        ])?;

        let base = self.parse_type()?;
        Some(Steno::shorthand(kind, base))
    }

    /// ```abnf
    /// typing = identifier ["[" parameter *("," parameter) "]"]
    /// parameter = type / "..."
    /// ```
    fn typing(&mut self) -> Option<Steno> {
        let base = self.identifier()?;

        let parameters = self.attempt(|this| {
            this.consume(TokenType::LeftBracket)?;
            let parameters = this.delimited(Self::generic_parameter)?;
            this.consume(TokenType::RightBracket)?;
            Some(parameters)
        });

        Some(match parameters {
            Some(parameters) => Steno::generic(base, parameters),
            None => Steno::Identifier(base),
        })
    }

    fn generic_parameter(&mut self) -> Option<Steno> {
        self.first_of(&[Self::parse_type, |this| {
            this.consume(TokenType::Dots).map(|_| Steno::Dots)
        }])
    }

    /// ```abnf
    /// identifier = NAME *("." NAME)
    /// ```
    fn identifier(&mut self) -> Option<Identifier> {
        let mut segments = vec![self.name()?];

        while let Some(segment) = self.attempt(|this| {
            this.consume(TokenType::Period)?;
            this.name()
        }) {
            segments.push(segment);
        }

        Some(Identifier(segments))
    }

    /// A single word which is not a keyword.
    pub(super) fn name(&mut self) -> Option<String> {
        self.consume_text(TokenType::Name(String::new()))
    }
}
