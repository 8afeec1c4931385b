//! The steno tree shared by the parser, the normalizer and the renderer.
//!
//! Every element is a value describing *notation*, not a type: for instance
//! `Identifier::dotted("typing.List")` is the name `typing.List`, not the type
//! it refers to. Nodes are built once and never mutated; the passes always
//! produce new trees, and two trees are equal exactly when their shapes and
//! contents match.

use std::fmt;

use num_bigint::BigInt;

/// A node in the steno tree.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Steno {
    /// The literal `...` placeholder, as in `(int, ...)` or `Callable[..., R]`.
    /// Not to be confused with the `Ellipsis` literal value.
    Dots,

    /// A qualified name such as `typing.Tuple`.
    Identifier(Identifier),

    /// A subscripted name such as `List[int]`.
    Generic {
        base: Identifier,
        parameters: Vec<Steno>,
    },

    /// The wildcard type, written `_`.
    Any,

    /// `?base`
    Optional(Box<Steno>),

    /// `a or b or c`
    Union(Vec<Steno>),

    /// `(a, b)` or `(a, ...)`. Only the last element may be [`Steno::Dots`].
    Tuple(Vec<Steno>),

    /// `[values]`
    List(Box<Steno>),

    /// `{keys: values}`
    Dict { keys: Box<Steno>, values: Box<Steno> },

    /// `{values}`
    Set(Box<Steno>),

    /// A literal value, not a type.
    Literal(Literal),

    /// One of the keyword wrappers such as `iter base` or `async with base`.
    Shorthand(Shorthand, Box<Steno>),

    /// A full call signature, `(a: A, /, b: B, *c: C, d: D, **e: E) -> R`.
    Signature(Box<Signature>),

    /// The name-erased form of a signature, only produced by normalization.
    Callable {
        parameters: CallableParameters,
        returns: Box<Steno>,
    },
}

impl Steno {
    pub fn name(name: &str) -> Self {
        Self::Identifier(Identifier::dotted(name))
    }

    pub fn generic(base: Identifier, parameters: Vec<Steno>) -> Self {
        Self::Generic { base, parameters }
    }

    pub fn optional(base: Steno) -> Self {
        Self::Optional(Box::new(base))
    }

    pub fn list(values: Steno) -> Self {
        Self::List(Box::new(values))
    }

    pub fn set(values: Steno) -> Self {
        Self::Set(Box::new(values))
    }

    pub fn dict(keys: Steno, values: Steno) -> Self {
        Self::Dict {
            keys: Box::new(keys),
            values: Box::new(values),
        }
    }

    pub fn shorthand(kind: Shorthand, base: Steno) -> Self {
        Self::Shorthand(kind, Box::new(base))
    }

    pub fn callable(parameters: CallableParameters, returns: Steno) -> Self {
        Self::Callable {
            parameters,
            returns: Box::new(returns),
        }
    }

    /// A short human readable name of the variant, for messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Dots => "dots",
            Self::Identifier(_) => "identifier",
            Self::Generic { .. } => "generic",
            Self::Any => "any",
            Self::Optional(_) => "optional",
            Self::Union(_) => "union",
            Self::Tuple(_) => "tuple",
            Self::List(_) => "list",
            Self::Dict { .. } => "dict",
            Self::Set(_) => "set",
            Self::Literal(_) => "literal",
            Self::Shorthand(kind, _) => kind.shape(),
            Self::Signature(_) => "signature",
            Self::Callable { .. } => "callable",
        }
    }

    /// Check the invariants local to this node (children are not visited).
    /// Returns a description of the first violated invariant, if any.
    pub fn malformation(&self) -> Option<&'static str> {
        match self {
            Self::Dots | Self::Any | Self::Literal(_) => None,

            Self::Identifier(identifier) => identifier.malformation(),

            Self::Generic { base, parameters } => base.malformation().or_else(|| {
                parameters
                    .is_empty()
                    .then_some("a generic needs at least one parameter")
            }),

            Self::Union(members) => {
                if members.len() < 2 {
                    Some("a union needs at least two members")
                } else if members.iter().any(Self::is_dots) {
                    Some("`...` cannot be a union member")
                } else {
                    None
                }
            }

            Self::Tuple(elements) => match elements.split_last() {
                None => Some("a tuple needs at least one element"),
                Some((_, init)) if init.iter().any(Self::is_dots) => {
                    Some("`...` may only be the last element of a tuple")
                }
                Some((Self::Dots, [])) => Some("`...` needs a preceding tuple element"),
                Some(_) => None,
            },

            Self::Optional(base) | Self::List(base) | Self::Set(base) | Self::Shorthand(_, base) => {
                base.is_dots().then_some("`...` cannot be wrapped")
            }

            Self::Dict { keys, values } => (keys.is_dots() || values.is_dots())
                .then_some("`...` cannot be a dict key or value"),

            Self::Signature(signature) => signature.malformation(),

            Self::Callable {
                parameters,
                returns,
            } => {
                if returns.is_dots() {
                    Some("`...` cannot be a return type")
                } else if let CallableParameters::Fixed(parameters) = parameters {
                    parameters
                        .iter()
                        .any(Self::is_dots)
                        .then_some("`...` cannot be a fixed callable parameter")
                } else {
                    None
                }
            }
        }
    }

    pub fn is_dots(&self) -> bool {
        matches!(self, Self::Dots)
    }
}

impl From<Identifier> for Steno {
    fn from(identifier: Identifier) -> Self {
        Self::Identifier(identifier)
    }
}

impl From<Literal> for Steno {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Signature> for Steno {
    fn from(signature: Signature) -> Self {
        Self::Signature(Box::new(signature))
    }
}

/// A qualified name, with the segments ordered outer to inner.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Identifier(pub Vec<String>);

impl Identifier {
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Split a dotted path like `typing.Any` into an identifier.
    pub fn dotted(path: &str) -> Self {
        Self::new(path.split('.'))
    }

    /// Extend this identifier by one more segment.
    pub fn member(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.into());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    fn malformation(&self) -> Option<&'static str> {
        if self.0.is_empty() {
            Some("an identifier needs at least one segment")
        } else if self.0.iter().any(String::is_empty) {
            Some("identifier segments cannot be empty")
        } else {
            None
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// A literal value. String and bytes literals keep their source text verbatim,
/// quotes, escapes and `b` prefix included.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Literal {
    Bool(bool),
    None,
    Ellipsis,
    Int(BigInt),
    Str(String),
    Bytes(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::None => write!(f, "None"),
            Self::Ellipsis => write!(f, "Ellipsis"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Str(raw) | Self::Bytes(raw) => write!(f, "{raw}"),
        }
    }
}

/// The single-child keyword wrappers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Shorthand {
    /// `iter base`
    Iterable,
    /// `with base`
    Context,
    /// `await base`
    Awaitable,
    /// `async iter base`
    AsyncIterable,
    /// `async with base`
    AsyncContext,
}

impl Shorthand {
    pub const ALL: [Self; 5] = [
        Self::Iterable,
        Self::Context,
        Self::Awaitable,
        Self::AsyncIterable,
        Self::AsyncContext,
    ];

    /// The source notation keyword introducing this wrapper.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Iterable => "iter",
            Self::Context => "with",
            Self::Awaitable => "await",
            Self::AsyncIterable => "async iter",
            Self::AsyncContext => "async with",
        }
    }

    /// The member name of the canonical namespace this wrapper maps to.
    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::Iterable => "Iterable",
            Self::Context => "ContextManager",
            Self::Awaitable => "Awaitable",
            Self::AsyncIterable => "AsyncIterable",
            Self::AsyncContext => "AsyncContextManager",
        }
    }

    fn shape(self) -> &'static str {
        match self {
            Self::Iterable => "iterable",
            Self::Context => "context",
            Self::Awaitable => "awaitable",
            Self::AsyncIterable => "async iterable",
            Self::AsyncContext => "async context",
        }
    }
}

/// A single parameter of a signature, `name: base` or just `base`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Parameter {
    pub name: Option<String>,
    pub base: Steno,
}

impl Parameter {
    pub fn named(name: impl Into<String>, base: Steno) -> Self {
        Self {
            name: Some(name.into()),
            base,
        }
    }

    pub fn unnamed(base: Steno) -> Self {
        Self { name: None, base }
    }
}

/// A call signature. Any of the parameter sections may be empty.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Signature {
    /// Positional-only parameters, before the `/`.
    pub positional: Vec<Parameter>,
    /// Positional-or-keyword parameters.
    pub mixed: Vec<Parameter>,
    /// The variadic positional parameter, `*args`.
    pub args: Option<Parameter>,
    /// Keyword-only parameters, after the star section.
    pub keywords: Vec<Parameter>,
    /// The variadic keyword parameter, `**kwargs`.
    pub kwargs: Option<Parameter>,
    pub returns: Steno,
}

impl Signature {
    /// A signature without any parameters.
    pub fn new(returns: Steno) -> Self {
        Self {
            positional: Vec::new(),
            mixed: Vec::new(),
            args: None,
            keywords: Vec::new(),
            kwargs: None,
            returns,
        }
    }

    /// The signature accepting any arguments, written `(...) -> R` or `(*_) -> R`.
    pub fn unconstrained(returns: Steno) -> Self {
        Self {
            args: Some(Parameter::unnamed(Steno::Any)),
            ..Self::new(returns)
        }
    }

    /// Whether this is the `(...) -> R` form.
    pub fn is_unconstrained(&self) -> bool {
        self.positional.is_empty()
            && self.mixed.is_empty()
            && self.keywords.is_empty()
            && self.kwargs.is_none()
            && matches!(&self.args, Some(Parameter { name: None, base: Steno::Any }))
    }

    /// Every parameter in declaration order.
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.positional
            .iter()
            .chain(&self.mixed)
            .chain(&self.args)
            .chain(&self.keywords)
            .chain(&self.kwargs)
    }

    fn malformation(&self) -> Option<&'static str> {
        if self.returns.is_dots() {
            Some("`...` cannot be a return type")
        } else if self.parameters().any(|parameter| parameter.base.is_dots()) {
            Some("`...` cannot be a parameter type")
        } else if self.keywords.iter().any(|parameter| parameter.name.is_none()) {
            Some("keyword-only parameters need a name")
        } else if self
            .parameters()
            .any(|parameter| matches!(&parameter.name, Some(name) if name.is_empty()))
        {
            Some("parameter names cannot be empty")
        } else {
            None
        }
    }
}

/// The parameters of a [`Steno::Callable`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum CallableParameters {
    /// Any arguments at all, spelled `...`.
    Any,
    /// Exactly these positional argument types.
    Fixed(Vec<Steno>),
}
