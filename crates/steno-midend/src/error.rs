use steno_common::message::{File, Messages};
use steno_common::source::Span;
use thiserror::Error;

/// A tree, or part of it, has no canonical representation.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConversionError {
    #[error("keyword parameters cannot be represented by a canonical callable")]
    KeywordParameters,

    #[error("typed variadic arguments cannot be represented by a canonical callable")]
    TypedVarargs,

    #[error("a canonical callable cannot combine explicit and variadic positional arguments")]
    MixedVarargs,

    #[error("named parameter `{name}` cannot be represented by a canonical callable, a Protocol would be needed")]
    NamedParameters { name: String },

    #[error("malformed {shape} cannot be converted: {reason}")]
    Malformed {
        shape: &'static str,
        reason: &'static str,
    },
}

impl ConversionError {
    /// Report this failure for the expression spanning `span` in `file`. The
    /// trees carry no spans of their own, so the whole expression is blamed.
    pub fn report(&self, messages: &mut Messages, file: File, span: Span) {
        let mut at = messages.at(file, span);

        match self {
            Self::KeywordParameters => at.convert_keyword_parameters(),
            Self::TypedVarargs => at.convert_typed_varargs(),
            Self::MixedVarargs => at.convert_mixed_varargs(),
            Self::NamedParameters { name } => at.convert_named_parameters(name),
            Self::Malformed { shape, reason } => at.convert_malformed(shape, reason),
        }
    }
}
