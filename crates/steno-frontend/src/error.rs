use steno_common::message::{File, Messages};
use steno_common::source::Span;
use thiserror::Error;

/// The input could not be consumed as a whole by the grammar. There is never
/// a partial result.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GrammarError {
    #[error("invalid token `{text}` at {}", .span.start)]
    InvalidToken { span: Span, text: String },

    #[error("unexpected {found} at {}, expected one of: {}", .span.start, .expected.join(", "))]
    Unexpected {
        span: Span,
        /// The productions that could have continued the parse here, sorted.
        expected: Vec<String>,
        found: String,
    },
}

impl GrammarError {
    /// Where the parse could not continue.
    pub fn span(&self) -> Span {
        match self {
            Self::InvalidToken { span, .. } | Self::Unexpected { span, .. } => *span,
        }
    }

    pub fn report(&self, messages: &mut Messages, file: File) {
        match self {
            Self::InvalidToken { span, text } => messages.at(file, *span).parse_invalid_token(text),
            Self::Unexpected {
                span,
                expected,
                found,
            } => messages.at(file, *span).parse_unexpected(expected, found),
        }
    }
}
