use steno_common::message::{File, Messages};
use steno_common::source::Span;
use thiserror::Error;

/// A tree which has no spelling that would parse back into the same tree.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RenderError {
    #[error("a union directly inside a union cannot be rendered")]
    NestedUnion,

    #[error("an optional directly inside an optional cannot be rendered")]
    NestedOptional,

    #[error("{shape} cannot be rendered as a union member")]
    UnionMember { shape: &'static str },

    #[error("malformed {shape} cannot be rendered: {reason}")]
    Malformed {
        shape: &'static str,
        reason: &'static str,
    },
}

impl RenderError {
    /// Report this failure for the expression spanning `span` in `file`.
    pub fn report(&self, messages: &mut Messages, file: File, span: Span) {
        let mut at = messages.at(file, span);

        match self {
            Self::NestedUnion => at.render_nested_union(),
            Self::NestedOptional => at.render_nested_optional(),
            Self::UnionMember { shape } => at.render_union_member(shape),
            Self::Malformed { shape, reason } => at.render_malformed(shape, reason),
        }
    }
}
