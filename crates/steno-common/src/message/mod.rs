//! Diagnostics for the user. Every stage reports its failures through a
//! [`MessageAdder`], which takes care of attaching the right file and span to
//! a [`codespan_reporting`] diagnostic. The stage specific messages live in
//! the submodules, each with its own stable error codes.

mod convert;
mod parse;
mod render;

use codespan_reporting::diagnostic::Diagnostic;

use crate::source::Span;

/// The id of an input expression in a `codespan_reporting` file database.
pub type File = usize;

#[derive(Debug, Default)]
pub struct Messages {
    pub msgs: Vec<Diagnostic<File>>,
}

impl Messages {
    pub fn new() -> Self {
        Self { msgs: Vec::new() }
    }

    #[must_use]
    pub fn at(&mut self, file: File, span: Span) -> MessageAdder {
        MessageAdder {
            msgs: self,
            file,
            at: span,
        }
    }

    pub fn merge(&mut self, other: Messages) {
        self.msgs.extend(other.msgs);
    }

    pub fn is_empty(&self) -> bool {
        self.msgs.is_empty()
    }
}

#[derive(Debug)]
pub struct MessageAdder<'a> {
    msgs: &'a mut Messages,
    file: File,
    at: Span,
}

impl<'a> MessageAdder<'a> {
    fn add(&mut self, diag: Diagnostic<File>) {
        self.msgs.msgs.push(diag);
    }
}
