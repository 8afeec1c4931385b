use codespan_reporting::diagnostic::{Diagnostic, Label};

use super::MessageAdder;

const NESTED_UNION: &str = "ER00";
const NESTED_OPTIONAL: &str = "ER01";
const MALFORMED: &str = "ER02";
const UNION_MEMBER: &str = "ER03";

impl<'a> MessageAdder<'a> {
    pub fn render_nested_union(&mut self) {
        let labels = vec![Label::primary(self.file, self.at)];
        let notes = vec![String::from(
            "a union of unions needs a named alias for the inner union",
        )];

        self.add(
            Diagnostic::error()
                .with_code(NESTED_UNION)
                .with_message("a union directly inside a union has no spelling")
                .with_labels(labels)
                .with_notes(notes),
        );
    }

    pub fn render_nested_optional(&mut self) {
        let labels = vec![Label::primary(self.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(NESTED_OPTIONAL)
                .with_message("an optional directly inside an optional has no spelling")
                .with_labels(labels),
        );
    }

    pub fn render_malformed(&mut self, shape: &str, reason: &str) {
        let labels = vec![Label::primary(self.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(MALFORMED)
                .with_message(format!("malformed {shape} cannot be rendered: {reason}"))
                .with_labels(labels),
        );
    }

    pub fn render_union_member(&mut self, shape: &str) {
        let labels = vec![Label::primary(self.file, self.at)];
        let notes = vec![String::from(
            "signatures cannot be union members, and prefix forms like `?a` or `iter a` only as the last one",
        )];

        self.add(
            Diagnostic::error()
                .with_code(UNION_MEMBER)
                .with_message(format!("{shape} cannot be rendered as a union member"))
                .with_labels(labels)
                .with_notes(notes),
        );
    }
}
