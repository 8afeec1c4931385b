use codespan_reporting::diagnostic::{Diagnostic, Label};

use super::MessageAdder;

const UNEXPECTED: &str = "EP00";
const INVALID_TOKEN: &str = "EP01";

impl<'a> MessageAdder<'a> {
    pub fn parse_unexpected(&mut self, expected: &[String], found: &str) {
        let labels = vec![Label::primary(self.file, self.at).with_message(format!("found {found}"))];
        let notes = if expected.is_empty() {
            Vec::new()
        } else {
            vec![format!("expected one of: {}", expected.join(", "))]
        };

        self.add(
            Diagnostic::error()
                .with_code(UNEXPECTED)
                .with_message(format!("unexpected {found}"))
                .with_labels(labels)
                .with_notes(notes),
        );
    }

    pub fn parse_invalid_token(&mut self, text: &str) {
        let labels = vec![Label::primary(self.file, self.at)];
        let notes = vec![String::from(
            "names are made of letters only and may not be keywords",
        )];

        self.add(
            Diagnostic::error()
                .with_code(INVALID_TOKEN)
                .with_message(format!("invalid token `{text}`"))
                .with_labels(labels)
                .with_notes(notes),
        );
    }
}
