use codespan_reporting::diagnostic::{Diagnostic, Label};

use super::MessageAdder;

const KEYWORD_PARAMETERS: &str = "EN00";
const TYPED_VARARGS: &str = "EN01";
const MIXED_VARARGS: &str = "EN02";
const NAMED_PARAMETERS: &str = "EN03";
const MALFORMED: &str = "EN04";

impl<'a> MessageAdder<'a> {
    pub fn convert_keyword_parameters(&mut self) {
        let labels = vec![Label::primary(self.file, self.at)];
        let notes = vec![String::from(
            "canonical callables carry no keyword argument information",
        )];

        self.add(
            Diagnostic::error()
                .with_code(KEYWORD_PARAMETERS)
                .with_message("keyword parameters cannot be converted")
                .with_labels(labels)
                .with_notes(notes),
        );
    }

    pub fn convert_typed_varargs(&mut self) {
        let labels = vec![Label::primary(self.file, self.at)];
        let notes = vec![String::from("only `*_` or `...` can be converted")];

        self.add(
            Diagnostic::error()
                .with_code(TYPED_VARARGS)
                .with_message("typed variadic arguments cannot be converted")
                .with_labels(labels)
                .with_notes(notes),
        );
    }

    pub fn convert_mixed_varargs(&mut self) {
        let labels = vec![Label::primary(self.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(MIXED_VARARGS)
                .with_message("explicit and variadic positional arguments cannot be combined")
                .with_labels(labels),
        );
    }

    pub fn convert_named_parameters(&mut self, name: &str) {
        let labels = vec![Label::primary(self.file, self.at)];
        let notes = vec![
            String::from("canonical callables cannot distinguish named parameters"),
            String::from("help: a structural Protocol would be needed, drop the name instead"),
        ];

        self.add(
            Diagnostic::error()
                .with_code(NAMED_PARAMETERS)
                .with_message(format!("named parameter `{name}` cannot be converted"))
                .with_labels(labels)
                .with_notes(notes),
        );
    }

    pub fn convert_malformed(&mut self, shape: &str, reason: &str) {
        let labels = vec![Label::primary(self.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(MALFORMED)
                .with_message(format!("malformed {shape} cannot be converted: {reason}"))
                .with_labels(labels),
        );
    }
}
