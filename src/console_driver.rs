use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use codespan_reporting::term::{self, Config, DisplayStyle};
use steno_common::message::Messages;
use stenotype::Error;

/// Writes diagnostics for failed expressions to stderr.
pub struct ConsoleDriver {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: Config,
}

impl ConsoleDriver {
    pub fn new(rich: bool) -> Self {
        let display_style = if rich {
            DisplayStyle::Rich
        } else {
            DisplayStyle::Short
        };

        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: Config {
                display_style,
                ..Default::default()
            },
        }
    }

    pub fn report(&mut self, expression: &str, error: &Error) -> anyhow::Result<()> {
        let file = self.files.add("<expression>".into(), expression.into());

        let mut messages = Messages::new();
        error.report(&mut messages, file, expression);

        for msg in messages.msgs {
            term::emit(&mut self.writer, &self.config, &self.files, &msg)?;
        }

        Ok(())
    }
}
