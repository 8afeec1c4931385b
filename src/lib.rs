//! Translate steno notation, a compact spelling of Python type hints, into
//! the canonical `typing` spelling.
//!
//! ```text
//! ?int                      typing.Optional[int]
//! {str: int or None}        typing.Dict[str, typing.Union[int, None]]
//! (int, /, *_) -> str       rejected, see `ConversionError`
//! ```
//!
//! Each stage lives in its own crate: parsing in `steno-frontend`,
//! normalization in `steno-midend` and rendering in `steno-backend`.


use clap::ValueEnum;
use steno_common::message::{File, Messages};
use steno_common::source::Span;
use thiserror::Error;

pub use steno_backend::{render, RenderError, Renderer};
pub use steno_common::elements;
pub use steno_common::DEFAULT_NAMESPACE;
pub use steno_frontend::{parse, GrammarError};
pub use steno_midend::{normalize, ConversionError, Normalizer};

/// What to print for each expression.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Emit {
    /// The canonical spelling.
    #[default]
    Typing,
    /// The steno spelling of the parsed tree.
    Steno,
    /// The parsed tree itself.
    Tree,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl Error {
    /// Report this failure for `text`, which was added as `file`.
    pub fn report(&self, messages: &mut Messages, file: File, text: &str) {
        let whole = Span::new(0, text.len());

        match self {
            Self::Grammar(error) => error.report(messages, file),
            Self::Conversion(error) => error.report(messages, file, whole),
            Self::Render(error) => error.report(messages, file, whole),
        }
    }
}

/// The whole pipeline, from steno text to the text to emit.
#[derive(Clone, Debug)]
pub struct Translator {
    normalizer: Normalizer,
    renderer: Renderer,
}

impl Translator {
    pub fn new(namespace: &str) -> Self {
        Self {
            normalizer: Normalizer::new(namespace),
            renderer: Renderer::new(namespace),
        }
    }

    pub fn translate(&self, text: &str, emit: Emit) -> Result<String, Error> {
        let tree = parse(text)?;

        Ok(match emit {
            Emit::Typing => {
                let normal = self.normalizer.normalize(&tree)?;
                self.renderer.render(&normal)?
            }
            Emit::Steno => self.renderer.render(&tree)?,
            Emit::Tree => format!("{tree:?}"),
        })
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

/// Translate steno `text` into the canonical spelling in the default namespace.
pub fn translate(text: &str) -> Result<String, Error> {
    Translator::default().translate(text, Emit::Typing)
}
