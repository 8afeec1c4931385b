mod error;
mod keywords;
mod lex;
mod parse;

pub use error::GrammarError;
pub use keywords::is_keyword;

use log::{debug, trace};
use steno_common::elements::Steno;

use parse::Parser;

/// Parse a single expression in steno notation. The whole of `text` must be
/// consumed; trailing input is an error.
pub fn parse(text: &str) -> Result<Steno, GrammarError> {
    debug!("parsing `{text}`");

    let tokens = lex::lex(text)?;
    let mut parser = Parser::new(tokens, text.len());
    let tree = parser.parse_all()?;

    trace!("parsed {tree:?}");
    Ok(tree)
}
