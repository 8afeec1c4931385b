//! Words that are never identifiers.

use std::collections::HashSet;

use lazy_static::lazy_static;

/// The keywords of the host language. None of these may be used as a name,
/// even though only a few of them mean anything in steno notation.
const HOST_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// The operator words and literal words of the notation itself.
const NOTATION_KEYWORDS: &[&str] = &[
    "...",
    "or",
    "iter",
    "with",
    "await",
    "async iter",
    "async with",
    "True",
    "False",
    "None",
    "Ellipsis",
];

lazy_static! {
    /// Every reserved word, built once.
    pub static ref KEYWORDS: HashSet<&'static str> = HOST_KEYWORDS
        .iter()
        .chain(NOTATION_KEYWORDS)
        .copied()
        .collect();
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}
