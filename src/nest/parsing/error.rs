//! Parse errors
//!
//! Only strict mode produces these. Legacy mode reproduces the silent behaviors instead.

use std::fmt;

/// The kind of malformation strict mode detected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformation {
    /// A `)` with no open bracket left to close
    UnmatchedClose { offset: usize },
    /// A `(` still open at end of input
    UnclosedOpen { offset: usize },
    /// Text after the last delimiter, which would never be flushed into an atom
    TrailingText { offset: usize, text: String },
}

impl fmt::Display for Malformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformation::UnmatchedClose { offset } => {
                write!(f, "unmatched ')' at offset {}", offset)
            }
            Malformation::UnclosedOpen { offset } => {
                write!(f, "unclosed '(' at offset {}", offset)
            }
            Malformation::TrailingText { offset, text } => {
                write!(f, "trailing text '{}' at offset {} is never delimited", text, offset)
            }
        }
    }
}

/// Errors during parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    MalformedExpression(Malformation),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedExpression(kind) => write!(f, "Malformed expression: {}", kind),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<Malformation> for ParseError {
    fn from(kind: Malformation) -> Self {
        ParseError::MalformedExpression(kind)
    }
}
