//! Incremental stack parser
//!
//! ```text
//!     The parser makes a single left-to-right pass over the lexemes of one input line. It
//!     keeps a single working stack of tokens and a pending text buffer for the atom currently
//!     being read. There is no pre-built tree: every `)` immediately reduces the tokens above
//!     the matching `(` into one group token, which replaces them on the stack.
//!
//! Scan Rules
//!
//!     `(`     push an open marker. The pending atom is not flushed.
//!     `)`     push the pending atom (even if empty), push a close marker, then reduce.
//!     space   push the pending atom (even if empty).
//!     other   append to the pending atom.
//!
//!     The pending atom is not flushed at end of input, so text after the last delimiter is
//!     dropped. An unmatched `)` drains the whole stack looking for an open marker, discarding
//!     everything built so far. An unmatched `(` stays on the stack.
//!
//! Modes
//!
//!     Legacy mode keeps all of the above silent. Strict mode reports the first of these
//!     malformations as a [ParseError] instead.
//!
//! Output
//!
//!     The result of a parse is an [Expression] holding the final stack. Its rendered form is
//!     the rendering of the top-of-stack token, or the empty string when the stack is empty.
//! ```

pub mod error;

pub use error::{Malformation, ParseError};

use crate::nest::lexing::{tokenize, Lexeme};
use crate::nest::token::{Bracket, Group, Token};
use serde::{Deserialize, Serialize};

/// How malformed input is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Silent recovery: drained stacks, stray markers and dropped trailing text
    #[default]
    Legacy,
    /// Report malformed input as an error
    Strict,
}

impl std::str::FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(ParseMode::Legacy),
            "strict" => Ok(ParseMode::Strict),
            other => Err(format!("Unknown parse mode '{}'", other)),
        }
    }
}

/// The final working stack of one parse
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expression {
    stack: Vec<Token>,
}

impl Expression {
    /// The top-of-stack token, if any
    pub fn top(&self) -> Option<&Token> {
        self.stack.last()
    }

    /// The whole final stack, bottom first
    pub fn stack(&self) -> &[Token] {
        &self.stack
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Render the top-of-stack token, or the empty string
    pub fn render(&self) -> String {
        self.top().map(Token::render).unwrap_or_default()
    }
}

/// Stack parser for a single line
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    mode: ParseMode,
}

impl Parser {
    /// Create a legacy-mode parser
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: ParseMode) -> Self {
        Parser { mode }
    }

    pub fn strict() -> Self {
        Self::with_mode(ParseMode::Strict)
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse one already-trimmed line
    pub fn parse(&self, source: &str) -> Result<Expression, ParseError> {
        let (expression, malformation) = scan(source);
        match (self.mode, malformation) {
            (ParseMode::Strict, Some(kind)) => Err(ParseError::MalformedExpression(kind)),
            _ => Ok(expression),
        }
    }
}

/// Parse in legacy mode, which never fails
pub fn parse(source: &str) -> Expression {
    scan(source).0
}

/// Parse in legacy mode and render the result
pub fn normalize(source: &str) -> String {
    parse(source).render()
}

/// Run the scan, returning the final stack and the first malformation seen
fn scan(source: &str) -> (Expression, Option<Malformation>) {
    let mut state = ScanState::default();
    for (lexeme, span) in tokenize(source) {
        state.feed(lexeme, span.start);
    }
    state.finish()
}

#[derive(Debug, Default)]
struct ScanState {
    stack: Vec<Token>,
    pending: String,
    pending_start: usize,
    // Offsets of the open markers currently on the stack
    open_offsets: Vec<usize>,
    malformation: Option<Malformation>,
}

impl ScanState {
    fn feed(&mut self, lexeme: Lexeme, offset: usize) {
        match lexeme {
            Lexeme::OpenParen => {
                self.stack.push(Token::Bracket(Bracket::Open));
                self.open_offsets.push(offset);
            }
            Lexeme::CloseParen => {
                self.flush();
                self.stack.push(Token::Bracket(Bracket::Close));
                if !self.reduce() {
                    self.record(Malformation::UnmatchedClose { offset });
                }
            }
            Lexeme::Space => self.flush(),
            Lexeme::Text(text) => {
                if self.pending.is_empty() {
                    self.pending_start = offset;
                }
                self.pending.push_str(&text);
            }
        }
    }

    /// Push the pending atom, even when it is empty
    fn flush(&mut self) {
        let text = std::mem::take(&mut self.pending);
        self.stack.push(Token::Atom(text));
    }

    /// Collapse everything down to the nearest open marker into one group.
    ///
    /// Returns false when the stack ran dry without finding an open marker; the popped
    /// tokens are discarded in that case.
    fn reduce(&mut self) -> bool {
        let mut popped = Vec::new();
        while let Some(token) = self.stack.pop() {
            let is_open = token.is_open_bracket();
            popped.push(token);
            if is_open {
                self.open_offsets.pop();
                self.stack.push(Token::Group(Group::from_popped(popped)));
                return true;
            }
        }
        false
    }

    fn record(&mut self, kind: Malformation) {
        if self.malformation.is_none() {
            self.malformation = Some(kind);
        }
    }

    fn finish(mut self) -> (Expression, Option<Malformation>) {
        if let Some(&offset) = self.open_offsets.first() {
            self.record(Malformation::UnclosedOpen { offset });
        }
        if !self.pending.is_empty() {
            let kind = Malformation::TrailingText {
                offset: self.pending_start,
                text: std::mem::take(&mut self.pending),
            };
            self.record(kind);
        }
        (Expression { stack: self.stack }, self.malformation)
    }
}
