//! Token model for parenthesized expressions
//!
//! ```text
//!     The parser works over a closed set of three token kinds:
//!
//!     Bracket:
//!         A literal `(` or `)` marker. Markers are pushed while scanning and absorbed into a
//!         group when its closing bracket is reduced. An unmatched open marker may stay on
//!         the working stack and is then rendered as-is.
//!
//!     Atom:
//!         A run of characters between delimiters. The text may be empty when two delimiters
//!         are adjacent (`(a  b)` holds an empty atom between `a` and `b`).
//!
//!     Group:
//!         One fully closed `( ... )` expression. Children are kept in source order and
//!         include both bracket markers as their first and last members.
//!
//! Rendering
//!
//!     Every token renders to text. Groups render their children front to back, appending
//!     the `", "` separator after each atom. A close marker drops a trailing separator before
//!     writing `)`. Nested groups are not followed by a separator of their own: the space that
//!     delimits them in the source produces an empty atom, and that atom carries the separator.
//! ```

use serde::{Deserialize, Serialize};

/// Separator written after every atom inside a group.
pub const SEPARATOR: &str = ", ";

/// Opening or closing bracket marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bracket {
    Open,
    Close,
}

impl Bracket {
    pub fn as_str(self) -> &'static str {
        match self {
            Bracket::Open => "(",
            Bracket::Close => ")",
        }
    }
}

/// A fully reduced `( ... )` expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    children: Vec<Token>,
}

impl Group {
    /// Build a group from tokens in pop order (close marker first, open marker last).
    ///
    /// The children are reversed once here so the group holds them in source order.
    pub fn from_popped(mut popped: Vec<Token>) -> Self {
        popped.reverse();
        Group { children: popped }
    }

    /// Children in source order, bracket markers included
    pub fn children(&self) -> &[Token] {
        &self.children
    }

    /// Children between the two bracket markers
    pub fn contents(&self) -> &[Token] {
        let children = self.children.as_slice();
        let start = usize::from(matches!(children.first(), Some(Token::Bracket(Bracket::Open))));
        let end = children.len()
            - usize::from(matches!(children.last(), Some(Token::Bracket(Bracket::Close))));
        &children[start..end.max(start)]
    }

    /// Render into `out`, stopping once it holds at least `limit` bytes.
    ///
    /// Nesting is walked with an explicit stack of child iterators, so arbitrarily deep
    /// groups render without recursion. Output already written is final except for a
    /// trailing separator, which a later close marker may still drop.
    fn render_bounded(&self, out: &mut String, limit: usize) {
        let mut frames = vec![self.children.iter()];
        while let Some(frame) = frames.last_mut() {
            if out.len() >= limit {
                return;
            }
            let Some(child) = frame.next() else {
                frames.pop();
                continue;
            };
            match child {
                Token::Atom(text) => {
                    out.push_str(text);
                    out.push_str(SEPARATOR);
                }
                Token::Group(group) => frames.push(group.children.iter()),
                Token::Bracket(Bracket::Close) => {
                    if out.ends_with(SEPARATOR) {
                        out.truncate(out.len() - SEPARATOR.len());
                    }
                    out.push_str(Bracket::Close.as_str());
                }
                Token::Bracket(Bracket::Open) => out.push_str(Bracket::Open.as_str()),
            }
        }
    }
}

// Deeply nested groups would otherwise be dropped recursively, one stack frame per level.
impl Drop for Group {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(token) = pending.pop() {
            if let Token::Group(mut group) = token {
                pending.append(&mut group.children);
            }
        }
    }
}

/// A token on the parser's working stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    Bracket(Bracket),
    Atom(String),
    Group(Group),
}

impl Token {
    pub fn atom(text: impl Into<String>) -> Self {
        Token::Atom(text.into())
    }

    pub fn is_open_bracket(&self) -> bool {
        matches!(self, Token::Bracket(Bracket::Open))
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Token::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Render this token to text
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Render into an existing buffer.
    ///
    /// Nested groups write into the same buffer, so rendering stays linear in the size of
    /// the token tree regardless of nesting depth.
    pub fn render_into(&self, out: &mut String) {
        self.render_into_bounded(out, usize::MAX);
    }

    /// Render into `out` until it holds at least `limit` bytes
    ///
    /// Everything but a trailing `", "` separator written before the cut is identical to
    /// the full rendering, so callers that only need a prefix can stop early.
    pub fn render_into_bounded(&self, out: &mut String, limit: usize) {
        match self {
            Token::Bracket(bracket) => out.push_str(bracket.as_str()),
            Token::Atom(text) => out.push_str(text),
            Token::Group(group) => group.render_bounded(out, limit),
        }
    }
}
