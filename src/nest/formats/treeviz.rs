//! Treeviz formatter for token trees
//!
//! Treeviz is a one-line-per-node view of the final working stack. Nesting is shown with
//! box-drawing connectors, two columns per level:
//!
//! <prefix><connector><space><icon><space><label>
//!
//! Example for `(a (b) c)`:
//!
//!   └─ ☰ (a, (b), c)
//!     ├─ ⊂ (
//!     ├─ ◦ "a"
//!     ├─ ☰ (b)
//!     │ ├─ ⊂ (
//!     │ ├─ ◦ "b"
//!     │ └─ ⊃ )
//!     ├─ ◦ ""
//!     ├─ ◦ "c"
//!     └─ ⊃ )
//!
//! Icons
//!     Group: ☰
//!     Atom: ◦ (label is the quoted text, so empty atoms show as "")
//!     Open bracket: ⊂
//!     Close bracket: ⊃

use super::registry::{FormatError, Formatter};
use crate::nest::parsing::Expression;
use crate::nest::token::{Bracket, Token, SEPARATOR};
use std::iter::Peekable;
use std::slice::Iter;

const MAX_LABEL_CHARS: usize = 30;

// Enough bytes for MAX_LABEL_CHARS + 1 chars of any width, plus one trailing separator
const GROUP_LABEL_BYTES: usize = (MAX_LABEL_CHARS + 1) * 4 + SEPARATOR.len();

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn icon_and_label(token: &Token) -> (&'static str, String) {
    match token {
        Token::Bracket(Bracket::Open) => ("⊂", "(".to_string()),
        Token::Bracket(Bracket::Close) => ("⊃", ")".to_string()),
        Token::Atom(text) => ("◦", format!("{:?}", truncate(text, MAX_LABEL_CHARS))),
        Token::Group(_) => {
            // Only the head of the rendering is shown, so stop rendering once it is long enough
            let mut label = String::new();
            token.render_into_bounded(&mut label, GROUP_LABEL_BYTES);
            ("☰", truncate(&label, MAX_LABEL_CHARS))
        }
    }
}

fn format_line(token: &Token, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    let (icon, label) = icon_and_label(token);
    output.push_str(&format!("{}{} {} {}\n", prefix, connector, icon, label));
}

/// Render the final stack (bottom first) as a treeviz string
///
/// Groups are descended with an explicit stack of sibling iterators, each paired with the
/// prefix its lines are drawn with.
pub fn to_treeviz_str(expression: &Expression) -> String {
    let mut output = String::new();
    let mut frames: Vec<(Peekable<Iter<Token>>, String)> =
        vec![(expression.stack().iter().peekable(), String::new())];

    while let Some((siblings, prefix)) = frames.last_mut() {
        let Some(token) = siblings.next() else {
            frames.pop();
            continue;
        };
        let is_last = siblings.peek().is_none();
        format_line(token, prefix, is_last, &mut output);

        if let Token::Group(group) = token {
            let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
            frames.push((group.children().iter().peekable(), child_prefix));
        }
    }
    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, expression: &Expression) -> Result<String, FormatError> {
        Ok(to_treeviz_str(expression))
    }

    fn description(&self) -> &str {
        "One line per token, indented by nesting depth"
    }
}
