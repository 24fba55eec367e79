//! Lexer
//!
//! Base tokenization of a single input line using the logos lexer library.
//!
//! The lexer groups characters into delimiter lexemes and maximal text runs. The parser still
//! behaves as if it scanned character by character: a text run only ever extends the pending
//! atom, so grouping the run up front changes nothing about where atoms begin or end. In
//! particular an open bracket does not end the pending atom, which means `a(b` accumulates
//! `ab` across the bracket.

pub mod tokens;

pub use tokens::Lexeme;

use logos::Logos;

/// Tokenize an input line with byte spans
///
/// Every character belongs to exactly one lexeme class, so the lexer never reports errors;
/// any that did occur would be skipped.
pub fn tokenize(source: &str) -> Vec<(Lexeme, logos::Span)> {
    let mut lexer = Lexeme::lexer(source);
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(lexeme) = result {
            lexemes.push((lexeme, lexer.span()));
        }
    }

    lexemes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes_expression() {
        let lexemes = tokenize("(a bc)");
        assert_eq!(
            lexemes,
            vec![
                (Lexeme::OpenParen, 0..1),
                (Lexeme::Text("a".to_string()), 1..2),
                (Lexeme::Space, 2..3),
                (Lexeme::Text("bc".to_string()), 3..5),
                (Lexeme::CloseParen, 5..6),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_multibyte_text_spans() {
        let lexemes = tokenize("é )");
        assert_eq!(lexemes[0], (Lexeme::Text("é".to_string()), 0..2));
        assert_eq!(lexemes[1], (Lexeme::Space, 2..3));
        assert_eq!(lexemes[2], (Lexeme::CloseParen, 3..4));
    }
}
