//! Lexeme definitions for the nest lexer
//!
//! The lexer only distinguishes delimiters from everything else. Only the plain space
//! (U+0020) delimits atoms; tabs and other whitespace are ordinary text characters.
use logos::Logos;

/// Character classes produced by the logos lexer
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Lexeme {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    // One lexeme per space: consecutive spaces each delimit an (empty) atom
    #[token(" ")]
    Space,

    #[regex(r"[^() ]+", |lex| lex.slice().to_string())]
    Text(String),
}
