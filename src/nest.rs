//! Main module for nest library functionality
//!
//! Pipeline: [lexing] classifies characters, [parsing] runs the stack scan and reductions
//! over [token]s, [formats] serializes the final stack, and [processor] wires those together
//! under a [config].

pub mod config;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod processor;
pub mod token;

pub use parsing::{normalize, parse, Expression, ParseError, ParseMode, Parser};
pub use token::{Bracket, Group, Token};
