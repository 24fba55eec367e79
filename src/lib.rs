//! # nest
//!
//! Reads one line of parenthesized, space-delimited text, collapses it into nested groups with
//! a single stack scan, and renders it back in a normalized comma-separated form:
//!
//! ```text
//! (a (b c) d)   ->   (a, (b, c), d)
//! ```
//!
//! See [nest::parsing] for the scan rules and the behavior on malformed input.

pub mod nest;
