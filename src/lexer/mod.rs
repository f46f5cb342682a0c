//! Lexical analysis.
//!
//! The lexer converts a fully materialized source string into nodes on
//! demand, with one-token lookahead. It tracks 1-based line/column, skips
//! whitespace and `#` line comments, and recognises strings, identifiers,
//! keywords, numbers and operator punctuation by consulting the grammar
//! registry's text table.

pub mod lexer;
