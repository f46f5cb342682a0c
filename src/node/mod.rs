//! The unified lexical-token-and-parse-tree-node representation.
//!
//! A [`node::Node`] is produced by the lexer as a token and, once its
//! handlers have run, doubles as a node of the finished tree. It carries:
//!
//! - its symbol identity and literal/semantic value
//! - the 1-based line/column of its first source character
//! - its ordered children
//! - a snapshot of its symbol's grammar rule, fixed at tokenization time

pub mod node;
