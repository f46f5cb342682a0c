//! The Pratt parsing engine.
//!
//! [`parser::Parser`] drives the single expression loop and the statement
//! dispatcher; every language construct is realized through the handlers a
//! node snapshotted from the registry, never through construct-specific
//! productions in the engine itself.
//!
//! - [`expr`] holds the custom prefix/infix handlers (grouping, array,
//!   call, subscript, conditional, lambda)
//! - [`stmt`] holds the statement handlers (if, while, block, break,
//!   continue, return)

pub mod expr;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
