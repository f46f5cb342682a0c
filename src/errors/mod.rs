//! Error types for lexing and parsing.
//!
//! Every failure during a parse is unrecoverable for that source unit and
//! propagates to the caller as a typed value; there is no resynchronization
//! or partial-result salvage. Each error carries the source position it was
//! raised at.

pub mod errors;

#[cfg(test)]
mod tests;
