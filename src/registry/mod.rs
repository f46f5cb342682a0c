//! The grammar registry: a write-once, read-many symbol table.
//!
//! Every grammar symbol maps to a rule holding a binding power and up to
//! three role-specific handlers:
//!
//! - prefix (null denotation): the symbol starts an expression
//! - infix (left denotation): the symbol follows a completed left operand
//! - statement: the symbol starts a full statement
//!
//! The table is populated once before any lexer or parser is created and is
//! only read afterwards, so it can be shared between concurrent parses.
//! [`grammar::default_grammar`] builds the full default language.

pub mod grammar;
pub mod registry;
