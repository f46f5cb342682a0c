#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod errors;
pub mod lexer;
pub mod node;
pub mod parser;
pub mod registry;

use crate::{
    errors::errors::Error, lexer::lexer::Lexer, node::node::Node, parser::parser::Parser,
    registry::registry::Registry,
};

/// 1-based source location. Column resets to 1 on every newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

impl Position {
    pub fn new(line: u32, col: u32) -> Self {
        Position { line, col }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Parses a complete source unit into its ordered top-level statement trees.
///
/// The registry must be fully populated before this is called; it is only
/// read during the parse and can be shared between source units.
pub fn parse(registry: &Registry, source: &str) -> Result<Vec<Node>, Error> {
    let lexer = Lexer::new(registry, source);
    let mut parser = Parser::new(lexer);
    parser.statements()
}
