use std::fmt::Display;

use thiserror::Error;

use crate::{node::node::Symbol, Position};

/// An aborting lex or parse failure, tagged with the position it occurred at.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(internal_error: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid character: {character:?}")]
    InvalidCharacter { character: char },
    #[error("symbol {symbol} ({value:?}) cannot start an expression")]
    NoPrefixRule { symbol: Symbol, value: String },
    #[error("symbol {symbol} ({value:?}) cannot continue an expression")]
    NoInfixRule { symbol: Symbol, value: String },
    #[error("expected {expected}, found {actual}")]
    UnexpectedSymbol { expected: Symbol, actual: Symbol },
    #[error("bad function call left operand: {value:?}")]
    InvalidCallTarget { value: String },
    #[error("bad array left operand: {value:?}")]
    InvalidSubscriptTarget { value: String },
    #[error("invalid function declaration parameters: {value:?}")]
    InvalidLambdaShape { value: String },
    #[error("expected block start, found {value:?}")]
    MissingBlockStart { value: String },
}
