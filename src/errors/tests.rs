//! Unit tests for error construction and display.

use crate::errors::errors::{Error, ErrorImpl};
use crate::node::node::Symbol;
use crate::Position;

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnterminatedString, Position::new(3, 7));

    assert_eq!(error.position(), Position::new(3, 7));
    assert_eq!(error.to_string(), "unterminated string literal at 3:7");
}

#[test]
fn test_invalid_character_display() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter { character: '~' },
        Position::new(1, 4),
    );

    assert_eq!(error.to_string(), "invalid character: '~' at 1:4");
}

#[test]
fn test_unexpected_symbol_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedSymbol {
            expected: Symbol::Semicolon,
            actual: Symbol::EOF,
        },
        Position::new(2, 1),
    );

    assert_eq!(error.to_string(), "expected ;, found (EOF) at 2:1");
}

#[test]
fn test_no_prefix_rule_kind() {
    let error = Error::new(
        ErrorImpl::NoPrefixRule {
            symbol: Symbol::Semicolon,
            value: ";".to_string(),
        },
        Position::new(1, 1),
    );

    assert!(matches!(error.kind(), ErrorImpl::NoPrefixRule { .. }));
}

#[test]
fn test_invalid_call_target_display() {
    let error = Error::new(
        ErrorImpl::InvalidCallTarget {
            value: "1".to_string(),
        },
        Position::new(1, 1),
    );

    assert_eq!(
        error.to_string(),
        "bad function call left operand: \"1\" at 1:1"
    );
}
