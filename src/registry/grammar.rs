use crate::node::node::Symbol;
use crate::parser::{
    expr::{
        parse_array_expr, parse_call_expr, parse_conditional_expr, parse_grouping_expr,
        parse_lambda_expr, parse_subscript_expr,
    },
    stmt::{
        parse_block_stmt, parse_if_stmt, parse_loop_control_stmt, parse_return_stmt,
        parse_while_stmt,
    },
};

use super::registry::Registry;

pub const BP_ASSIGNMENT: i32 = 10;
pub const BP_CONDITIONAL: i32 = 20;
pub const BP_LOGICAL: i32 = 25;
pub const BP_RELATIONAL: i32 = 30;
pub const BP_ADDITIVE: i32 = 50;
pub const BP_MULTIPLICATIVE: i32 = 60;
pub const BP_MODULO: i32 = 65;
pub const BP_SUBSCRIPT: i32 = 80;
pub const BP_CALL: i32 = 90;
pub const BP_UNARY: i32 = 100;

/// Builds the registry for the default language. Call this once at startup
/// and share the result with every lexer/parser pair.
pub fn default_grammar() -> Registry {
    let mut registry = Registry::new();

    // Literals
    registry.symbol("(IDENT)", Symbol::Identifier);
    registry.symbol("(NUMBER)", Symbol::Number);
    registry.symbol("(STRING)", Symbol::String);
    registry.symbol("true", Symbol::True);
    registry.symbol("false", Symbol::False);
    registry.symbol("none", Symbol::NoneLit);

    // Terminals matched only by explicit expectation
    registry.consumable(";", Symbol::Semicolon);
    registry.consumable(")", Symbol::CloseParen);
    registry.consumable("]", Symbol::CloseBracket);
    registry.consumable(",", Symbol::Comma);
    registry.consumable("else", Symbol::Else);
    registry.consumable("(EOF)", Symbol::EOF);
    registry.consumable("{", Symbol::OpenCurly);
    registry.consumable("}", Symbol::CloseCurly);

    // Additive and multiplicative
    registry.infix("+", Symbol::Plus, BP_ADDITIVE);
    registry.infix("-", Symbol::Dash, BP_ADDITIVE);
    registry.infix("*", Symbol::Star, BP_MULTIPLICATIVE);
    registry.infix("/", Symbol::Slash, BP_MULTIPLICATIVE);
    registry.infix("mod", Symbol::Mod, BP_MODULO);

    // Relational
    registry.infix("<", Symbol::Less, BP_RELATIONAL);
    registry.infix(">", Symbol::Greater, BP_RELATIONAL);
    registry.infix("<=", Symbol::LessEquals, BP_RELATIONAL);
    registry.infix(">=", Symbol::GreaterEquals, BP_RELATIONAL);
    registry.infix("==", Symbol::Equals, BP_RELATIONAL);

    // Conditional expression, call and subscript postfixes
    registry.infix_led("if", Symbol::If, BP_CONDITIONAL, parse_conditional_expr);
    registry.infix_led("(", Symbol::OpenParen, BP_CALL, parse_call_expr);
    registry.infix_led("[", Symbol::OpenBracket, BP_SUBSCRIPT, parse_subscript_expr);

    // Logical and assignment forms are right-associative
    registry.infix_right("and", Symbol::And, BP_LOGICAL);
    registry.infix_right("or", Symbol::Or, BP_LOGICAL);
    registry.infix_right("=", Symbol::Assignment, BP_ASSIGNMENT);
    registry.infix_right("+=", Symbol::PlusEquals, BP_ASSIGNMENT);
    registry.infix_right("-=", Symbol::MinusEquals, BP_ASSIGNMENT);
    registry.infix_led("->", Symbol::Arrow, BP_ASSIGNMENT, parse_lambda_expr);

    // Unary prefixes
    registry.prefix("-", Symbol::Dash);
    registry.prefix("not", Symbol::Not);

    // Grouping/tuple and array literals
    registry.prefix_nud("(", Symbol::OpenParen, parse_grouping_expr);
    registry.prefix_nud("[", Symbol::OpenBracket, parse_array_expr);

    // Statements
    registry.stmt("if", Symbol::If, parse_if_stmt);
    registry.stmt("while", Symbol::While, parse_while_stmt);
    registry.stmt("{", Symbol::OpenCurly, parse_block_stmt);
    registry.stmt("break", Symbol::Break, parse_loop_control_stmt);
    registry.stmt("continue", Symbol::Continue, parse_loop_control_stmt);
    registry.stmt("return", Symbol::Return, parse_return_stmt);

    registry
}
