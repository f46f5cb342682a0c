//! Unit tests for the parser.
//!
//! Tree shapes are asserted through the s-expression rendering of nodes:
//! leaves print their value, interior nodes print `(value child ...)`.

use crate::errors::errors::{Error, ErrorImpl};
use crate::lexer::lexer::Lexer;
use crate::node::node::{Node, Symbol};
use crate::registry::grammar::default_grammar;
use crate::registry::registry::Registry;
use crate::Position;

use super::parser::Parser;

fn expr(source: &str) -> Node {
    let registry = default_grammar();
    let lexer = Lexer::new(&registry, source);
    let mut parser = Parser::new(lexer);
    parser.expression(0).unwrap()
}

fn sexpr(source: &str) -> String {
    expr(source).to_string()
}

fn parse_err(source: &str) -> Error {
    let registry = default_grammar();
    crate::parse(&registry, source).unwrap_err()
}

#[test]
fn test_precedence() {
    assert_eq!(sexpr("1+2*3"), "(+ 1 (* 2 3))");
    assert_eq!(sexpr("2*3+1"), "(+ (* 2 3) 1)");
    assert_eq!(sexpr("1+2 < 3*4"), "(< (+ 1 2) (* 3 4))");
    assert_eq!(sexpr("a + b mod c * d"), "(+ a (* (mod b c) d))");
}

#[test]
fn test_left_associativity() {
    assert_eq!(sexpr("1-2-3"), "(- (- 1 2) 3)");
    assert_eq!(sexpr("8/4/2"), "(/ (/ 8 4) 2)");
}

#[test]
fn test_right_associativity() {
    assert_eq!(sexpr("a=b=1"), "(= a (= b 1))");
    assert_eq!(sexpr("a and b and c"), "(and a (and b c))");
    assert_eq!(sexpr("a or b and c"), "(or a (and b c))");
    assert_eq!(sexpr("a += b -= c"), "(+= a (-= b c))");
}

#[test]
fn test_grouping_is_transparent() {
    assert_eq!(sexpr("(1)"), sexpr("1"));
    assert_eq!(sexpr("((a))"), "a");
    assert_eq!(sexpr("2*(3+4)"), "(* 2 (+ 3 4))");
}

#[test]
fn test_tuple_literals() {
    assert_eq!(sexpr("()"), "TUPLE");
    assert_eq!(sexpr("(1,)"), "(TUPLE 1)");
    assert_eq!(sexpr("(1,2)"), "(TUPLE 1 2)");
    assert_eq!(sexpr("(1, 2, 3)"), "(TUPLE 1 2 3)");

    let node = expr("(1,2)");
    assert_eq!(node.sym, Symbol::Tuple);
    assert_eq!(node.children.len(), 2);
}

#[test]
fn test_array_literals() {
    assert_eq!(sexpr("[]"), "ARRAY");
    assert_eq!(sexpr("[1]"), "(ARRAY 1)");
    assert_eq!(sexpr("[1, 2+3, \"x\"]"), "(ARRAY 1 (+ 2 3) x)");

    // arrays never collapse to their single element
    let node = expr("[1]");
    assert_eq!(node.sym, Symbol::Array);
    assert_eq!(node.children.len(), 1);
}

#[test]
fn test_call_expressions() {
    assert_eq!(sexpr("f()"), "(( f)");
    assert_eq!(sexpr("f(1, 2)"), "(( f 1 2)");
    assert_eq!(sexpr("f(1)(2)"), "(( (( f 1) 2)");
    assert_eq!(sexpr("f(a[0])"), "(( f ([ a 0))");
    assert_eq!(sexpr("a[0](1)"), "(( ([ a 0) 1)");
    assert_eq!(sexpr("(x -> x)(5)"), "(( (-> x x) 5)");
}

#[test]
fn test_subscript_expressions() {
    assert_eq!(sexpr("a[0]"), "([ a 0)");
    assert_eq!(sexpr("a[0][1]"), "([ ([ a 0) 1)");
    assert_eq!(sexpr("f(1)[0]"), "([ (( f 1) 0)");
    assert_eq!(sexpr("a[i, j]"), "([ a i j)");
}

#[test]
fn test_call_binds_tighter_than_arithmetic() {
    assert_eq!(sexpr("1 + f(2) * 3"), "(+ 1 (* (( f 2) 3))");
}

#[test]
fn test_conditional_expression_child_order() {
    let node = expr("1 if true else 2");
    assert_eq!(node.sym, Symbol::If);
    assert_eq!(node.children.len(), 3);
    // children are [condition, trueBranch, falseBranch]
    assert_eq!(node.children[0].value, "true");
    assert_eq!(node.children[1].value, "1");
    assert_eq!(node.children[2].value, "2");

    assert_eq!(sexpr("1 if true else 2"), "(if true 1 2)");
    assert_eq!(sexpr("a = 1 if b else 2"), "(= a (if b 1 2))");
}

#[test]
fn test_lambda_with_expression_body() {
    assert_eq!(sexpr("x -> x"), "(-> x x)");
    assert_eq!(sexpr("(a, b) -> a + b"), "(-> (TUPLE a b) (+ a b))");
    assert_eq!(sexpr("() -> 1"), "(-> TUPLE 1)");
}

#[test]
fn test_lambda_with_block_body() {
    assert_eq!(sexpr("x -> { return x; }"), "(-> x ({ (return x)))");
}

#[test]
fn test_unary_prefix() {
    assert_eq!(sexpr("-x"), "(- x)");
    assert_eq!(sexpr("-a * b"), "(* (- a) b)");
    assert_eq!(sexpr("not a and b"), "(and (not a) b)");
    assert_eq!(sexpr("1 - -2"), "(- 1 (- 2))");
}

#[test]
fn test_expression_statement_requires_semicolon() {
    let registry = default_grammar();
    let err = crate::parse(&registry, "1+2").unwrap_err();
    assert_eq!(
        *err.kind(),
        ErrorImpl::UnexpectedSymbol {
            expected: Symbol::Semicolon,
            actual: Symbol::EOF,
        }
    );
}

#[test]
fn test_unexpected_symbol_reports_position_before_consumption() {
    let err = parse_err("1 2;");
    assert_eq!(
        *err.kind(),
        ErrorImpl::UnexpectedSymbol {
            expected: Symbol::Semicolon,
            actual: Symbol::Number,
        }
    );
    assert_eq!(err.position(), Position::new(1, 2));
}

#[test]
fn test_no_prefix_rule() {
    let err = parse_err("1 + ;");
    assert!(matches!(
        err.kind(),
        ErrorImpl::NoPrefixRule {
            symbol: Symbol::Semicolon,
            ..
        }
    ));
}

#[test]
fn test_no_infix_rule() {
    // a symbol with binding power but no infix rule is only reachable
    // through a custom registry
    let mut registry = Registry::new();
    registry.symbol("(IDENT)", Symbol::Identifier);
    registry.consumable("(EOF)", Symbol::EOF);
    registry.consumable(";", Symbol::Semicolon);
    registry.register("boom", Symbol::Not, 40, None, None, None);

    let err = crate::parse(&registry, "a boom b;").unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorImpl::NoInfixRule {
            symbol: Symbol::Not,
            ..
        }
    ));
}

#[test]
fn test_invalid_call_target() {
    let err = parse_err("1(2);");
    assert!(matches!(err.kind(), ErrorImpl::InvalidCallTarget { .. }));

    // a tuple is not callable either
    let err = parse_err("(1,2)(3);");
    assert!(matches!(err.kind(), ErrorImpl::InvalidCallTarget { .. }));
}

#[test]
fn test_invalid_subscript_target() {
    let err = parse_err("1[0];");
    assert!(matches!(
        err.kind(),
        ErrorImpl::InvalidSubscriptTarget { .. }
    ));
}

#[test]
fn test_invalid_lambda_shape() {
    let err = parse_err("1 -> x;");
    assert!(matches!(err.kind(), ErrorImpl::InvalidLambdaShape { .. }));

    // tuple parameters must all be bare identifiers
    let err = parse_err("(a, 1) -> x;");
    assert!(matches!(err.kind(), ErrorImpl::InvalidLambdaShape { .. }));
}

#[test]
fn test_missing_block_start() {
    let err = parse_err("if true 1;");
    assert!(matches!(err.kind(), ErrorImpl::MissingBlockStart { .. }));

    let err = parse_err("while true return;");
    assert!(matches!(err.kind(), ErrorImpl::MissingBlockStart { .. }));
}

#[test]
fn test_if_statement() {
    let registry = default_grammar();
    let stmts = crate::parse(&registry, "if a { 1; }").unwrap();
    assert_eq!(stmts.len(), 1);
    assert_eq!(stmts[0].to_string(), "(if a ({ 1))");
}

#[test]
fn test_if_else_statement() {
    let registry = default_grammar();
    let stmts = crate::parse(&registry, "if a { 1; } else { 2; }").unwrap();
    assert_eq!(stmts[0].to_string(), "(if a ({ 1) ({ 2))");
}

#[test]
fn test_else_if_chaining() {
    let registry = default_grammar();
    let stmts = crate::parse(&registry, "if a { 1; } else if b { 2; } else { 3; }").unwrap();
    assert_eq!(stmts.len(), 1);

    let outer = &stmts[0];
    assert_eq!(outer.sym, Symbol::If);
    assert_eq!(outer.children.len(), 3);

    let chained = &outer.children[2];
    assert_eq!(chained.sym, Symbol::If);
    assert_eq!(chained.to_string(), "(if b ({ 2) ({ 3))");
}

#[test]
fn test_while_statement() {
    let registry = default_grammar();
    let stmts = crate::parse(&registry, "while i < 10 { i += 1; }").unwrap();
    assert_eq!(stmts[0].to_string(), "(while (< i 10) ({ (+= i 1)))");
}

#[test]
fn test_break_and_continue() {
    let registry = default_grammar();
    let stmts = crate::parse(&registry, "while true { break; continue; }").unwrap();
    assert_eq!(stmts[0].to_string(), "(while true ({ break continue))");
}

#[test]
fn test_return_statement() {
    let registry = default_grammar();
    let stmts = crate::parse(&registry, "x -> { return x + 1; };").unwrap();
    assert_eq!(stmts[0].to_string(), "(-> x ({ (return (+ x 1))))");

    let stmts = crate::parse(&registry, "x -> { return; };").unwrap();
    assert_eq!(stmts[0].to_string(), "(-> x ({ return))");
}

#[test]
fn test_standalone_block_statement() {
    let registry = default_grammar();
    let stmts = crate::parse(&registry, "{ 1; 2; }").unwrap();
    assert_eq!(stmts[0].to_string(), "({ 1 2)");
}

#[test]
fn test_nested_blocks() {
    let registry = default_grammar();
    let stmts = crate::parse(&registry, "{ 1; { 2; } }").unwrap();
    assert_eq!(stmts[0].to_string(), "({ 1 ({ 2))");
}

#[test]
fn test_top_level_statement_sequence() {
    let registry = default_grammar();
    let stmts = crate::parse(&registry, "a = 1; b = 2; a + b;").unwrap();
    assert_eq!(stmts.len(), 3);
    assert_eq!(stmts[0].to_string(), "(= a 1)");
    assert_eq!(stmts[1].to_string(), "(= b 2)");
    assert_eq!(stmts[2].to_string(), "(+ a b)");
}

#[test]
fn test_empty_program() {
    let registry = default_grammar();
    let stmts = crate::parse(&registry, "").unwrap();
    assert!(stmts.is_empty());

    let stmts = crate::parse(&registry, "# only a comment\n").unwrap();
    assert!(stmts.is_empty());
}

#[test]
fn test_tree_nodes_carry_positions() {
    let node = expr("1 + 2");
    assert_eq!(node.position, Position::new(1, 3));
    assert_eq!(node.children[0].position, Position::new(1, 1));
    assert_eq!(node.children[1].position, Position::new(1, 5));
}

#[test]
fn test_literal_symbols() {
    assert_eq!(expr("true").sym, Symbol::True);
    assert_eq!(expr("false").sym, Symbol::False);
    assert_eq!(expr("none").sym, Symbol::NoneLit);
    assert_eq!(expr("\"hi\"").sym, Symbol::String);
    assert_eq!(expr("1.5").sym, Symbol::Number);
}
