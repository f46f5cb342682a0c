use std::collections::HashMap;

use crate::{
    errors::errors::Error,
    node::node::{Node, Symbol},
    parser::parser::Parser,
};

use super::grammar::BP_UNARY;

pub type PrefixHandler = fn(Node, &mut Parser<'_>) -> Result<Node, Error>;
pub type InfixHandler = fn(Node, &mut Parser<'_>, Node) -> Result<Node, Error>;
pub type StatementHandler = fn(Node, &mut Parser<'_>) -> Result<Node, Error>;

/// The grammar entry for one symbol: an integer precedence plus up to three
/// role-specific handlers. Higher binding power binds tighter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rule {
    pub binding_power: i32,
    pub prefix: Option<PrefixHandler>,
    pub infix: Option<InfixHandler>,
    pub statement: Option<StatementHandler>,
}

/// Symbol table mapping each symbol identity to its grammar rule, plus the
/// text table the lexer consults to recognise keywords, word operators and
/// punctuation.
///
/// Populate it fully before creating any lexer; afterwards it is only read.
#[derive(Debug, Default)]
pub struct Registry {
    rules: HashMap<Symbol, Rule>,
    text: HashMap<&'static str, Symbol>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Registers a rule for a symbol, merging with any earlier registration:
    /// only still-empty handler slots are filled and the binding power is
    /// raised to the maximum of old and new. An existing handler is never
    /// overwritten, so one symbol can collect its prefix, infix and statement
    /// roles through separate registrations.
    pub fn register(
        &mut self,
        text: &'static str,
        sym: Symbol,
        binding_power: i32,
        prefix: Option<PrefixHandler>,
        infix: Option<InfixHandler>,
        statement: Option<StatementHandler>,
    ) {
        self.text.insert(text, sym);
        let rule = self.rules.entry(sym).or_default();
        rule.prefix = rule.prefix.or(prefix);
        rule.infix = rule.infix.or(infix);
        rule.statement = rule.statement.or(statement);
        rule.binding_power = rule.binding_power.max(binding_power);
    }

    /// Looks a lexeme up in the text table. The lexer uses this to decide
    /// whether an identifier is a keyword and which punctuation sequences
    /// form operators.
    pub fn lookup(&self, text: &str) -> Option<Symbol> {
        self.text.get(text).copied()
    }

    pub fn rule(&self, sym: Symbol) -> Option<Rule> {
        self.rules.get(&sym).copied()
    }

    /// Creates a node for a lexed token, snapshotting the symbol's rule.
    pub fn node(&self, sym: Symbol, value: String, position: crate::Position) -> Node {
        let rule = self.rules.get(&sym).copied().unwrap_or_default();
        Node::new(sym, value, position, rule)
    }

    /// A literal symbol: its prefix rule returns the node itself.
    pub fn symbol(&mut self, text: &'static str, sym: Symbol) {
        self.register(text, sym, 0, Some(parse_literal), None, None);
    }

    /// A terminal-only symbol, matched solely via explicit expectation
    /// checks (separators, delimiters, end of input).
    pub fn consumable(&mut self, text: &'static str, sym: Symbol) {
        self.register(text, sym, 0, None, None, None);
    }

    /// A left-associative binary operator: the right operand is parsed at
    /// the operator's own binding power, so a following operator of the same
    /// precedence waits for the outer loop.
    pub fn infix(&mut self, text: &'static str, sym: Symbol, binding_power: i32) {
        self.register(text, sym, binding_power, None, Some(parse_left_infix), None);
    }

    /// An infix symbol with a custom handler.
    pub fn infix_led(
        &mut self,
        text: &'static str,
        sym: Symbol,
        binding_power: i32,
        infix: InfixHandler,
    ) {
        self.register(text, sym, binding_power, None, Some(infix), None);
    }

    /// A right-associative binary operator: the right operand is parsed at
    /// binding power - 1, so a following operator of the same precedence
    /// binds into the right operand first.
    pub fn infix_right(&mut self, text: &'static str, sym: Symbol, binding_power: i32) {
        self.register(
            text,
            sym,
            binding_power,
            None,
            Some(parse_right_infix),
            None,
        );
    }

    /// A unary prefix operator: the operand is parsed at threshold
    /// [`BP_UNARY`], tighter than every binary, call and subscript operator.
    pub fn prefix(&mut self, text: &'static str, sym: Symbol) {
        self.register(text, sym, 0, Some(parse_unary_prefix), None, None);
    }

    /// A prefix symbol with a custom handler.
    pub fn prefix_nud(&mut self, text: &'static str, sym: Symbol, prefix: PrefixHandler) {
        self.register(text, sym, 0, Some(prefix), None, None);
    }

    /// A statement-starting symbol.
    pub fn stmt(&mut self, text: &'static str, sym: Symbol, statement: StatementHandler) {
        self.register(text, sym, 0, None, None, Some(statement));
    }
}

fn parse_literal(node: Node, _parser: &mut Parser<'_>) -> Result<Node, Error> {
    Ok(node)
}

fn parse_left_infix(mut node: Node, parser: &mut Parser<'_>, left: Node) -> Result<Node, Error> {
    let binding_power = node.binding_power();
    node.children.push(left);
    node.children.push(parser.expression(binding_power)?);
    Ok(node)
}

fn parse_right_infix(mut node: Node, parser: &mut Parser<'_>, left: Node) -> Result<Node, Error> {
    let binding_power = node.binding_power();
    node.children.push(left);
    node.children.push(parser.expression(binding_power - 1)?);
    Ok(node)
}

fn parse_unary_prefix(mut node: Node, parser: &mut Parser<'_>) -> Result<Node, Error> {
    node.children.push(parser.expression(BP_UNARY)?);
    Ok(node)
}
