use std::fmt::Display;

use crate::{
    registry::registry::{InfixHandler, PrefixHandler, Rule, StatementHandler},
    Position,
};

/// Identity of a grammar symbol.
///
/// Most variants correspond directly to a lexeme; `Tuple` and `Array` only
/// exist as the classified result of the grouping and array-literal prefix
/// rules and are never produced by the lexer.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Symbol {
    EOF,
    Identifier,
    Number,
    String,

    True,
    False,
    NoneLit,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    Assignment, // =
    Equals,     // ==
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    PlusEquals,
    MinusEquals,
    Arrow,

    Plus,
    Dash,
    Star,
    Slash,
    Mod,

    And,
    Or,
    Not,

    Semicolon,
    Comma,

    // Keywords
    If,
    Else,
    While,
    Break,
    Continue,
    Return,

    // Classified literal collections
    Tuple,
    Array,
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Symbol::EOF => "(EOF)",
            Symbol::Identifier => "(IDENT)",
            Symbol::Number => "(NUMBER)",
            Symbol::String => "(STRING)",
            Symbol::True => "true",
            Symbol::False => "false",
            Symbol::NoneLit => "none",
            Symbol::OpenParen => "(",
            Symbol::CloseParen => ")",
            Symbol::OpenBracket => "[",
            Symbol::CloseBracket => "]",
            Symbol::OpenCurly => "{",
            Symbol::CloseCurly => "}",
            Symbol::Assignment => "=",
            Symbol::Equals => "==",
            Symbol::Less => "<",
            Symbol::LessEquals => "<=",
            Symbol::Greater => ">",
            Symbol::GreaterEquals => ">=",
            Symbol::PlusEquals => "+=",
            Symbol::MinusEquals => "-=",
            Symbol::Arrow => "->",
            Symbol::Plus => "+",
            Symbol::Dash => "-",
            Symbol::Star => "*",
            Symbol::Slash => "/",
            Symbol::Mod => "mod",
            Symbol::And => "and",
            Symbol::Or => "or",
            Symbol::Not => "not",
            Symbol::Semicolon => ";",
            Symbol::Comma => ",",
            Symbol::If => "if",
            Symbol::Else => "else",
            Symbol::While => "while",
            Symbol::Break => "break",
            Symbol::Continue => "continue",
            Symbol::Return => "return",
            Symbol::Tuple => "()",
            Symbol::Array => "[]",
        };
        write!(f, "{}", text)
    }
}

/// A token and, after parsing, a node of the finished tree.
///
/// The rule snapshot is copied from the registry when the node is created
/// and never re-queried afterwards.
#[derive(Debug, Clone)]
pub struct Node {
    pub sym: Symbol,
    pub value: String,
    pub position: Position,
    pub children: Vec<Node>,
    rule: Rule,
}

impl Node {
    pub fn new(sym: Symbol, value: String, position: Position, rule: Rule) -> Self {
        Node {
            sym,
            value,
            position,
            children: Vec::new(),
            rule,
        }
    }

    /// Builds a node whose identity was decided only after its children were
    /// parsed (tuple and array literals). Classified nodes carry an inert
    /// rule; nothing dispatches on them again.
    pub fn classified(
        sym: Symbol,
        value: &str,
        position: Position,
        children: Vec<Node>,
    ) -> Self {
        Node {
            sym,
            value: value.to_string(),
            position,
            children,
            rule: Rule::default(),
        }
    }

    pub fn binding_power(&self) -> i32 {
        self.rule.binding_power
    }

    pub fn prefix_handler(&self) -> Option<PrefixHandler> {
        self.rule.prefix
    }

    pub fn infix_handler(&self) -> Option<InfixHandler> {
        self.rule.infix
    }

    pub fn statement_handler(&self) -> Option<StatementHandler> {
        self.rule.statement
    }
}

impl Display for Node {
    /// Renders the tree as an s-expression: leaves print their value,
    /// interior nodes print `(value child ...)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.children.is_empty() {
            return write!(f, "{}", self.value);
        }
        write!(f, "({}", self.value)?;
        for child in &self.children {
            write!(f, " {}", child)?;
        }
        write!(f, ")")
    }
}
