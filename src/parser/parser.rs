use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::Lexer,
    node::node::{Node, Symbol},
};

/// The Pratt parser: one expression loop plus a statement dispatcher, both
/// driven entirely by the handler snapshots carried on the nodes it consumes.
///
/// A parser owns its lexer and is consumed alongside it; the trees it
/// returns are owned by the caller.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Parser { lexer }
    }

    /// Parses one expression. Consumes a node, invokes its prefix rule, then
    /// keeps folding infix rules into the left operand while the peeked
    /// node's binding power is strictly greater than `rbp`.
    pub fn expression(&mut self, rbp: i32) -> Result<Node, Error> {
        let node = self.lexer.next()?;
        let Some(prefix) = node.prefix_handler() else {
            return Err(Error::new(
                ErrorImpl::NoPrefixRule {
                    symbol: node.sym,
                    value: node.value,
                },
                node.position,
            ));
        };
        let mut left = prefix(node, self)?;

        while rbp < self.lexer.peek()?.binding_power() {
            let node = self.lexer.next()?;
            let Some(infix) = node.infix_handler() else {
                return Err(Error::new(
                    ErrorImpl::NoInfixRule {
                        symbol: node.sym,
                        value: node.value,
                    },
                    node.position,
                ));
            };
            left = infix(node, self, left)?;
        }

        Ok(left)
    }

    /// Parses one statement: a registered statement rule if the peeked
    /// symbol has one, otherwise a bare expression terminated by `;`.
    pub fn statement(&mut self) -> Result<Node, Error> {
        if self.lexer.peek()?.statement_handler().is_some() {
            let node = self.lexer.next()?;
            if let Some(statement) = node.statement_handler() {
                return statement(node, self);
            }
        }

        let expr = self.expression(0)?;
        self.advance(Symbol::Semicolon)?;
        Ok(expr)
    }

    /// Parses statements until end of input or a block terminator. Used at
    /// top level and inside block bodies.
    pub fn statements(&mut self) -> Result<Vec<Node>, Error> {
        let mut stmts = Vec::new();
        loop {
            let next = self.lexer.peek()?;
            if next.sym == Symbol::EOF || next.sym == Symbol::CloseCurly {
                break;
            }
            stmts.push(self.statement()?);
        }
        Ok(stmts)
    }

    /// Requires the next node to open a block and delegates to its statement
    /// rule, which collects the inner statements and consumes the closing
    /// delimiter.
    pub fn block(&mut self) -> Result<Node, Error> {
        let node = self.lexer.next()?;
        if node.sym != Symbol::OpenCurly {
            return Err(Error::new(
                ErrorImpl::MissingBlockStart { value: node.value },
                node.position,
            ));
        }
        match node.statement_handler() {
            Some(statement) => statement(node, self),
            None => Err(Error::new(
                ErrorImpl::MissingBlockStart { value: node.value },
                node.position,
            )),
        }
    }

    /// Consumes the next node, failing if its symbol is not `expected`. The
    /// error reports the cursor position from before consumption.
    pub fn advance(&mut self, expected: Symbol) -> Result<Node, Error> {
        let position = self.lexer.position();
        let node = self.lexer.next()?;
        if node.sym != expected {
            return Err(Error::new(
                ErrorImpl::UnexpectedSymbol {
                    expected,
                    actual: node.sym,
                },
                position,
            ));
        }
        Ok(node)
    }

    /// One-node lookahead, delegating to the lexer's memoized peek.
    pub fn peek(&mut self) -> Result<&Node, Error> {
        self.lexer.peek()
    }
}
