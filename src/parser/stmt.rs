use crate::{errors::errors::Error, node::node::{Node, Symbol}};

use super::parser::Parser;

/// `if` statement: condition, mandatory block, then optionally `else`
/// followed by either another `if` statement (else-if chaining) or a block.
pub fn parse_if_stmt(mut node: Node, parser: &mut Parser<'_>) -> Result<Node, Error> {
    node.children.push(parser.expression(0)?);
    node.children.push(parser.block()?);

    if parser.peek()?.sym == Symbol::Else {
        parser.advance(Symbol::Else)?;
        if parser.peek()?.sym == Symbol::If {
            node.children.push(parser.statement()?);
        } else {
            node.children.push(parser.block()?);
        }
    }
    Ok(node)
}

/// `while` statement: condition expression plus a block body.
pub fn parse_while_stmt(mut node: Node, parser: &mut Parser<'_>) -> Result<Node, Error> {
    node.children.push(parser.expression(0)?);
    node.children.push(parser.block()?);
    Ok(node)
}

/// Block statement: collects inner statements and consumes the closing `}`.
pub fn parse_block_stmt(mut node: Node, parser: &mut Parser<'_>) -> Result<Node, Error> {
    node.children.extend(parser.statements()?);
    parser.advance(Symbol::CloseCurly)?;
    Ok(node)
}

/// `break` and `continue`: a bare keyword terminated by `;`.
pub fn parse_loop_control_stmt(node: Node, parser: &mut Parser<'_>) -> Result<Node, Error> {
    parser.advance(Symbol::Semicolon)?;
    Ok(node)
}

/// `return` with an optional value, terminated by `;`.
pub fn parse_return_stmt(mut node: Node, parser: &mut Parser<'_>) -> Result<Node, Error> {
    if parser.peek()?.sym != Symbol::Semicolon {
        node.children.push(parser.expression(0)?);
    }
    parser.advance(Symbol::Semicolon)?;
    Ok(node)
}
