use crate::{
    errors::errors::{Error, ErrorImpl},
    node::node::{Node, Symbol},
};

use super::parser::Parser;

/// Grouping or tuple literal. Zero elements, or any comma seen, yields a
/// tuple node; exactly one element with no comma collapses to that element
/// itself (parentheses are transparent). The node's identity is decided only
/// after its contents are parsed.
pub fn parse_grouping_expr(node: Node, parser: &mut Parser<'_>) -> Result<Node, Error> {
    let mut elements = Vec::new();
    let mut saw_comma = false;

    if parser.peek()?.sym != Symbol::CloseParen {
        loop {
            if parser.peek()?.sym == Symbol::CloseParen {
                break;
            }
            elements.push(parser.expression(0)?);
            if parser.peek()?.sym != Symbol::Comma {
                break;
            }
            saw_comma = true;
            parser.advance(Symbol::Comma)?;
        }
    }
    parser.advance(Symbol::CloseParen)?;

    if elements.len() == 1 && !saw_comma {
        return Ok(elements.swap_remove(0));
    }
    Ok(Node::classified(
        Symbol::Tuple,
        "TUPLE",
        node.position,
        elements,
    ))
}

/// Array literal. Always yields an array node, never collapses.
pub fn parse_array_expr(node: Node, parser: &mut Parser<'_>) -> Result<Node, Error> {
    let mut elements = Vec::new();

    if parser.peek()?.sym != Symbol::CloseBracket {
        loop {
            if parser.peek()?.sym == Symbol::CloseBracket {
                break;
            }
            elements.push(parser.expression(0)?);
            if parser.peek()?.sym != Symbol::Comma {
                break;
            }
            parser.advance(Symbol::Comma)?;
        }
    }
    parser.advance(Symbol::CloseBracket)?;

    Ok(Node::classified(
        Symbol::Array,
        "ARRAY",
        node.position,
        elements,
    ))
}

/// Function call. The left operand must be an identifier, a prior call, a
/// prior subscript or a lambda; children are [callee, arg...].
pub fn parse_call_expr(mut node: Node, parser: &mut Parser<'_>, left: Node) -> Result<Node, Error> {
    if !matches!(
        left.sym,
        Symbol::Identifier | Symbol::OpenBracket | Symbol::OpenParen | Symbol::Arrow
    ) {
        return Err(Error::new(
            ErrorImpl::InvalidCallTarget { value: left.value },
            left.position,
        ));
    }
    node.children.push(left);

    if parser.peek()?.sym != Symbol::CloseParen {
        loop {
            node.children.push(parser.expression(0)?);
            if parser.peek()?.sym != Symbol::Comma {
                break;
            }
            parser.advance(Symbol::Comma)?;
        }
    }
    parser.advance(Symbol::CloseParen)?;

    Ok(node)
}

/// Subscript. The left operand must be an identifier, a prior subscript or a
/// prior call; children are [target, index...].
pub fn parse_subscript_expr(
    mut node: Node,
    parser: &mut Parser<'_>,
    left: Node,
) -> Result<Node, Error> {
    if !matches!(
        left.sym,
        Symbol::Identifier | Symbol::OpenBracket | Symbol::OpenParen
    ) {
        return Err(Error::new(
            ErrorImpl::InvalidSubscriptTarget { value: left.value },
            left.position,
        ));
    }
    node.children.push(left);

    if parser.peek()?.sym != Symbol::CloseBracket {
        loop {
            node.children.push(parser.expression(0)?);
            if parser.peek()?.sym != Symbol::Comma {
                break;
            }
            parser.advance(Symbol::Comma)?;
        }
    }
    parser.advance(Symbol::CloseBracket)?;

    Ok(node)
}

/// Conditional expression `A if cond else B`, surfaced with children
/// [condition, trueBranch, falseBranch].
pub fn parse_conditional_expr(
    mut node: Node,
    parser: &mut Parser<'_>,
    left: Node,
) -> Result<Node, Error> {
    let condition = parser.expression(0)?;
    node.children.push(condition);
    parser.advance(Symbol::Else)?;
    node.children.push(left);
    node.children.push(parser.expression(0)?);
    Ok(node)
}

/// Lambda declaration. The left operand must be a single identifier or a
/// tuple of bare identifiers; the body is a block if one follows, otherwise
/// a single expression. Children are [params, body].
pub fn parse_lambda_expr(
    mut node: Node,
    parser: &mut Parser<'_>,
    left: Node,
) -> Result<Node, Error> {
    match left.sym {
        Symbol::Identifier => {}
        Symbol::Tuple => {
            for param in &left.children {
                if param.sym != Symbol::Identifier {
                    return Err(Error::new(
                        ErrorImpl::InvalidLambdaShape {
                            value: param.value.clone(),
                        },
                        param.position,
                    ));
                }
            }
        }
        _ => {
            return Err(Error::new(
                ErrorImpl::InvalidLambdaShape { value: left.value },
                left.position,
            ));
        }
    }
    node.children.push(left);

    if parser.peek()?.sym == Symbol::OpenCurly {
        node.children.push(parser.block()?);
    } else {
        node.children.push(parser.expression(0)?);
    }
    Ok(node)
}
