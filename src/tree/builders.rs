//! Fixed-shape tree constructors
//!
//! Each builder takes ownership of the nodes it is handed and returns the
//! assembled subtree. The shapes are hard-coded: they reproduce specific
//! syntactic patterns rather than acting as general statement builders.

use super::ast::{Node, NodeKind};
use log::trace;

/// Create a childless node. `text` is copied into the node, except for
/// `Integer` kinds, which display their value and keep no text.
pub fn create_node(kind: NodeKind, text: Option<&str>) -> Node {
    Node::new(kind, text)
}

/// Create an `Integer` node with no text payload
pub fn create_int_node(value: i32) -> Node {
    Node::new(NodeKind::Integer(value), None)
}

/// Create a `BinaryOp` node whose children are exactly `left` then `right`
pub fn create_binary_op_node(op: &str, left: Node, right: Node) -> Node {
    let mut node = Node::new(NodeKind::BinaryOp, Some(op));
    node.attach_child(left);
    node.attach_child(right);
    node
}

/// Assemble `<type> <var> = <expr> ;`
///
/// ```text
///            dec
///          /     \
///       expr      ;
///     /   |   \
///  expr   =   <expr>
///  /  \
/// <type> <var>
/// ```
///
/// The `=` node is a childless `BinaryOp` placeholder, not an operator
/// application.
pub fn create_declaration_node(type_node: Node, var_node: Node, expr_node: Node) -> Node {
    let mut inner = Node::new(NodeKind::Expression, Some("expr"));
    inner.attach_child(type_node);
    inner.attach_child(var_node);

    let mut expr = Node::new(NodeKind::Expression, Some("expr"));
    expr.attach_child(inner);
    expr.attach_child(Node::new(NodeKind::BinaryOp, Some("=")));
    expr.attach_child(expr_node);

    let mut dec = Node::new(NodeKind::Declaration, Some("dec"));
    dec.attach_child(expr);
    dec.attach_child(Node::new(NodeKind::Semicolon, Some(";")));

    trace!("built declaration with {} nodes", dec.node_count());
    dec
}

/// Assemble `if ( <condition> ) :`
///
/// `_body` is accepted for call-site compatibility but is not attached; it is
/// dropped when this function returns.
pub fn create_if_node(condition: Node, _body: Option<Node>) -> Node {
    let mut if_stat = Node::new(NodeKind::IfStatement, Some("if_stat"));
    if_stat.attach_child(Node::new(NodeKind::Identifier, Some("if")));
    if_stat.attach_child(Node::new(NodeKind::Identifier, Some("(")));
    if_stat.attach_child(condition);
    if_stat.attach_child(Node::new(NodeKind::Identifier, Some(")")));

    let mut dec = Node::new(NodeKind::Declaration, Some("dec"));
    dec.attach_child(if_stat);
    dec.attach_child(Node::new(NodeKind::Colon, Some(":")));
    dec
}

/// Append `child` to `parent` under the default four-child cap.
///
/// A child past the cap is silently dropped; the return value only reports
/// whether it landed.
pub fn attach_child(parent: &mut Node, child: Node) -> bool {
    parent.attach_child(child)
}
