// Syntax tree node definitions

use crate::constants::DEFAULT_MAX_CHILDREN;
use log::debug;
use std::borrow::Cow;

/// Syntactic role of a node.
///
/// `Integer` is the only kind carrying a numeric payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    Declaration,
    Assignment,
    IfStatement,
    Expression,
    BinaryOp,
    Integer(i32),
    Identifier,
    Type,
    Semicolon,
    Colon,
    Condition,
}

impl NodeKind {
    /// Fixed display name used when a node has no text payload
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Program => "program",
            NodeKind::Declaration => "dec",
            NodeKind::Assignment => "assignment",
            NodeKind::IfStatement => "if_stat",
            NodeKind::Expression => "expr",
            NodeKind::BinaryOp => "op",
            NodeKind::Integer(_) => "num",
            NodeKind::Identifier => "id",
            NodeKind::Type => "type",
            NodeKind::Semicolon => ";",
            NodeKind::Colon => ":",
            NodeKind::Condition => "cond",
        }
    }
}

/// How many children a node may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildLimit {
    /// Attachments past `n` children are dropped
    Capped(usize),
    Unbounded,
}

impl ChildLimit {
    pub fn allows(&self, current: usize) -> bool {
        match self {
            ChildLimit::Capped(max) => current < *max,
            ChildLimit::Unbounded => true,
        }
    }
}

impl Default for ChildLimit {
    fn default() -> Self {
        ChildLimit::Capped(DEFAULT_MAX_CHILDREN)
    }
}

/// A syntax tree node. Each node exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    text: Option<String>,
    children: Vec<Node>,
}

impl Node {
    /// Create a childless node. `Integer` nodes never keep a text payload:
    /// their value is what they display.
    pub fn new(kind: NodeKind, text: Option<&str>) -> Self {
        let text = match (kind, text) {
            (NodeKind::Integer(value), Some(text)) => {
                debug!("ignoring text '{}' on integer node {}", text, value);
                None
            }
            (_, text) => text.map(str::to_owned),
        };
        Node {
            kind,
            text,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Integer payload, present only for `Integer` nodes
    pub fn int_value(&self) -> Option<i32> {
        match self.kind {
            NodeKind::Integer(value) => Some(value),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Text shown for this node by every renderer: the text payload, else the
    /// integer value, else the kind name.
    pub fn display_text(&self) -> Cow<'_, str> {
        match (&self.text, self.kind) {
            (Some(text), _) => Cow::Borrowed(text.as_str()),
            (None, NodeKind::Integer(value)) => Cow::Owned(value.to_string()),
            (None, kind) => Cow::Borrowed(kind.name()),
        }
    }

    /// Append `child` if `limit` leaves room; otherwise the child is dropped.
    ///
    /// Returns whether the child was attached. A dropped child is not an error.
    pub fn attach_child_with(&mut self, limit: ChildLimit, child: Node) -> bool {
        if limit.allows(self.children.len()) {
            self.children.push(child);
            true
        } else {
            debug!(
                "dropping '{}' child of '{}': node already holds {} children",
                child.display_text(),
                self.display_text(),
                self.children.len()
            );
            false
        }
    }

    /// Append `child` under the default four-child cap
    pub fn attach_child(&mut self, child: Node) -> bool {
        self.attach_child_with(ChildLimit::default(), child)
    }

    /// Pre-order walk over this node and all its descendants
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }

    /// Total number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        self.preorder().count()
    }

    /// Number of levels in this subtree; a leaf has depth 1
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
    }

    pub(crate) fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }
}

impl Drop for Node {
    // Every descendant reaches its own drop with no children left.
    fn drop(&mut self) {
        let mut pending = self.take_children();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.take_children());
        }
    }
}

/// Pre-order iterator returned by [`Node::preorder`]
pub struct Preorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
