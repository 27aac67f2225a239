//! Syntax tree model
//!
//! This module holds the tree that an external parser grows bottom-up:
//! - [`ast`]: [`Node`] and [`NodeKind`] definitions, child attachment policy
//! - [`builders`]: fixed-shape constructors for expressions, declarations and
//!   `if` headers
//! - [`teardown`]: explicit, counted release of a subtree
//!
//! # Ownership
//!
//! Every node owns its children by value, so the tree is strict: no sharing,
//! no cycles. Dropping a node drops its subtree; [`destroy_tree`] does the
//! same iteratively and reports how many nodes it released.
//!
//! # Child limit
//!
//! Nodes accept at most four children by default. Attaching past the limit
//! is a silent no-op. [`ChildLimit::Unbounded`] lifts the cap.

pub mod ast;
pub mod builders;
pub mod teardown;

pub use ast::{ChildLimit, Node, NodeKind, Preorder};
pub use builders::{
    attach_child, create_binary_op_node, create_declaration_node, create_if_node,
    create_int_node, create_node,
};
pub use teardown::destroy_tree;
