// Explicit subtree teardown

use super::ast::Node;
use log::debug;

/// Release `node` and its entire subtree, returning how many nodes were freed.
///
/// Nodes are detached onto a work list before being dropped, so each node is
/// visited once and deep trees never recurse through `Drop`. An absent node
/// releases nothing.
pub fn destroy_tree(node: Option<Node>) -> usize {
    let Some(root) = node else {
        return 0;
    };

    let mut pending = vec![root];
    let mut released = 0;
    while let Some(mut node) = pending.pop() {
        pending.extend(node.take_children());
        drop(node);
        released += 1;
    }

    debug!("released {} tree nodes", released);
    released
}
