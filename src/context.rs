//! Construction context
//!
//! [`CompileContext`] owns the state a parser builds up while it runs: the
//! single syntax tree root and the symbol table. The caller creates it, passes
//! it by reference to whatever grows the tree or records declarations, and
//! either drops it or calls [`CompileContext::teardown`] when done.

use crate::config::Config;
use crate::errors::TreeError;
use crate::render::{print_tree, print_tree_to_file};
use crate::symbols::SymbolTable;
use crate::tree::{destroy_tree, ChildLimit, Node};
use log::debug;
use std::io::{self, Write};
use std::path::Path;

/// Counts reported by [`CompileContext::teardown`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Teardown {
    pub nodes: usize,
    pub symbols: usize,
}

#[derive(Debug, Default)]
pub struct CompileContext {
    root: Option<Node>,
    symbols: SymbolTable,
    child_limit: ChildLimit,
}

impl CompileContext {
    /// Empty context with the default four-child cap
    pub fn new() -> Self {
        CompileContext::default()
    }

    pub fn with_config(config: &Config) -> Self {
        CompileContext {
            child_limit: config.child_limit,
            ..CompileContext::default()
        }
    }

    pub fn child_limit(&self) -> ChildLimit {
        self.child_limit
    }

    /// Install `node` as the tree root, returning the previous root
    pub fn set_root(&mut self, node: Node) -> Option<Node> {
        self.root.replace(node)
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_mut()
    }

    pub fn take_root(&mut self) -> Option<Node> {
        self.root.take()
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    /// Attach `child` to `parent` under this context's child limit
    pub fn attach(&self, parent: &mut Node, child: Node) -> bool {
        parent.attach_child_with(self.child_limit, child)
    }

    /// Attach `child` directly under the root. Does nothing without a root.
    pub fn attach_to_root(&mut self, child: Node) -> bool {
        let limit = self.child_limit;
        match self.root.as_mut() {
            Some(root) => root.attach_child_with(limit, child),
            None => false,
        }
    }

    /// Indented rendering of the root; writes nothing when there is no root
    pub fn print_tree<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match &self.root {
            Some(root) => print_tree(root, 0, out),
            None => Ok(()),
        }
    }

    /// Formatted rendering of the root written to `path`
    pub fn write_tree<P: AsRef<Path>>(&self, path: P) -> Result<(), TreeError> {
        print_tree_to_file(self.root.as_ref(), path)
    }

    /// Release the tree and the symbol table, reporting what was freed
    pub fn teardown(mut self) -> Teardown {
        let nodes = destroy_tree(self.root.take());
        let symbols = std::mem::take(&mut self.symbols).destroy();
        debug!("context torn down: {} nodes, {} symbols", nodes, symbols);
        Teardown { nodes, symbols }
    }
}
