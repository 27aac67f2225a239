//! # Introduction
//!
//! syntree is the tree-construction and symbol-tracking layer of a small C
//! front end. An external parser grows a syntax tree bottom-up with the
//! builders in [`tree`], records declarations in a [`symbols::SymbolTable`],
//! and hands both to the renderers for inspection.
//!
//! ## Data flow
//!
//! ```text
//! Parser → builders → Node tree ─┬→ render (indented / formatted / file)
//!        → SymbolTable ──────────┴→ ui inspector
//! ```
//!
//! 1. [`tree`] — [`tree::Node`] model, fixed-shape builders, teardown.
//! 2. [`render`] — two independent text layouts plus a file sink.
//! 3. [`symbols`] — flat, unscoped name table with an upsert insert policy.
//! 4. [`context`] — [`context::CompileContext`], the owner of one root and
//!    one table for the duration of a compilation.
//! 5. [`ui`] — ratatui-based inspector; not part of the stable library API.
//!
//! This crate does not lex, parse, scope, or type-check anything: it only
//! represents and displays the structures handed to it.

pub mod config;
pub mod constants;
pub mod context;
pub mod errors;
pub mod render;
pub mod symbols;
pub mod tree;
pub mod ui;
