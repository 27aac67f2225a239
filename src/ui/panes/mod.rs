//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`tree`]: Formatted syntax tree, scrollable
//! - [`symbols`]: Symbol table as a four-column table
//! - [`status`]: Status bar with keybindings and tree statistics
//!
//! Each pane module exports a stateless `render_*` function; scroll offsets
//! live in [`App`](crate::ui::App) and are clamped by the pane on every draw.

pub mod status;
pub mod symbols;
pub mod tree;

pub use status::render_status_bar;
pub use symbols::render_symbols_pane;
pub use tree::render_tree_pane;
