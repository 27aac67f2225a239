//! Text renderers for syntax trees
//!
//! - [`text`]: the indented renderer ([`print_tree`]) and the position-offset
//!   renderer ([`print_tree_formatted`]), both writing to any [`std::io::Write`]
//! - [`file`]: [`print_tree_to_file`], the only renderer that opens its own
//!   destination
//!
//! The two layouts evolved independently and are not interchangeable.

pub mod file;
pub mod text;

pub use file::print_tree_to_file;
pub use text::{
    branch_glyph, print_tree, print_tree_formatted, render_formatted, render_indented,
};
