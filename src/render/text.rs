//! Indented and position-offset tree renderers
//!
//! Both renderers walk the tree pre-order and only read it. They share the
//! display text computed by [`Node::display_text`].

use crate::constants::{FAN_OUT_STEP, INDENT_WIDTH};
use crate::tree::Node;
use std::io::{self, Write};

fn write_indent<W: Write>(level: usize, out: &mut W) -> io::Result<()> {
    write!(out, "{:width$}", "", width = level * INDENT_WIDTH)
}

fn write_spaces<W: Write>(count: usize, out: &mut W) -> io::Result<()> {
    write!(out, "{:width$}", "", width = count)
}

/// Indented renderer.
///
/// Prints the node, then a connector line (`/` first, `   |` middle,
/// `   \` last) when it has children, then each child. Children are printed
/// at the same `level` as their parent: indentation does not grow with depth.
pub fn print_tree<W: Write>(node: &Node, level: usize, out: &mut W) -> io::Result<()> {
    write_indent(level, out)?;
    writeln!(out, "{}", node.display_text())?;

    let count = node.child_count();
    if count == 0 {
        return Ok(());
    }

    write_indent(level, out)?;
    for i in 0..count {
        if i == 0 {
            write!(out, "/")?;
        } else if i == count - 1 {
            write!(out, "   \\")?;
        } else {
            write!(out, "   |")?;
        }
    }
    writeln!(out)?;

    for child in node.children() {
        print_tree(child, level, out)?;
    }
    Ok(())
}

/// Branch glyph printed under a node with `count` children
pub fn branch_glyph(count: usize) -> &'static str {
    match count {
        0 => "",
        1 => "|",
        2 => "/   \\",
        3 => "/ | \\",
        _ => "/ / | \\",
    }
}

/// Position-offset renderer.
///
/// Each node is preceded by `position` spaces. Child `i` is drawn at
/// `position + i * 4`, regardless of how wide its siblings' subtrees are.
/// `level` is tracked for callers but has no effect on layout.
pub fn print_tree_formatted<W: Write>(
    node: &Node,
    level: usize,
    position: usize,
    out: &mut W,
) -> io::Result<()> {
    write_spaces(position, out)?;
    writeln!(out, "{}", node.display_text())?;

    if node.child_count() == 0 {
        return Ok(());
    }

    write_spaces(position, out)?;
    writeln!(out, "{}", branch_glyph(node.child_count()))?;

    for (i, child) in node.children().iter().enumerate() {
        print_tree_formatted(child, level + 1, position + i * FAN_OUT_STEP, out)?;
    }
    Ok(())
}

/// Render with [`print_tree`] at level 0 into a `String`
pub fn render_indented(node: &Node) -> String {
    let mut buf = Vec::new();
    // Writes into a Vec<u8> cannot fail
    let _ = print_tree(node, 0, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Render with [`print_tree_formatted`] at `position` into a `String`
pub fn render_formatted(node: &Node, position: usize) -> String {
    let mut buf = Vec::new();
    // Writes into a Vec<u8> cannot fail
    let _ = print_tree_formatted(node, 0, position, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{create_binary_op_node, create_int_node, create_node, NodeKind};

    #[test]
    fn test_indented_leaf() {
        let node = create_int_node(7);
        let mut out = Vec::new();
        print_tree(&node, 2, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "          7\n");
    }

    #[test]
    fn test_indented_connectors() {
        let mut node = create_node(NodeKind::IfStatement, None);
        for text in ["if", "(", "c", ")"] {
            node.attach_child(create_node(NodeKind::Identifier, Some(text)));
        }
        let expected = "if_stat\n/   |   |   \\\nif\n(\nc\n)\n";
        assert_eq!(render_indented(&node), expected);
    }

    #[test]
    fn test_indented_level_is_not_increased() {
        let tree = create_binary_op_node("+", create_int_node(2), create_int_node(3));
        let mut out = Vec::new();
        print_tree(&tree, 1, &mut out).unwrap();
        let expected = "     +\n     /   \\\n     2\n     3\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_single_child_connector() {
        let mut node = create_node(NodeKind::Condition, None);
        node.attach_child(create_node(NodeKind::Identifier, Some("x")));
        assert_eq!(render_indented(&node), "cond\n/\nx\n");
    }

    #[test]
    fn test_branch_glyphs() {
        assert_eq!(branch_glyph(1), "|");
        assert_eq!(branch_glyph(2), "/   \\");
        assert_eq!(branch_glyph(3), "/ | \\");
        assert_eq!(branch_glyph(4), "/ / | \\");
        assert_eq!(branch_glyph(9), "/ / | \\");
    }

    #[test]
    fn test_formatted_fan_out() {
        let tree = create_binary_op_node("+", create_int_node(2), create_int_node(3));
        let expected = "+\n/   \\\n2\n    3\n";
        assert_eq!(render_formatted(&tree, 0), expected);
    }

    #[test]
    fn test_formatted_is_repeatable() {
        let tree = create_binary_op_node(
            "-",
            create_binary_op_node("+", create_int_node(2), create_int_node(3)),
            create_int_node(1),
        );
        let first = render_formatted(&tree, 6);
        let second = render_formatted(&tree, 6);
        assert_eq!(first, second);
        assert!(first.starts_with("      -\n      /   \\\n      +\n"));
    }
}
