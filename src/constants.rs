// Layout constants for the tree renderers and the symbol report

/// Number of children a node accepts under the default (compatibility) policy
pub const DEFAULT_MAX_CHILDREN: usize = 4;

/// Spaces per indentation block in the indented renderer
pub const INDENT_WIDTH: usize = 5;

/// Horizontal step between sibling columns in the formatted renderer
pub const FAN_OUT_STEP: usize = 4;

/// Starting column of the root when the formatted tree is written to a file
pub const FILE_ORIGIN: usize = 6;

pub const TREE_BANNER: &str = "========== SYNTAX TREE ==========";
pub const TREE_FOOTER: &str = "================================";

pub const SYMBOL_BANNER: &str = "========== SYMBOL TABLE ==========";
pub const SYMBOL_FOOTER: &str = "==================================";

/// Output file used by the binary when no path is given
pub const DEFAULT_OUTPUT_PATH: &str = "syntax_tree.txt";
