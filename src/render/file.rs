// Formatted tree written to a named file

use super::text::print_tree_formatted;
use crate::constants::{FILE_ORIGIN, TREE_BANNER, TREE_FOOTER};
use crate::errors::TreeError;
use crate::tree::Node;
use log::{error, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the banner, the formatted tree rooted at column 6, and the footer to
/// `path`, replacing any existing content.
///
/// An absent node produces a file holding only the banner and footer. If the
/// file cannot be opened the failure is logged and returned; nothing is
/// written.
pub fn print_tree_to_file<P: AsRef<Path>>(node: Option<&Node>, path: P) -> Result<(), TreeError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| {
        error!("Cannot open {} for writing: {}", path.display(), source);
        TreeError::Destination {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let mut out = BufWriter::new(file);
    writeln!(out, "{}\n", TREE_BANNER)?;
    if let Some(node) = node {
        print_tree_formatted(node, 0, FILE_ORIGIN, &mut out)?;
    }
    writeln!(out, "\n{}", TREE_FOOTER)?;
    out.flush()?;

    info!("wrote syntax tree to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::create_int_node;
    use std::fs;

    #[test]
    fn test_writes_banner_and_tree() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.txt");

        print_tree_to_file(Some(&create_int_node(9)), &path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "========== SYNTAX TREE ==========\n\n      9\n\n================================\n"
        );
    }

    #[test]
    fn test_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.txt");
        fs::write(&path, "stale contents that are much longer than the new tree\n".repeat(10))
            .unwrap();

        print_tree_to_file(None, &path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "========== SYNTAX TREE ==========\n\n\n================================\n"
        );
    }

    #[test]
    fn test_unopenable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("tree.txt");

        let err = print_tree_to_file(Some(&create_int_node(1)), &path).unwrap_err();
        assert!(matches!(err, TreeError::Destination { .. }));
        assert!(!path.exists());
    }
}
