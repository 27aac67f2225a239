//! Error types
//!
//! The tree and symbol table are plain data structures, so almost nothing in
//! this crate can fail. Over-capacity attachment, unknown lookups and
//! duplicate inserts are defined outcomes, not errors. What remains:
//!
//! - [`TreeError`]: output failures while writing a rendered tree
//! - [`ConfigError`]: rejected command-line arguments

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while writing a rendered tree
#[derive(Error, Debug)]
pub enum TreeError {
    /// The output destination could not be opened for writing
    #[error("cannot open {} for writing: {source}", path.display())]
    Destination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to an already opened sink failed
    #[error("failed to write syntax tree: {0}")]
    Io(#[from] io::Error),
}

/// Invalid command-line configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    #[error("flag '{0}' expects a value")]
    MissingValue(String),

    #[error("invalid child limit '{0}': expected a positive integer")]
    InvalidLimit(String),

    #[error("unexpected argument '{0}': output path already given")]
    UnexpectedArgument(String),
}
