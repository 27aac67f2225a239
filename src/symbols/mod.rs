//! Symbol tracking
//!
//! A single flat namespace of declared names. There is no block or function
//! scope: every name lives for as long as the table does.
//!
//! Inserting a name that already exists is an upsert that only touches the
//! stored value; the original type and declaration line stay as first seen.

pub mod table;

pub use table::{destroy_table, SymbolEntry, SymbolTable};
