// Flat symbol table

use crate::constants::{SYMBOL_BANNER, SYMBOL_FOOTER};
use log::{debug, trace};
use rustc_hash::FxHashMap;
use std::io::{self, Write};

/// One declared name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    name: String,
    ty: String,
    value: i32,
    line: usize,
}

impl SymbolEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type as written in the source
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Line of the first declaration
    pub fn line(&self) -> usize {
        self.line
    }
}

/// Unscoped registry of declared names.
///
/// Entries are stored in insertion order; every public view walks them
/// most-recent-first. Names are unique, so the index always points at the
/// single entry a front-to-back scan would find.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    index: FxHashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Insert `name`, or overwrite only its value if it is already present.
    ///
    /// On a duplicate the stored type and declaration line are kept.
    pub fn insert(&mut self, name: &str, ty: &str, value: i32, line: usize) {
        if let Some(&slot) = self.index.get(name) {
            trace!("symbol '{}' already declared, updating value to {}", name, value);
            self.entries[slot].value = value;
            return;
        }

        debug!("declaring '{}' as {} at line {}", name, ty, line);
        self.index.insert(name.to_owned(), self.entries.len());
        self.entries.push(SymbolEntry {
            name: name.to_owned(),
            ty: ty.to_owned(),
            value,
            line,
        });
    }

    /// Find the entry for `name`. Matching is exact and case-sensitive.
    pub fn lookup(&self, name: &str) -> Option<&SymbolEntry> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    /// Overwrite the value of `name` if declared; does nothing otherwise.
    ///
    /// Returns whether an entry was updated.
    pub fn update_value(&mut self, name: &str, value: i32) -> bool {
        match self.index.get(name) {
            Some(&slot) => {
                self.entries[slot].value = value;
                true
            }
            None => {
                trace!("update of undeclared symbol '{}' ignored", name);
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, most recently inserted first
    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.iter().rev()
    }

    /// Write the bordered report: banner, header, one row per entry (most
    /// recent first) or an `(empty)` row, footer.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n{}", SYMBOL_BANNER)?;
        writeln!(out, "| {:<10} | {:<6} | {:<8} | {:<4} |", "Name", "Type", "Value", "Line")?;
        writeln!(out, "|------------|--------|----------|------|")?;

        if self.is_empty() {
            writeln!(out, "| (empty)                              |")?;
        } else {
            for entry in self.iter() {
                writeln!(
                    out,
                    "| {:<10} | {:<6} | {:<8} | {:<4} |",
                    entry.name, entry.ty, entry.value, entry.line
                )?;
            }
        }
        writeln!(out, "{}\n", SYMBOL_FOOTER)
    }

    /// Report produced by [`SymbolTable::print`] as a `String`
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writes into a Vec<u8> cannot fail
        let _ = self.print(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Release every entry, returning how many there were
    pub fn destroy(self) -> usize {
        let released = self.entries.len();
        debug!("released {} symbols", released);
        released
    }
}

/// Release `table` if present, returning the number of entries freed
pub fn destroy_table(table: Option<SymbolTable>) -> usize {
    table.map_or(0, SymbolTable::destroy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut table = SymbolTable::new();
        table.insert("x", "int", 1, 5);

        let entry = table.lookup("x").unwrap();
        assert_eq!(entry.name(), "x");
        assert_eq!(entry.ty(), "int");
        assert_eq!(entry.value(), 1);
        assert_eq!(entry.line(), 5);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_updates_value_only() {
        let mut table = SymbolTable::new();
        table.insert("x", "int", 1, 5);
        table.insert("x", "char", 99, 12);

        assert_eq!(table.len(), 1);
        let entry = table.lookup("x").unwrap();
        assert_eq!(entry.value(), 99);
        assert_eq!(entry.ty(), "int");
        assert_eq!(entry.line(), 5);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut table = SymbolTable::new();
        table.insert("Count", "int", 0, 1);
        assert!(table.lookup("count").is_none());
        assert!(table.lookup("Count").is_some());
    }

    #[test]
    fn test_update_value() {
        let mut table = SymbolTable::new();
        table.insert("y", "int", 3, 2);

        assert!(table.update_value("y", 8));
        assert_eq!(table.lookup("y").unwrap().value(), 8);

        assert!(!table.update_value("z", 1));
        assert!(table.lookup("z").is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_iter_most_recent_first() {
        let mut table = SymbolTable::new();
        table.insert("a", "int", 1, 1);
        table.insert("b", "int", 2, 2);
        table.insert("c", "int", 3, 3);
        table.insert("a", "int", 10, 4);

        let names: Vec<_> = table.iter().map(SymbolEntry::name).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_print_empty() {
        let expected = "\n========== SYMBOL TABLE ==========\n\
                        | Name       | Type   | Value    | Line |\n\
                        |------------|--------|----------|------|\n\
                        | (empty)                              |\n\
                        ==================================\n\n";
        assert_eq!(SymbolTable::new().render(), expected);
    }

    #[test]
    fn test_print_rows() {
        let mut table = SymbolTable::new();
        table.insert("x", "int", 5, 1);
        table.insert("total", "int", -12, 14);

        let report = table.render();
        let rows: Vec<_> = report.lines().skip(4).take(2).collect();
        assert_eq!(rows[0], "| total      | int    | -12      | 14   |");
        assert_eq!(rows[1], "| x          | int    | 5        | 1    |");
    }

    #[test]
    fn test_destroy() {
        let mut table = SymbolTable::new();
        table.insert("a", "int", 1, 1);
        table.insert("b", "int", 2, 2);
        assert_eq!(destroy_table(Some(table)), 2);
        assert_eq!(destroy_table(None), 0);
    }
}
