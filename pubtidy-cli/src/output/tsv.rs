//! Tab-separated output writer

use super::TableWriter;
use anyhow::Result;
use pubtidy_core::{Cell, Table};
use std::io::Write;

/// TSV writer - header row, then one line per record.
///
/// Tabs and newlines inside cells are flattened to single spaces so the
/// output stays line-oriented; sentence lists are joined with " | ".
pub struct TsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> TsvWriter<W> {
    /// Create a new TSV writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn escape(text: &str) -> String {
    text.replace(['\t', '\n', '\r'], " ")
}

fn cell_field(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => escape(text),
        Cell::List(items) => items
            .iter()
            .map(|item| escape(item))
            .collect::<Vec<_>>()
            .join(" | "),
        Cell::Missing => String::new(),
    }
}

impl<W: Write> TableWriter for TsvWriter<W> {
    fn write_table(&mut self, table: &Table) -> Result<()> {
        let names: Vec<&str> = table.column_names().collect();
        writeln!(self.writer, "{}", names.join("\t"))?;

        for row in 0..table.rows() {
            let fields: Vec<String> = names
                .iter()
                .map(|name| cell_field(table.get(name, row).unwrap_or(&Cell::Missing)))
                .collect();
            writeln!(self.writer, "{}", fields.join("\t"))?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
