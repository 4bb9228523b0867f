//! Human-readable text output writer

use super::TableWriter;
use anyhow::Result;
use pubtidy_core::{Cell, Table};
use std::io::{self, Write};

/// Text writer - one "column: value" block per record, blank-line
/// separated; missing cells are omitted
pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    /// Create a new text writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextWriter<io::Stdout> {
    /// Create a writer that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TableWriter for TextWriter<W> {
    fn write_table(&mut self, table: &Table) -> Result<()> {
        let names: Vec<&str> = table.column_names().collect();

        for row in 0..table.rows() {
            if row > 0 {
                writeln!(self.writer)?;
            }
            for name in &names {
                match table.get(name, row) {
                    Some(Cell::Text(text)) => writeln!(self.writer, "{name}: {text}")?,
                    Some(Cell::List(items)) => {
                        writeln!(self.writer, "{name}:")?;
                        for item in items {
                            writeln!(self.writer, "  - {item}")?;
                        }
                    }
                    Some(Cell::Missing) | None => {}
                }
            }
        }

        self.writer.flush()?;
        Ok(())
    }
}
