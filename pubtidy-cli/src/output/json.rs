//! JSON output writer

use super::TableWriter;
use anyhow::Result;
use pubtidy_core::{Cell, Table};
use serde_json::{Map, Value};
use std::io::Write;

/// JSON writer - one object per record, missing cells as null
pub struct JsonWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonWriter<W> {
    /// Create a new JSON writer
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }
}

fn cell_value(cell: &Cell) -> Value {
    match cell {
        Cell::Text(text) => Value::String(text.clone()),
        Cell::List(items) => Value::Array(
            items
                .iter()
                .map(|item| Value::String(item.clone()))
                .collect(),
        ),
        Cell::Missing => Value::Null,
    }
}

impl<W: Write> TableWriter for JsonWriter<W> {
    fn write_table(&mut self, table: &Table) -> Result<()> {
        let names: Vec<&str> = table.column_names().collect();
        let mut records = Vec::with_capacity(table.rows());

        for row in 0..table.rows() {
            let mut object = Map::new();
            for name in &names {
                let cell = table.get(name, row).unwrap_or(&Cell::Missing);
                object.insert((*name).to_string(), cell_value(cell));
            }
            records.push(Value::Object(object));
        }

        let records = Value::Array(records);
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
