//! Output formatting module

use anyhow::Result;
use pubtidy_core::Table;

/// Trait for table writers
pub trait TableWriter {
    /// Write the whole table and flush
    fn write_table(&mut self, table: &Table) -> Result<()>;
}

pub mod json;
pub mod text;
pub mod tsv;

pub use json::JsonWriter;
pub use text::TextWriter;
pub use tsv::TsvWriter;
