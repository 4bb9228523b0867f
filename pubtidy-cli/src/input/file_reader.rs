//! Export-file reading
//!
//! An export file is read into the raw line sequence the parser
//! consumes: one cell per physical line, with blank lines mapped to the
//! missing-value marker that delimits records.

use anyhow::{Context, Result};
use pubtidy_core::Cell;
use std::fs;
use std::path::Path;

/// Read an export file into a raw line sequence.
///
/// Trailing whitespace (including carriage returns) is dropped from each
/// line; leading whitespace is preserved because the tag window and the
/// continuation-line convention depend on it. A line that is empty after
/// trimming becomes the blank separator.
pub fn read_export_lines(path: &Path) -> Result<Vec<Cell>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    Ok(content
        .lines()
        .map(|line| {
            let line = line.trim_end();
            if line.trim().is_empty() {
                Cell::Missing
            } else {
                Cell::Text(line.to_string())
            }
        })
        .collect())
}
