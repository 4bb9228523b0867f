//! Column-ordered table with missing-value aware cells
//!
//! The table is an ordered collection of named columns of equal length.
//! Transforms add or overwrite whole columns; the record parser appends
//! rows, creating columns lazily as new field keys are first seen.

use crate::error::{CoreError, Result};

/// One cell of a table column.
///
/// The source format distinguishes real text from missing values, and
/// sentence splitting produces a list of strings per cell. Every cleaning
/// transform passes `List` and `Missing` through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// A text value
    Text(String),
    /// A sequence of strings, e.g. split sentences
    List(Vec<String>),
    /// The missing-value marker
    Missing,
}

impl Cell {
    /// Borrow the text content, if this cell is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this cell is the missing-value marker
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

#[derive(Debug, Clone)]
struct Column {
    name: String,
    cells: Vec<Cell>,
}

/// Ordered collection of named, equal-length columns
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Cells of a column, aligned by row index
    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        self.position(name).map(|i| self.columns[i].cells.as_slice())
    }

    /// One cell by column name and row index
    pub fn get(&self, name: &str, row: usize) -> Option<&Cell> {
        self.column(name).and_then(|cells| cells.get(row))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Add a column, or overwrite an existing one with the same name.
    ///
    /// The cell count must match the current row count; the first column
    /// inserted into a rowless table defines it.
    pub fn insert_column(&mut self, name: &str, cells: Vec<Cell>) -> Result<()> {
        if self.columns.is_empty() && self.rows == 0 {
            self.rows = cells.len();
        } else if cells.len() != self.rows {
            return Err(CoreError::LengthMismatch {
                name: name.to_string(),
                actual: cells.len(),
                expected: self.rows,
            });
        }

        match self.position(name) {
            Some(i) => self.columns[i].cells = cells,
            None => self.columns.push(Column {
                name: name.to_string(),
                cells,
            }),
        }
        Ok(())
    }

    /// Append one row described as a column-name to cell mapping.
    ///
    /// Columns the row does not mention receive `Missing`; names not seen
    /// before become new columns backfilled with `Missing` for all prior
    /// rows. An empty mapping appends an all-missing row.
    pub fn push_row<I>(&mut self, row: I)
    where
        I: IntoIterator<Item = (String, Cell)>,
    {
        let prior = self.rows;
        for (name, cell) in row {
            match self.position(&name) {
                Some(i) => {
                    let cells = &mut self.columns[i].cells;
                    if cells.len() == prior {
                        cells.push(cell);
                    } else {
                        // the row named this column twice: latest wins
                        cells[prior] = cell;
                    }
                }
                None => {
                    let mut cells = vec![Cell::Missing; prior];
                    cells.push(cell);
                    self.columns.push(Column { name, cells });
                }
            }
        }
        for column in &mut self.columns {
            if column.cells.len() == prior {
                column.cells.push(Cell::Missing);
            }
        }
        self.rows = prior + 1;
    }

    /// Assert that a column holds only text or missing cells.
    ///
    /// Counterpart of the explicit text-dtype coercion the string
    /// transforms apply to their derived columns.
    pub fn ensure_text(&self, name: &str) -> Result<()> {
        let cells = self
            .column(name)
            .ok_or_else(|| CoreError::UnknownColumn(name.to_string()))?;
        if cells.iter().all(|c| !matches!(c, Cell::List(_))) {
            Ok(())
        } else {
            Err(CoreError::NotText(name.to_string()))
        }
    }
}
