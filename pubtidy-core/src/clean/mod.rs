//! Column-wise text-cleaning transforms
//!
//! Each transform is an independent, stateless operation applied to the
//! named columns of a table. Some add a derived column (suffixing the
//! source name), some overwrite in place; every one passes missing and
//! list cells through untouched. Callers compose transforms in whatever
//! order fits their pipeline.

mod abbrev;
mod normalize;
mod sentences;

pub use abbrev::{collapse_duplicates, expand_abbreviations, AbbreviationExpander, Replacements};
pub use normalize::{normalize, normalize_whitespace, strip_heading_labels};
pub use sentences::split_sentences;

use crate::error::{CoreError, Result};
use crate::table::{Cell, Table};

/// Derive a new cell vector by applying `f` to every text cell of a
/// column; missing and list cells are cloned through unchanged
pub(crate) fn map_text<F>(table: &Table, col: &str, mut f: F) -> Result<Vec<Cell>>
where
    F: FnMut(&str) -> String,
{
    let cells = table
        .column(col)
        .ok_or_else(|| CoreError::UnknownColumn(col.to_string()))?;
    Ok(cells
        .iter()
        .map(|cell| match cell {
            Cell::Text(text) => Cell::Text(f(text)),
            other => other.clone(),
        })
        .collect())
}

/// Overwrite a column in place with `f` applied to its text cells
pub(crate) fn overwrite_text<F>(table: &mut Table, col: &str, f: F) -> Result<()>
where
    F: FnMut(&str) -> String,
{
    let derived = map_text(table, col, f)?;
    table.insert_column(col, derived)
}

/// Lowercase the named columns into `{col}_lowercase` derived columns.
///
/// Non-destructive: the source columns are retained.
pub fn lowercase(cols: &[&str], table: &mut Table) -> Result<()> {
    for col in cols {
        let derived = map_text(table, col, |text| text.to_lowercase())?;
        table.insert_column(&format!("{col}_lowercase"), derived)?;
    }
    Ok(())
}
