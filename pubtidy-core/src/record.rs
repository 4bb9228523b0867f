//! Reconstruction of blank-line-delimited tagged records
//!
//! The export format writes one record per blank-line-delimited block, one
//! field per tagged line, with long field content wrapped across untagged
//! continuation lines. A single forward pass with one line of lookahead
//! re-merges wrapped content and appends one table row per record.

use crate::fields::{FieldMap, TAG_WIDTH};
use crate::table::{Cell, Table};

/// Per-record accumulator, preserving first-seen key order
#[derive(Debug, Default)]
struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Set a field value, overwriting any prior value for the key
    fn set(&mut self, key: &str, value: String) {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.fields.push((key.to_string(), value)),
        }
    }

    /// Drain the accumulated fields, leaving the record empty
    fn take(&mut self) -> Vec<(String, String)> {
        std::mem::take(&mut self.fields)
    }
}

/// The tag candidate of a line: its first `TAG_WIDTH` characters, trimmed.
///
/// Every line is probed this way regardless of actual tag length, so
/// content that happens to start with four characters equal to a tag is
/// indistinguishable from a real tag line. That is a known limitation of
/// the export format, reproduced here for compatibility.
fn tag_candidate(line: &str) -> String {
    let window: String = line.chars().take(TAG_WIDTH).collect();
    window.trim().to_string()
}

/// The content of a tagged line: everything past the tag window and the
/// separator character that follows it
fn content_after_tag(line: &str) -> String {
    let rest: String = line.chars().skip(TAG_WIDTH + 1).collect();
    rest.trim().to_string()
}

/// Join wrapped field content with a single space
fn join_wrapped(stash: &str, text: &str) -> String {
    format!("{stash} {text}").trim().to_string()
}

/// Reconstruct records from a raw line sequence and append them as rows.
///
/// `lines` is the serialized export: one cell per physical line, with the
/// missing-value marker standing for the blank separator lines that
/// delimit records. Each completed record becomes one row of `table`,
/// with one column per field key seen; columns are created lazily.
///
/// The decision at each line is a four-way branch on whether the current
/// and next lines carry a recognized tag ("no next line" counts as
/// blank):
///
/// - both tagged: the current field is complete on its line;
/// - current tagged, next not: the content may wrap, so it is stashed
///   together with its field key (and flushed immediately when the input
///   ends here);
/// - current untagged, next tagged: the wrapped field ends, so the
///   current text (empty for a blank line) is merged onto the stash and
///   written under the stashed key;
/// - neither tagged: the stash keeps growing.
///
/// A record completes at every blank line and at the end of the input;
/// stashed content that was never written out is flushed to the record
/// first, so truncated trailing fields degrade gracefully. Consecutive
/// blank lines yield all-missing rows.
pub fn reconstruct(lines: &[Cell], fields: &FieldMap, mut table: Table) -> Table {
    let mut stash = String::new();
    let mut pending: Option<String> = None;
    let mut record = Record::default();

    for (i, line) in lines.iter().enumerate() {
        let last = i + 1 == lines.len();
        let cur_line = line.as_text();
        let cur_key = cur_line.and_then(|l| fields.key_for_tag(&tag_candidate(l)));
        let next_is_tag = if last {
            false
        } else {
            lines[i + 1]
                .as_text()
                .is_some_and(|l| fields.contains_tag(&tag_candidate(l)))
        };

        match (cur_key, next_is_tag) {
            (Some(key), true) => {
                record.set(key, content_after_tag(cur_line.unwrap_or_default()));
            }
            (Some(key), false) => {
                stash = content_after_tag(cur_line.unwrap_or_default());
                pending = Some(key.to_string());
                if last {
                    record.set(key, std::mem::take(&mut stash));
                    pending = None;
                }
            }
            (None, true) => {
                let text = cur_line.map(str::trim).unwrap_or_default();
                let merged = join_wrapped(&stash, text);
                if let Some(key) = pending.take() {
                    record.set(&key, merged);
                }
                stash.clear();
            }
            (None, false) => {
                let text = cur_line.map(str::trim).unwrap_or_default();
                stash = join_wrapped(&stash, text);
            }
        }

        if cur_line.is_none() || last {
            // record boundary: the stash never crosses it
            if let Some(key) = pending.take() {
                record.set(&key, std::mem::take(&mut stash));
            }
            stash.clear();
            table.push_row(
                record
                    .take()
                    .into_iter()
                    .map(|(key, value)| (key, Cell::Text(value))),
            );
        }
    }

    table
}
