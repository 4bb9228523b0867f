//! Field-tag dictionary for the record parser

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Width of the tag window at the start of a line.
///
/// Tag detection always reads the first `TAG_WIDTH` characters of a line,
/// so no tag may be wider than this.
pub const TAG_WIDTH: usize = 4;

/// One field entry: a stable internal key and its external line tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Internal field key, used as the output column name
    pub key: String,
    /// Fixed-width tag at the start of an export line
    pub tag: String,
}

impl FieldSpec {
    /// Create a field entry
    pub fn new(key: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            tag: tag.into(),
        }
    }
}

/// Validated mapping from field keys to their export tags.
///
/// Tags must be unique: with duplicate tags the parser could not decide
/// which key a line belongs to, so construction rejects them outright.
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    entries: Vec<FieldSpec>,
}

impl FieldMap {
    /// Build a field map, validating every entry
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = FieldSpec>,
    {
        let mut validated: Vec<FieldSpec> = Vec::new();
        for entry in entries {
            if entry.tag.trim().is_empty() {
                return Err(CoreError::EmptyTag(entry.key));
            }
            if entry.tag.chars().count() > TAG_WIDTH {
                return Err(CoreError::TagTooLong(entry.tag));
            }
            if validated.iter().any(|e| e.tag == entry.tag) {
                return Err(CoreError::DuplicateTag(entry.tag));
            }
            validated.push(entry);
        }
        Ok(Self { entries: validated })
    }

    /// The conventional PubMed/MEDLINE export tags
    pub fn pubmed() -> Self {
        let entries = [
            ("pmid", "PMID"),
            ("title", "TI"),
            ("abstract", "AB"),
            ("journal", "JT"),
            ("author", "FAU"),
            ("published", "DP"),
            ("language", "LA"),
            ("doi", "LID"),
        ];
        Self {
            entries: entries
                .iter()
                .map(|(key, tag)| FieldSpec::new(*key, *tag))
                .collect(),
        }
    }

    /// Whether `tag` is a recognized field tag
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.entries.iter().any(|e| e.tag == tag)
    }

    /// The field key a tag maps to
    pub fn key_for_tag(&self, tag: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.tag == tag)
            .map(|e| e.key.as_str())
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[FieldSpec] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
