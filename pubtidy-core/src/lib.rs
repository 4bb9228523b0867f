//! Tabular text cleaning and bibliographic record reconstruction
//!
//! Two independent components share this crate:
//!
//! - **Cleaning transforms** ([`clean`]): stateless, column-wise text
//!   operations over a [`Table`] — lowercasing, abbreviation expansion,
//!   duplicate-phrase collapsing, whitespace and lemma normalization,
//!   sentence splitting, heading-label removal. Callers compose them in
//!   any order; missing values always pass through untouched.
//! - **Record reconstruction** ([`record`]): a forward, one-line-lookahead
//!   parser that rebuilds structured records from a line-oriented export
//!   where records are blank-line delimited and long fields wrap across
//!   untagged continuation lines.
//!
//! # Example
//!
//! ```rust
//! use pubtidy_core::{reconstruct, Cell, FieldMap, FieldSpec, Table};
//!
//! let fields = FieldMap::new([
//!     FieldSpec::new("id", "PMID"),
//!     FieldSpec::new("title", "TI"),
//! ])
//! .unwrap();
//!
//! let lines = vec![
//!     Cell::from("PMID- 123"),
//!     Cell::from("TI  - A wrapped"),
//!     Cell::from("      title"),
//!     Cell::Missing,
//! ];
//!
//! let table = reconstruct(&lines, &fields, Table::new());
//! assert_eq!(table.rows(), 1);
//! assert_eq!(
//!     table.get("title", 0).and_then(|c| c.as_text()),
//!     Some("A wrapped title")
//! );
//! ```

#![warn(missing_docs)]

pub mod analyze;
pub mod clean;
pub mod error;
pub mod fields;
pub mod record;
pub mod table;

pub use analyze::{Analyzer, EnglishAnalyzer, Token};
pub use clean::{
    collapse_duplicates, expand_abbreviations, lowercase, normalize, normalize_whitespace,
    split_sentences, strip_heading_labels, AbbreviationExpander, Replacements,
};
pub use error::{CoreError, Result};
pub use fields::{FieldMap, FieldSpec, TAG_WIDTH};
pub use record::reconstruct;
pub use table::{Cell, Table};
