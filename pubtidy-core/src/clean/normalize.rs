//! Whitespace, heading-label and lemma normalization

use super::{map_text, overwrite_text};
use crate::analyze::Analyzer;
use crate::error::Result;
use crate::table::Table;
use regex::Regex;
use std::sync::OnceLock;

fn double_hyphen_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"--").expect("static pattern"))
}

fn squeeze_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{2,}").expect("static pattern"))
}

// Keeps ASCII letters, hyphens, apostrophes and spaces; everything else
// becomes a two-space placeholder so that stripping a character can never
// join two neighboring words.
fn non_letter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^-a-zA-Z' ]").expect("static pattern"))
}

// Uppercase words or phrases (commas and spaces included) at the start of
// the text, immediately followed by a colon.
fn heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z\s,]+:").expect("static pattern"))
}

fn squeeze(text: &str) -> String {
    let text = double_hyphen_re().replace_all(text, " ");
    let text = squeeze_re().replace_all(&text, " ");
    text.trim().to_string()
}

fn lemma_join(text: &str, analyzer: &dyn Analyzer) -> String {
    let text = double_hyphen_re().replace_all(text, " ");
    let text = non_letter_re().replace_all(&text, "  ");
    let text = squeeze_re().replace_all(&text, " ");
    let text = text.trim();
    // the placeholder substitution can itself open new whitespace runs
    let text = squeeze_re().replace_all(text, " ");

    let lemmas: Vec<String> = analyzer
        .tokenize(&text)
        .into_iter()
        .filter(|t| !t.is_stop && !t.is_punct)
        .map(|t| t.lemma)
        .collect();
    lemmas.join(" ")
}

/// Normalize the named columns for lemma-level comparison.
///
/// Strips non-letter characters, squeezes whitespace, then keeps only the
/// lemmas of tokens that are neither stopwords nor punctuation. The
/// derived column name replaces the `_lowercase_abbv` cleaning-stage
/// suffix with `_normalized`.
pub fn normalize(cols: &[&str], table: &mut Table, analyzer: &dyn Analyzer) -> Result<()> {
    for col in cols {
        let derived = map_text(table, col, |text| lemma_join(text, analyzer))?;
        table.insert_column(&col.replace("_lowercase_abbv", "_normalized"), derived)?;
    }
    Ok(())
}

/// Normalize whitespace in place: double-hyphens become a single space,
/// whitespace runs collapse to one space, ends are trimmed. Idempotent.
pub fn normalize_whitespace(cols: &[&str], table: &mut Table) -> Result<()> {
    for col in cols {
        overwrite_text(table, col, squeeze)?;
    }
    Ok(())
}

/// Remove an uppercase section label (and its colon) from the start of
/// the text, in place: "RESULTS AND DISCUSSION: trial" becomes "trial".
/// Lowercase-led text is left unchanged.
pub fn strip_heading_labels(cols: &[&str], table: &mut Table) -> Result<()> {
    for col in cols {
        overwrite_text(table, col, |text| {
            heading_re().replace(text, "").trim_start().to_string()
        })?;
    }
    Ok(())
}
