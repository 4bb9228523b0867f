//! Abbreviation expansion and duplicate-phrase collapsing
//!
//! Naive substring replacement breaks citation-style text: the state code
//! "ON" is also the English word "on", and "al" occurs in "et al." far
//! more often than as a standalone token. Expansion therefore compiles
//! one context-aware pattern per dictionary entry, with exact-match
//! exceptions for those two keys.

use super::{map_text, overwrite_text};
use crate::error::Result;
use crate::table::Table;
use fancy_regex::{Captures, Regex};

/// Ordered abbreviation to full-form pairs.
///
/// Iteration order is insertion order: when one abbreviation is a
/// substring of another, the caller orders entries so the longer one is
/// applied first and is not masked.
#[derive(Debug, Clone, Default)]
pub struct Replacements {
    pairs: Vec<(String, String)>,
}

impl Replacements {
    /// Collect pairs, keeping their order
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// (abbreviation, full form) pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The full forms, in entry order
    pub fn full_forms(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(_, v)| v.as_str())
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

enum Rule {
    /// The whole match is replaced verbatim ("ON", "al")
    Verbatim { pattern: Regex, full: String },
    /// Five-context match; captured surrounding whitespace is re-emitted
    /// around the full form
    Contextual { pattern: Regex, full: String },
}

/// Compiled abbreviation expander.
///
/// One rule per dictionary entry, applied in entry order. The general
/// pattern recognizes an abbreviation in five contexts: after whitespace
/// and before `.,;-` punctuation, as a whitespace-bounded token, at the
/// start of the text before whitespace, parenthesized, or bracketed.
/// Matching is case-insensitive except for the key "ON", which is only
/// expanded in all-uppercase, and "al", which is whole-word matched with
/// the "et al" idiom excluded via lookbehind.
pub struct AbbreviationExpander {
    rules: Vec<Rule>,
}

impl AbbreviationExpander {
    /// Compile one rule per replacement entry
    pub fn new(replacements: &Replacements) -> Result<Self> {
        let mut rules = Vec::new();
        for (abbr, full) in replacements.iter() {
            let full = full.to_string();
            let rule = if abbr.eq_ignore_ascii_case("on") {
                // only the all-uppercase token: "ON Tuesday" expands,
                // "on Tuesday" stays
                Rule::Verbatim {
                    pattern: Regex::new(r"\bON\b")?,
                    full,
                }
            } else if abbr == "al" {
                // whole-word "al", but never the "al" of "et al."
                Rule::Verbatim {
                    pattern: Regex::new(r"(?i)(?<!et\s)\bal\b")?,
                    full,
                }
            } else {
                let e = regex::escape(abbr);
                let pattern = Regex::new(&format!(
                    r"(?i)(\s){e}\b(?=[.,;-])|\b{e}\b(\s)|^{e}(\s)\b|\({e}\)|\[{e}\]"
                ))?;
                Rule::Contextual { pattern, full }
            };
            rules.push(rule);
        }
        Ok(Self { rules })
    }

    /// Expand every abbreviation in `text`, rule by rule
    pub fn expand(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            out = match rule {
                Rule::Verbatim { pattern, full } => pattern
                    .replace_all(&out, |_: &Captures<'_>| full.clone())
                    .into_owned(),
                Rule::Contextual { pattern, full } => pattern
                    .replace_all(&out, |caps: &Captures<'_>| {
                        let lead = caps.get(1).map_or("", |m| m.as_str());
                        let trail = caps
                            .get(2)
                            .or_else(|| caps.get(3))
                            .map_or("", |m| m.as_str());
                        format!("{lead}{full}{trail}")
                    })
                    .into_owned(),
            };
        }
        out
    }
}

/// Expand abbreviations in the named columns into `{col}_abbv` derived
/// columns, asserted text-typed
pub fn expand_abbreviations(
    cols: &[&str],
    table: &mut Table,
    replacements: &Replacements,
) -> Result<()> {
    let expander = AbbreviationExpander::new(replacements)?;
    for col in cols {
        let derived = map_text(table, col, |text| expander.expand(text))?;
        let name = format!("{col}_abbv");
        table.insert_column(&name, derived)?;
        table.ensure_text(&name)?;
    }
    Ok(())
}

/// Collapse an immediately repeated full-form phrase down to a single
/// occurrence, in place.
///
/// Guards against expansion producing "Oregon Oregon" when the source
/// already spelled the phrase out next to its abbreviation. The match is
/// case-insensitive with optional interleaving whitespace, and it is
/// deliberately scoped to the dictionary's full forms, not to repeated
/// text in general. One pass per phrase.
pub fn collapse_duplicates(
    cols: &[&str],
    table: &mut Table,
    replacements: &Replacements,
) -> Result<()> {
    let mut patterns = Vec::new();
    for phrase in replacements.full_forms() {
        let e = regex::escape(phrase);
        patterns.push(Regex::new(&format!(r"(?i)({e})\s*{e}"))?);
    }
    for col in cols {
        overwrite_text(table, col, |text| {
            let mut out = text.to_string();
            for pattern in &patterns {
                out = pattern
                    .replace_all(&out, |caps: &Captures<'_>| {
                        caps.get(1).map_or("", |m| m.as_str()).to_string()
                    })
                    .into_owned();
            }
            out
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Cell;

    fn states() -> Replacements {
        Replacements::new([("OR", "Oregon"), ("ON", "Ontario"), ("al", "aluminum")])
    }

    fn expand(text: &str) -> String {
        AbbreviationExpander::new(&states()).unwrap().expand(text)
    }

    #[test]
    fn expands_whitespace_bounded_token() {
        assert_eq!(expand("moved to OR last year"), "moved to Oregon last year");
    }

    #[test]
    fn expands_before_punctuation_keeping_the_space() {
        assert_eq!(expand("Portland, OR, USA"), "Portland, Oregon, USA");
        assert_eq!(expand("lives in OR."), "lives in Oregon.");
    }

    #[test]
    fn expands_at_start_of_text() {
        assert_eq!(expand("OR is rainy"), "Oregon is rainy");
    }

    #[test]
    fn expands_parenthesized_and_bracketed() {
        assert_eq!(expand("Salem (OR) office"), "Salem Oregon office");
        assert_eq!(expand("Salem [OR] office"), "Salem Oregon office");
    }

    #[test]
    fn general_matching_is_case_insensitive() {
        assert_eq!(expand("moved to or last year"), "moved to Oregon last year");
    }

    #[test]
    fn uppercase_on_expands_lowercase_on_does_not() {
        assert_eq!(expand("ON Tuesday"), "Ontario Tuesday");
        assert_eq!(expand("on Tuesday"), "on Tuesday");
    }

    #[test]
    fn et_al_is_left_alone() {
        assert_eq!(
            expand("Smith et al. studied al gore"),
            "Smith et al. studied aluminum gore"
        );
    }

    #[test]
    fn embedded_substring_is_not_expanded() {
        assert_eq!(expand("corridor"), "corridor");
        assert_eq!(expand("metal plate"), "metal plate");
    }

    #[test]
    fn collapse_removes_adjacent_duplicate_phrase() {
        let mut table = Table::new();
        table
            .insert_column("t", vec![Cell::from("Oregon oregon winters")])
            .unwrap();
        collapse_duplicates(&["t"], &mut table, &states()).unwrap();
        assert_eq!(
            table.column("t").unwrap()[0],
            Cell::from("Oregon winters")
        );
    }

    #[test]
    fn expansion_then_collapse_leaves_single_phrase() {
        let repl = Replacements::new([("OR", "Oregon")]);
        let mut table = Table::new();
        table
            .insert_column("t", vec![Cell::from("lived in OR Oregon")])
            .unwrap();
        expand_abbreviations(&["t"], &mut table, &repl).unwrap();
        collapse_duplicates(&["t_abbv"], &mut table, &repl).unwrap();
        assert_eq!(
            table.column("t_abbv").unwrap()[0],
            Cell::from("lived in Oregon")
        );
    }

    #[test]
    fn missing_cells_pass_through() {
        let mut table = Table::new();
        table
            .insert_column("t", vec![Cell::Missing, Cell::from("in OR today")])
            .unwrap();
        expand_abbreviations(&["t"], &mut table, &states()).unwrap();
        let derived = table.column("t_abbv").unwrap();
        assert_eq!(derived[0], Cell::Missing);
        assert_eq!(derived[1], Cell::from("in Oregon today"));
    }
}
