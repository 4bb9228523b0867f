//! Sentence splitting with single-word split correction

use crate::analyze::Analyzer;
use crate::error::{CoreError, Result};
use crate::table::{Cell, Table};

/// Re-join spurious splits: a detected "sentence" that is a single word
/// followed by a sentence starting with a comma is one sentence ("Fig"
/// then ", 3 shows..." becomes "Fig, 3 shows..."). The merge looks one
/// sentence ahead and consumes both.
fn merge_single_word_splits(sentences: Vec<String>) -> Vec<String> {
    let mut corrected = Vec::with_capacity(sentences.len());
    let mut i = 0;

    while i + 1 < sentences.len() {
        let current = sentences[i].trim();
        let next = sentences[i + 1].trim();

        if !current.contains(' ') && next.starts_with(',') {
            corrected.push(format!("{current}{next}"));
            i += 2;
        } else {
            corrected.push(current.to_string());
            i += 1;
        }
    }

    if i < sentences.len() {
        corrected.push(sentences[i].trim().to_string());
    }

    corrected
}

/// Split the named columns into sentences, producing `{col}_split` list
/// columns
pub fn split_sentences(cols: &[&str], table: &mut Table, analyzer: &dyn Analyzer) -> Result<()> {
    for col in cols {
        let cells = table
            .column(col)
            .ok_or_else(|| CoreError::UnknownColumn(col.to_string()))?;
        let derived: Vec<Cell> = cells
            .iter()
            .map(|cell| match cell {
                Cell::Text(text) => {
                    Cell::List(merge_single_word_splits(analyzer.sentences(text)))
                }
                other => other.clone(),
            })
            .collect();
        table.insert_column(&format!("{col}_split"), derived)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::EnglishAnalyzer;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn merges_single_word_before_comma() {
        let merged = merge_single_word_splits(strings(&["Fig", ", 3 shows the result."]));
        assert_eq!(merged, strings(&["Fig, 3 shows the result."]));
    }

    #[test]
    fn merge_consumes_both_sentences() {
        let merged = merge_single_word_splits(strings(&[
            "Fig",
            ", 3 shows the result.",
            "A second sentence.",
        ]));
        assert_eq!(
            merged,
            strings(&["Fig, 3 shows the result.", "A second sentence."])
        );
    }

    #[test]
    fn multiword_sentences_are_untouched() {
        let input = strings(&["First one.", "Second one."]);
        assert_eq!(merge_single_word_splits(input.clone()), input);
    }

    #[test]
    fn single_sentence_is_kept() {
        let merged = merge_single_word_splits(strings(&["  Only one.  "]));
        assert_eq!(merged, strings(&["Only one."]));
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(merge_single_word_splits(Vec::new()).is_empty());
    }

    #[test]
    fn split_column_holds_sentence_lists() {
        let analyzer = EnglishAnalyzer::new();
        let mut table = Table::new();
        table
            .insert_column(
                "abstract",
                vec![
                    Cell::from("We ran the trial. It succeeded."),
                    Cell::Missing,
                ],
            )
            .unwrap();

        split_sentences(&["abstract"], &mut table, &analyzer).unwrap();

        let cells = table.column("abstract_split").unwrap();
        assert_eq!(
            cells[0],
            Cell::List(strings(&["We ran the trial.", "It succeeded."]))
        );
        assert_eq!(cells[1], Cell::Missing);
    }
}
