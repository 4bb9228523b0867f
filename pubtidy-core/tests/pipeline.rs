//! End-to-end: reconstruct an export, then run the cleaning chain

use pubtidy_core::{
    collapse_duplicates, expand_abbreviations, lowercase, normalize, normalize_whitespace,
    reconstruct, split_sentences, strip_heading_labels, Cell, EnglishAnalyzer, FieldMap,
    FieldSpec, Replacements, Table,
};

fn export_lines() -> Vec<Cell> {
    vec![
        Cell::from("PMID- 123"),
        Cell::from("TI  - Rainfall in OR, USA"),
        Cell::from("AB  - RESULTS: We measured   rainfall"),
        Cell::from("      across the state. Totals rose."),
        Cell::Missing,
        Cell::from("PMID- 456"),
        Cell::from("TI  - A dry year"),
        Cell::Missing,
    ]
}

fn fields() -> FieldMap {
    FieldMap::new([
        FieldSpec::new("pmid", "PMID"),
        FieldSpec::new("title", "TI"),
        FieldSpec::new("abstract", "AB"),
    ])
    .unwrap()
}

fn text(table: &Table, col: &str, row: usize) -> String {
    table
        .get(col, row)
        .and_then(Cell::as_text)
        .unwrap_or_default()
        .to_string()
}

#[test]
fn reconstruct_then_clean() {
    let mut table = reconstruct(&export_lines(), &fields(), Table::new());
    assert_eq!(table.rows(), 2);
    assert_eq!(text(&table, "pmid", 0), "123");
    assert_eq!(
        text(&table, "abstract", 0),
        "RESULTS: We measured   rainfall across the state. Totals rose."
    );

    let replacements = Replacements::new([("OR", "Oregon")]);
    let analyzer = EnglishAnalyzer::new();

    strip_heading_labels(&["abstract"], &mut table).unwrap();
    normalize_whitespace(&["abstract"], &mut table).unwrap();
    lowercase(&["title", "abstract"], &mut table).unwrap();
    expand_abbreviations(&["title_lowercase"], &mut table, &replacements).unwrap();
    collapse_duplicates(&["title_lowercase_abbv"], &mut table, &replacements).unwrap();
    normalize(&["title_lowercase_abbv"], &mut table, &analyzer).unwrap();
    split_sentences(&["abstract"], &mut table, &analyzer).unwrap();

    // heading label and whitespace cleaned in place
    assert_eq!(
        text(&table, "abstract", 0),
        "We measured rainfall across the state. Totals rose."
    );
    // lowercased copies retain the originals
    assert_eq!(text(&table, "title", 0), "Rainfall in OR, USA");
    assert_eq!(text(&table, "title_lowercase", 0), "rainfall in or, usa");
    // the state code expanded in context
    assert_eq!(
        text(&table, "title_lowercase_abbv", 0),
        "rainfall in oregon, usa"
    );
    // normalized column drops stopwords and punctuation
    assert_eq!(text(&table, "title_normalized", 0), "rainfall oregon usa");
    // sentences split into a list column
    assert_eq!(
        table.get("abstract_split", 0),
        Some(&Cell::List(vec![
            "We measured rainfall across the state.".to_string(),
            "Totals rose.".to_string(),
        ]))
    );

    // second record: no abstract wrap, same derivations
    assert_eq!(text(&table, "title_lowercase_abbv", 1), "a dry year");
}

#[test]
fn transforms_keep_all_columns_aligned() {
    let mut table = reconstruct(&export_lines(), &fields(), Table::new());
    let replacements = Replacements::new([("OR", "Oregon")]);

    lowercase(&["title"], &mut table).unwrap();
    expand_abbreviations(&["title_lowercase"], &mut table, &replacements).unwrap();

    let rows = table.rows();
    for name in table.column_names().collect::<Vec<_>>() {
        assert_eq!(table.column(name).unwrap().len(), rows, "column {name}");
    }
}
