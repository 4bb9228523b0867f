//! Benchmarks for record reconstruction and abbreviation expansion
//!
//! Run with: cargo bench --bench reconstruct

use criterion::{criterion_group, criterion_main, Criterion};
use pubtidy_core::{
    reconstruct, AbbreviationExpander, Cell, FieldMap, Replacements, Table,
};
use std::hint::black_box;

fn export_fixture(records: usize) -> Vec<Cell> {
    let mut lines = Vec::with_capacity(records * 6);
    for i in 0..records {
        lines.push(Cell::from(format!("PMID- {i}").as_str()));
        lines.push(Cell::from("TI  - Seasonal rainfall variability"));
        lines.push(Cell::from(
            "AB  - We measured rainfall across the state over a decade",
        ));
        lines.push(Cell::from("      and report seasonal totals by county."));
        lines.push(Cell::Missing);
    }
    lines
}

fn bench_reconstruct(c: &mut Criterion) {
    let fields = FieldMap::pubmed();
    let lines = export_fixture(500);

    c.bench_function("reconstruct_500_records", |b| {
        b.iter(|| reconstruct(black_box(&lines), &fields, Table::new()))
    });
}

fn bench_expand(c: &mut Criterion) {
    let replacements = Replacements::new([
        ("OR", "Oregon"),
        ("ON", "Ontario"),
        ("al", "Alabama"),
        ("WA", "Washington"),
    ]);
    let expander = AbbreviationExpander::new(&replacements).unwrap();
    let text = "Rainfall in OR and WA differed; Smith et al. report (ON) trends.";

    c.bench_function("expand_abbreviations", |b| {
        b.iter(|| expander.expand(black_box(text)))
    });
}

criterion_group!(benches, bench_reconstruct, bench_expand);
criterion_main!(benches);
