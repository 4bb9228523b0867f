//! Integration tests for the pubtidy CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn test_process_default_json() {
    let mut cmd = Command::cargo_bin("pubtidy").unwrap();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("pubmed-sample.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("31452104"))
        .stdout(predicate::str::contains(
            "Rainfall variability and crop yields in OR, USA.",
        ))
        // wrapped abstract lines merged back into one field
        .stdout(predicate::str::contains(
            "We measured rainfall at 14 stations over a decade.",
        ))
        // the uppercase section label was stripped in place
        .stdout(predicate::str::contains("BACKGROUND").not())
        // derived columns are present
        .stdout(predicate::str::contains("title_lowercase_abbv"))
        .stdout(predicate::str::contains("title_normalized"));
}

#[test]
fn test_process_tsv_output() {
    let mut cmd = Command::cargo_bin("pubtidy").unwrap();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("pubmed-sample.txt"))
        .arg("-f")
        .arg("tsv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pmid\ttitle"))
        .stdout(predicate::str::contains("31452105\tA dry year in the valley"));
}

#[test]
fn test_process_text_output() {
    let mut cmd = Command::cargo_bin("pubtidy").unwrap();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("pubmed-sample.txt"))
        .arg("-f")
        .arg("text");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pmid: 31452104"))
        .stdout(predicate::str::contains("author: Lee, Casey"));
}

#[test]
fn test_process_with_custom_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("pipeline.toml");
    let output_path = temp_dir.path().join("records.json");

    fs::write(
        &config_path,
        r#"
[[abbreviations]]
abbr = "OR"
full = "Oregon"

[cleaning]
columns = ["title", "abstract"]
strip_heading_labels = true
normalize_whitespace = true
lowercase = true
expand_abbreviations = true
collapse_duplicates = true
normalize = true
split_sentences = true

[output]
default_format = "json"
pretty_json = false
"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("pubtidy").unwrap();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg(fixture_path("pubmed-sample.txt"))
        .arg("-c")
        .arg(&config_path)
        .arg("-o")
        .arg(&output_path);

    cmd.assert().success();

    let written = fs::read_to_string(&output_path).unwrap();
    let records: serde_json::Value = serde_json::from_str(&written).unwrap();

    assert_eq!(
        records[0]["title_lowercase_abbv"],
        "rainfall variability and crop yields in oregon, usa."
    );
    let sentences = records[0]["abstract_split"].as_array().unwrap();
    assert_eq!(sentences.len(), 3);
    assert_eq!(sentences[0], "Annual rainfall differs widely across the state.");
    // the second record has no abstract: null throughout
    assert!(records[1]["abstract_split"].is_null());
}

#[test]
fn test_generate_config_then_validate() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("pipeline.toml");

    Command::cargo_bin("pubtidy")
        .unwrap()
        .arg("generate-config")
        .arg("-o")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration template written"));

    Command::cargo_bin("pubtidy")
        .unwrap()
        .arg("validate")
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_rejects_duplicate_tags() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("pipeline.toml");
    fs::write(
        &config_path,
        r#"
[[fields]]
key = "a"
tag = "TI"

[[fields]]
key = "b"
tag = "TI"
"#,
    )
    .unwrap();

    Command::cargo_bin("pubtidy")
        .unwrap()
        .arg("validate")
        .arg("-c")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate field tag"));
}

#[test]
fn test_no_matching_input_fails() {
    let mut cmd = Command::cargo_bin("pubtidy").unwrap();
    cmd.arg("process")
        .arg("-q")
        .arg("-i")
        .arg("/nonexistent/dir/*.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No input files found"));
}

#[test]
fn test_list_subcommands() {
    Command::cargo_bin("pubtidy")
        .unwrap()
        .arg("list")
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("PMID"));

    Command::cargo_bin("pubtidy")
        .unwrap()
        .arg("list")
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("tsv"));
}
