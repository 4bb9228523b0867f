//! Pipeline configuration
//!
//! A single TOML file describes the whole run: which tags the export
//! uses, which abbreviations to expand, which columns to clean and with
//! which stages, and how to write the result.

use anyhow::{Context, Result};
use pubtidy_core::{FieldMap, FieldSpec, Replacements};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level pipeline configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct PipelineConfig {
    /// Field-tag entries; the built-in PubMed set when omitted
    #[serde(default)]
    pub fields: Vec<FieldSpec>,

    /// Abbreviation dictionary, applied in order
    #[serde(default)]
    pub abbreviations: Vec<AbbreviationEntry>,

    /// Cleaning pipeline configuration
    #[serde(default)]
    pub cleaning: CleaningConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// One abbreviation to full-form entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AbbreviationEntry {
    /// The abbreviation as it appears in text
    pub abbr: String,
    /// Its replacement
    pub full: String,
}

/// Which columns are cleaned, and with which stages
#[derive(Debug, Deserialize, Serialize)]
pub struct CleaningConfig {
    /// Reconstructed columns the pipeline runs over
    pub columns: Vec<String>,

    /// Strip uppercase section labels ("RESULTS:") from column starts
    pub strip_heading_labels: bool,

    /// Collapse whitespace runs and double-hyphens in place
    pub normalize_whitespace: bool,

    /// Derive `{col}_lowercase` columns
    pub lowercase: bool,

    /// Derive `{col}_abbv` columns from the abbreviation dictionary
    pub expand_abbreviations: bool,

    /// Collapse full-form phrases duplicated by expansion
    pub collapse_duplicates: bool,

    /// Derive `{col}_normalized` lemma columns
    pub normalize: bool,

    /// Derive `{col}_split` sentence-list columns
    pub split_sentences: bool,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            columns: vec!["title".to_string(), "abstract".to_string()],
            strip_heading_labels: true,
            normalize_whitespace: true,
            lowercase: true,
            expand_abbreviations: true,
            collapse_duplicates: true,
            normalize: true,
            split_sentences: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Format used when none is given on the command line
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "json".to_string(),
            pretty_json: true,
        }
    }
}

impl PipelineConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// The validated field map this configuration describes
    pub fn field_map(&self) -> pubtidy_core::Result<FieldMap> {
        if self.fields.is_empty() {
            Ok(FieldMap::pubmed())
        } else {
            FieldMap::new(self.fields.iter().cloned())
        }
    }

    /// The ordered replacement dictionary
    pub fn replacements(&self) -> Replacements {
        Replacements::new(
            self.abbreviations
                .iter()
                .map(|e| (e.abbr.clone(), e.full.clone())),
        )
    }
}
