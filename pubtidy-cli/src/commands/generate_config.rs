//! Generate-config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        let template = template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the template to match your export and dictionary");
        println!("2. Check it:");
        println!("   pubtidy validate --config {}", self.output.display());
        println!("3. Use it:");
        println!(
            "   pubtidy process -i export.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// The commented configuration template
fn template() -> String {
    r#"# pubtidy pipeline configuration

# Field tags of the export format. Each entry maps an output column name
# (key) to the fixed-width tag at the start of a line (at most 4
# characters). Omit this section entirely to use the built-in PubMed set.

[[fields]]
key = "pmid"
tag = "PMID"

[[fields]]
key = "title"
tag = "TI"

[[fields]]
key = "abstract"
tag = "AB"

[[fields]]
key = "journal"
tag = "JT"

[[fields]]
key = "author"
tag = "FAU"

[[fields]]
key = "published"
tag = "DP"

[[fields]]
key = "language"
tag = "LA"

[[fields]]
key = "doi"
tag = "LID"

# Abbreviations expanded during cleaning, applied in order. Put longer
# abbreviations before shorter ones they contain. Matching is
# case-insensitive, except that "ON" only expands in all-uppercase and
# "al" never matches the "al" of "et al.".

# [[abbreviations]]
# abbr = "OR"
# full = "Oregon"

# [[abbreviations]]
# abbr = "ON"
# full = "Ontario"

# [[abbreviations]]
# abbr = "al"
# full = "Alabama"

[cleaning]
# Reconstructed columns the pipeline runs over.
columns = ["title", "abstract"]
# Strip uppercase section labels like "RESULTS:" from column starts.
strip_heading_labels = true
# Collapse whitespace runs and double-hyphens in place.
normalize_whitespace = true
# Derive {col}_lowercase columns.
lowercase = true
# Derive {col}_abbv columns from the abbreviation dictionary.
expand_abbreviations = true
# Collapse full-form phrases duplicated by expansion.
collapse_duplicates = true
# Derive {col}_normalized lemma columns.
normalize = true
# Derive {col}_split sentence-list columns.
split_sentences = false

[output]
# json, tsv or text.
default_format = "json"
pretty_json = true
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use tempfile::TempDir;

    #[test]
    fn template_round_trips_through_the_config_loader() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pipeline.toml");

        let args = GenerateConfigArgs {
            output: path.clone(),
        };
        args.execute().unwrap();

        let config = PipelineConfig::load(&path).unwrap();
        assert_eq!(config.field_map().unwrap().key_for_tag("PMID"), Some("pmid"));
        assert!(config.cleaning.lowercase);
        assert_eq!(config.output.default_format, "json");
    }

    #[test]
    fn write_failure_reports_the_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/pipeline.toml"),
        };
        let message = args.execute().unwrap_err().to_string();
        assert!(message.contains("Failed to write"));
    }
}
