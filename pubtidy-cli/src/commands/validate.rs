//! Validate command implementation

use crate::config::PipelineConfig;
use anyhow::{Context, Result};
use clap::Args;
use pubtidy_core::AbbreviationExpander;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Pipeline configuration file to check
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let config = PipelineConfig::load(&self.config)?;

        let fields = config
            .field_map()
            .context("field map is not usable")?;
        let replacements = config.replacements();
        AbbreviationExpander::new(&replacements)
            .context("abbreviation dictionary is not usable")?;

        println!("✓ Configuration is valid: {}", self.config.display());
        println!("  {} field tag(s)", fields.len());
        println!("  {} abbreviation(s)", config.abbreviations.len());
        println!("  cleaning columns: {}", config.cleaning.columns.join(", "));

        Ok(())
    }
}
