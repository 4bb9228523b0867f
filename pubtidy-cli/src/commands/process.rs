//! Process command implementation

use crate::config::{CleaningConfig, PipelineConfig};
use crate::input::{read_export_lines, resolve_patterns};
use crate::output::{JsonWriter, TableWriter, TextWriter, TsvWriter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use pubtidy_core::{
    collapse_duplicates, expand_abbreviations, lowercase, normalize, normalize_whitespace,
    reconstruct, split_sentences, strip_heading_labels, EnglishAnalyzer, Replacements, Table,
};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input export files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pipeline configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON array of records
    Json,
    /// Tab-separated values with a header row
    Tsv,
    /// Human-readable record blocks
    Text,
}

impl OutputFormat {
    fn from_config(name: &str) -> Result<Self> {
        match name {
            "json" => Ok(OutputFormat::Json),
            "tsv" => Ok(OutputFormat::Tsv),
            "text" => Ok(OutputFormat::Text),
            other => anyhow::bail!("unknown output format in config: {other}"),
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        let config = match &self.config {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };
        let fields = config
            .field_map()
            .context("invalid field map in configuration")?;
        let replacements = config.replacements();

        let files = resolve_patterns(&self.input)?;
        log::info!("Processing {} input file(s)", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.start(files.len() as u64);

        let mut table = Table::new();
        for path in &files {
            let lines = read_export_lines(path)?;
            let before = table.rows();
            table = reconstruct(&lines, &fields, table);
            log::debug!(
                "{}: {} lines, {} records",
                path.display(),
                lines.len(),
                table.rows() - before
            );
            progress.file_completed(
                &path.file_name().unwrap_or_default().to_string_lossy(),
                table.rows() - before,
            );
        }
        progress.finish(table.rows());

        run_cleaning(&mut table, &config.cleaning, &replacements)?;

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_config(&config.output.default_format)?,
        };
        let sink: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };
        let mut writer: Box<dyn TableWriter> = match format {
            OutputFormat::Json => Box::new(JsonWriter::new(sink, config.output.pretty_json)),
            OutputFormat::Tsv => Box::new(TsvWriter::new(sink)),
            OutputFormat::Text => Box::new(TextWriter::new(sink)),
        };
        writer.write_table(&table)?;

        log::info!("Wrote {} record(s)", table.rows());
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .ok();
        }

        Ok(())
    }
}

/// Run the enabled cleaning stages over the configured columns.
///
/// In-place stages run first on the raw column (heading labels need the
/// original casing), then each derivation feeds the next: lowercase,
/// abbreviation expansion, duplicate collapse, lemma normalization and
/// sentence splitting.
fn run_cleaning(
    table: &mut Table,
    cleaning: &CleaningConfig,
    replacements: &Replacements,
) -> Result<()> {
    let analyzer = EnglishAnalyzer::new();

    for column in &cleaning.columns {
        if table.column(column).is_none() {
            log::warn!("cleaning column '{column}' not found in parsed records, skipping");
            continue;
        }
        let column = column.as_str();

        if cleaning.strip_heading_labels {
            strip_heading_labels(&[column], table)?;
        }
        if cleaning.normalize_whitespace {
            normalize_whitespace(&[column], table)?;
        }

        let mut current = column.to_string();
        if cleaning.lowercase {
            lowercase(&[column], table)?;
            current = format!("{column}_lowercase");
        }
        if cleaning.expand_abbreviations {
            expand_abbreviations(&[current.as_str()], table, replacements)?;
            current = format!("{current}_abbv");
            if cleaning.collapse_duplicates {
                collapse_duplicates(&[current.as_str()], table, replacements)?;
            }
        }
        if cleaning.normalize {
            normalize(&[current.as_str()], table, &analyzer)?;
        }
        if cleaning.split_sentences {
            // split the cleaned original-case column: the segmenter keys
            // on capitalized sentence openers
            split_sentences(&[column], table, &analyzer)?;
        }
    }

    Ok(())
}
