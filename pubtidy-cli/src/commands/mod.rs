//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reconstruct records from export files and run the cleaning pipeline
    Process(process::ProcessArgs),

    /// Check that a pipeline configuration is usable
    Validate(validate::ValidateArgs),

    /// Write a commented pipeline configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List built-in components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the built-in field-tag entries
    Fields,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Fields => {
                println!("Built-in field tags (key <- tag):");
                for entry in pubtidy_core::FieldMap::pubmed().entries() {
                    println!("  {:<10} <- {}", entry.key, entry.tag);
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  json - array of records, missing cells as null");
                println!("  tsv  - header row plus one tab-separated line per record");
                println!("  text - human-readable record blocks");
            }
        }
        Ok(())
    }
}
