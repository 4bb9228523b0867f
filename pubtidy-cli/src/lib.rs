//! pubtidy CLI library
//!
//! This library provides the command-line interface for reconstructing
//! records from line-oriented bibliographic exports and running the
//! text-cleaning pipeline over them.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
