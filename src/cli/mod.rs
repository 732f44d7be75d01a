//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{SeedCommand, ValidateCommand};
use std::ffi::OsString;

/// Seed CI pipeline jobs and report inclusion, bridges and needs errors
#[derive(Debug, Parser, Clone)]
#[command(name = "pipeline-seed")]
#[command(version)]
#[command(about = "Seed CI pipeline jobs against a ref and source", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Seed a pipeline and print the per-job outcome
    Seed(SeedCommand),

    /// Validate pipeline records
    Validate(ValidateCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}
