//! Command line argument parsing for the Falcata CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Falcata - corpus-ranked spelling suggestion
#[derive(Parser, Debug, Clone)]
#[command(name = "falcata")]
#[command(about = "A corpus-ranked spelling suggester for the command line")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FalcataArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Path to the corpus text file
    #[arg(short, long, env = "FALCATA_CORPUS")]
    pub corpus: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FalcataArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Suggest the single best correction for a word
    Suggest(SuggestArgs),

    /// Suggest a ranked list of corrections for a word
    #[command(name = "suggest-list")]
    SuggestList(SuggestListArgs),

    /// Check whether a word is spelled correctly
    Check(CheckArgs),

    /// Show corpus index statistics
    Stats,
}

/// Arguments for single-best suggestion
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// The word to correct
    pub word: String,
}

/// Arguments for ranked-list suggestion
#[derive(Parser, Debug, Clone)]
pub struct SuggestListArgs {
    /// The word to correct
    pub word: String,

    /// Maximum number of suggestions to return
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the spelling check
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// The word to check
    pub word: String,
}

/// Output format for CLI results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}
