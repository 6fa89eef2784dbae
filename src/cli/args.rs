//! Command line argument parsing for the respell CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// respell - weighted-edit spelling correction
#[derive(Parser, Debug, Clone)]
#[command(name = "respell")]
#[command(about = "Correct tokens against a dictionary using a weighted character-edit table")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RespellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
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

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RespellArgs {
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
    /// Correct one or more tokens
    Correct(CorrectArgs),

    /// Show statistics about a model and dictionary
    Stats(StatsArgs),
}

/// Arguments for correcting tokens
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Path to the tab-separated edit-weight table
    #[arg(short, long, value_name = "MATRIX_FILE")]
    pub matrix: PathBuf,

    /// Path to the dictionary file (one word per line)
    #[arg(short, long, value_name = "DICT_FILE")]
    pub dictionary: PathBuf,

    /// Abort a search once the cheapest unexpanded word costs more than this
    #[arg(long, value_name = "COST")]
    pub max_cost: Option<f64>,

    /// Abort a search once this many words have been visited
    #[arg(long, value_name = "N", default_value_t = 1_000_000)]
    pub max_visited: usize,

    /// Abort a search once this many words have been expanded
    #[arg(long, value_name = "N")]
    pub max_expansions: Option<usize>,

    /// Tokens to correct
    #[arg(value_name = "TOKEN", required = true)]
    pub tokens: Vec<String>,
}

/// Arguments for showing model/dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the tab-separated edit-weight table
    #[arg(short, long, value_name = "MATRIX_FILE")]
    pub matrix: PathBuf,

    /// Path to the dictionary file (one word per line)
    #[arg(short, long, value_name = "DICT_FILE")]
    pub dictionary: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
