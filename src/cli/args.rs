//! Command line argument parsing for the Taxon CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Taxon - a rule-based named-entity type classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "taxon")]
#[command(about = "A rule-based named-entity type classifier for Rust")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TaxonArgs {
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

    /// Lexicon JSON file overriding the built-in rule data
    #[arg(short, long, value_name = "LEXICON_FILE")]
    pub lexicon_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TaxonArgs {
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
    /// Classify a text span end to end
    Classify(ClassifyArgs),

    /// Guess whether a text span names a person or an organization
    Guess(GuessArgs),

    /// Subclassify organization text as university or company
    Subtype(SubtypeArgs),

    /// Show statistics for the loaded lexicon
    Lexicon,
}

/// Arguments for end-to-end classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// The text to classify
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// JSON file of upstream entity spans over the text
    #[arg(short, long, value_name = "ENTITIES_FILE")]
    pub entities_file: Option<PathBuf>,
}

/// Arguments for entity type guessing
#[derive(Parser, Debug, Clone)]
pub struct GuessArgs {
    /// The text to type
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for organization subclassification
#[derive(Parser, Debug, Clone)]
pub struct SubtypeArgs {
    /// The organization text to subclassify
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
