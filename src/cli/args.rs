//! Command line argument parsing for WordNet CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::wordnet::SynsetId;

/// WordNet - taxonomy queries over synsets and hypernyms
#[derive(Parser, Debug, Clone)]
#[command(name = "wordnet")]
#[command(about = "Synset lookup and lowest-common-ancestor queries over a noun taxonomy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordNetArgs {
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

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDNET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Synset data file (overrides the config file)
    #[arg(long, value_name = "SYNSETS_FILE")]
    pub synsets: Option<PathBuf>,

    /// Hypernym data file (overrides the config file)
    #[arg(long, value_name = "HYPERNYMS_FILE")]
    pub hypernyms: Option<PathBuf>,

    /// Skip checking that hypernyms only reference defined synsets
    #[arg(long)]
    pub no_verify_references: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordNetArgs {
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
    /// Load both data files and report what was loaded
    Validate,

    /// Show the words of a synset
    Lookup(LookupArgs),

    /// Find the synsets containing a word
    Find(FindArgs),

    /// Find the synsets containing each of several words
    #[command(name = "find-many")]
    FindMany(FindManyArgs),

    /// Lowest common ancestors of two synsets
    Lca(LcaArgs),
}

/// Arguments for synset lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Synset id
    #[arg(value_name = "ID")]
    pub id: SynsetId,
}

/// Arguments for single-word search
#[derive(Parser, Debug, Clone)]
pub struct FindArgs {
    /// Word to search for
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for multi-word search
#[derive(Parser, Debug, Clone)]
pub struct FindManyArgs {
    /// Words to search for
    #[arg(value_name = "WORD", required = true, num_args = 1..)]
    pub words: Vec<String>,
}

/// Arguments for lowest-common-ancestor queries
#[derive(Parser, Debug, Clone)]
pub struct LcaArgs {
    #[arg(value_name = "ID1")]
    pub first: SynsetId,

    #[arg(value_name = "ID2")]
    pub second: SynsetId,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
