//! Command line argument parsing for the arabic-stemmer CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// arabic-stemmer - Arabic light stemming and root extraction
#[derive(Parser, Debug, Clone)]
#[command(name = "arabic-stemmer")]
#[command(about = "Arabic light stemmer and root extractor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StemmerArgs {
    /// Verbosity level (-v for info, -vv for debug)
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

    /// Stemmer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "ARABIC_STEMMER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Stopword table replacing the bundled one (JSON)
    #[arg(long, value_name = "STOPWORDS_FILE")]
    pub stopwords: Option<PathBuf>,

    /// Root list replacing the configured one (one root per line)
    #[arg(long, value_name = "ROOTS_FILE")]
    pub roots: Option<PathBuf>,

    /// Verb list replacing the bundled one (one verb per line)
    #[arg(long, value_name = "VERBS_FILE")]
    pub verbs: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl StemmerArgs {
    /// Get the effective verbosity level (0=quiet, 1=normal, 2=verbose, 3+=debug)
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the light stem of each word
    Stem(WordsArgs),

    /// Print the root of each word
    Root(WordsArgs),

    /// Print the full stemming trace of each word
    Analyze(WordsArgs),

    /// List every segmentation of each word with its stem and root
    Segment(WordsArgs),
}

/// Words to process, from the command line or a file.
#[derive(Parser, Debug, Clone)]
pub struct WordsArgs {
    /// Words to process
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Read words from a file, whitespace separated
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
