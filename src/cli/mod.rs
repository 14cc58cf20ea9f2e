//! CLI argument parsing for qbank
//!
//! Global flags: --root, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod format;
pub mod output;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::{FixArgs, RebalanceArgs, RebuildArgs, ScanArgs, ValidateArgs, ValidateBatchArgs};
pub use output::OutputFormat;
use output::parse_output_format;

/// Qbank - quiz question bank curation toolkit
#[derive(Parser, Debug)]
#[command(name = "qbank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory holding qbank.toml and the seed content
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug detail and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, qbank_core=trace)
    #[arg(long, global = true, env = "QBANK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level qbank commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cap a seed file at N questions per level
    Rebalance(RebalanceArgs),

    /// Normalize difficulty labels and rewrite blind-mode questions in batch files
    Fix(FixArgs),

    /// Pad or trim every batch record to exactly three failure modes
    FixFailureModes,

    /// Merge a grade's batch files into its seed file
    Rebuild(RebuildArgs),

    /// Report questions that depend on their hidden answer choices
    Scan(ScanArgs),

    /// Validate consolidated seed files
    Validate(ValidateArgs),

    /// Validate batch files
    ValidateBatch(ValidateBatchArgs),
}
