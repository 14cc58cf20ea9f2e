//! Command argument structures

use std::path::PathBuf;

use clap::Args;

/// Arguments for the rebalance command.
#[derive(Args, Debug)]
pub struct RebalanceArgs {
    /// Seed file to balance (default: the configured default grade's seed file)
    pub file: Option<PathBuf>,

    /// Maximum questions kept per level (default: targets.level_cap)
    #[arg(long)]
    pub cap: Option<usize>,
}

/// Arguments for the fix command.
#[derive(Args, Debug)]
pub struct FixArgs {
    /// Report changes without writing files
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the rebuild command.
#[derive(Args, Debug)]
pub struct RebuildArgs {
    /// Grade whose batch files are merged
    pub grade: u32,
}

/// Arguments for the scan command.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Files to scan (default: every seed file)
    pub files: Vec<PathBuf>,
}

/// Arguments for the validate command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Seed files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Expected number of questions per file (default: targets.total)
    #[arg(long)]
    pub target_total: Option<usize>,

    /// Expected number of questions per level (default: targets.per_level)
    #[arg(long)]
    pub target_level: Option<usize>,
}

/// Arguments for the validate-batch command.
#[derive(Args, Debug)]
pub struct ValidateBatchArgs {
    /// Batch files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}
