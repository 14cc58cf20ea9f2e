//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::paths::resolve_file;
use crate::cli::Cli;
use qbank_core::config::BankConfig;
use qbank_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub config: BankConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    /// Build the context, loading `qbank.toml` from the root when present
    pub fn load(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Result<Self> {
        let config = BankConfig::load_or_default(root)?;
        Ok(Self {
            cli,
            root,
            config,
            start,
        })
    }

    pub fn seed_dir(&self) -> PathBuf {
        self.config.seed_dir(self.root)
    }

    pub fn batch_dir(&self) -> PathBuf {
        self.config.batch_dir(self.root)
    }

    /// Resolve a user-supplied file against the root
    pub fn resolve(&self, file: &Path) -> PathBuf {
        resolve_file(self.root, file)
    }

    /// Whether human-readable chatter should be printed
    pub fn chatty(&self) -> bool {
        !self.cli.quiet
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("qbank {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A curation toolkit for JSON quiz question banks.");
        println!();
        println!("Run `qbank --help` for usage information.");
        Ok(())
    }
}
