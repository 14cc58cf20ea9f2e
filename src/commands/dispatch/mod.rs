//! Command dispatch logic for qbank

use std::time::Instant;

use crate::cli::paths::resolve_root_path;
use crate::cli::Cli;
use qbank_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());

    debug!(root = %root.display(), elapsed = ?start.elapsed(), "resolve_root");

    let ctx = CommandContext::load(cli, &root, start)?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
