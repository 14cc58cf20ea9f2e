//! Command implementations for all qbank commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{failure_modes, fix, rebalance, rebuild, scan, validate};
use qbank_core::error::Result;
use qbank_core::trace_time;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Rebalance(args) => rebalance::execute(ctx, args),
            Commands::Fix(args) => fix::execute(ctx, args),
            Commands::FixFailureModes => failure_modes::execute(ctx),
            Commands::Rebuild(args) => rebuild::execute(ctx, args),
            Commands::Scan(args) => scan::execute(ctx, args),
            Commands::Validate(args) => validate::execute(ctx, args),
            Commands::ValidateBatch(args) => validate::execute_batch(ctx, args),
        };
        trace_time!(ctx.start, "execute_command");
        result
    }
}
