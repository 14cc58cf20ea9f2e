//! `qbank rebalance [FILE]` - cap a seed file per level

use serde::Serialize;

use crate::cli::args::RebalanceArgs;
use crate::cli::format::print_json;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format;
use qbank_core::balance::{balance, LevelCounts};
use qbank_core::bank::{load_collection, save_collection, seed_path};
use qbank_core::bail_usage;
use qbank_core::error::Result;

#[derive(Debug, Serialize)]
struct RebalanceReport {
    path: String,
    cap: usize,
    kept: usize,
    dropped: usize,
    counts: LevelCounts,
}

#[tracing::instrument(skip_all)]
pub fn execute(ctx: &CommandContext, args: &RebalanceArgs) -> Result<()> {
    let path = match &args.file {
        Some(file) => ctx.resolve(file),
        None => seed_path(&ctx.seed_dir(), ctx.config.targets.default_grade),
    };
    let cap = args.cap.unwrap_or(ctx.config.targets.level_cap);
    if cap == 0 {
        bail_usage!("--cap must be at least 1");
    }

    let records = load_collection(&path)?;
    let balanced = balance(records, cap, LevelCounts::new());
    save_collection(&path, &balanced.records)?;

    tracing::info!(
        path = %path.display(),
        kept = balanced.records.len(),
        dropped = balanced.dropped,
        "rebalance"
    );

    let report = RebalanceReport {
        path: path.display().to_string(),
        cap,
        kept: balanced.records.len(),
        dropped: balanced.dropped,
        counts: balanced.counts,
    };

    output_by_format!(ctx.cli.format,
        json => { print_json(&report)? },
        human => {
            println!("Balanced {}. New counts:", report.path);
            for (level, count) in report.counts.iter() {
                println!("Level {}: {} questions", level, count);
            }
            if report.counts.out_of_range > 0 {
                println!(
                    "Out-of-range levels: {} questions (kept)",
                    report.counts.out_of_range
                );
            }
        }
    );
    Ok(())
}
