//! `qbank fix` - normalize difficulty and rewrite blind-mode questions
//! across every batch file

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::cli::args::FixArgs;
use crate::cli::format::print_json;
use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format;
use qbank_core::bank::{discover_batches, load_collection, save_collection};
use qbank_core::error::{QbankError, Result};
use qbank_core::fix::{fix_collection, FixReport};

#[derive(Debug, Serialize)]
struct FileFix {
    path: String,
    #[serde(flatten)]
    report: FixReport,
}

#[derive(Debug, Serialize)]
struct FixSummary {
    dry_run: bool,
    files_processed: usize,
    difficulty_fixes: usize,
    blind_mode_fixes: usize,
    files: Vec<FileFix>,
}

fn print_file(file: &FileFix, dry_run: bool) {
    let name = Path::new(&file.path)
        .file_name()
        .map_or(file.path.clone(), |n| n.to_string_lossy().into_owned());

    if dry_run {
        for fix in &file.report.difficulty {
            println!(
                "  DIFF: [{}] -> [{}] (level {})",
                fix.from.as_deref().unwrap_or("none"),
                fix.to,
                fix.level
            );
        }
        for fix in &file.report.blind {
            println!("  BLIND: {}", fix.before);
            println!("      -> {}", fix.after);
        }
    }

    let action = if dry_run { "Would fix" } else { "Fixed" };
    println!(
        "{} {}: {} difficulty, {} blind-mode",
        action,
        name,
        file.report.difficulty.len(),
        file.report.blind.len()
    );
}

fn print_summary(summary: &FixSummary) {
    println!();
    println!("{}Summary:", if summary.dry_run { "DRY RUN - " } else { "" });
    println!("  Files processed: {}", summary.files_processed);
    println!("  Difficulty fixes: {}", summary.difficulty_fixes);
    println!("  Blind-mode fixes: {}", summary.blind_mode_fixes);

    if summary.dry_run {
        println!();
        println!("Re-run without --dry-run to apply changes.");
    }
}

#[tracing::instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(ctx: &CommandContext, args: &FixArgs) -> Result<()> {
    let batch_dir = ctx.batch_dir();
    let batches = discover_batches(&batch_dir, None)?;
    if batches.is_empty() {
        return Err(QbankError::no_input("batch files", batch_dir));
    }

    let mut summary = FixSummary {
        dry_run: args.dry_run,
        files_processed: batches.len(),
        difficulty_fixes: 0,
        blind_mode_fixes: 0,
        files: Vec::new(),
    };

    for batch in &batches {
        let mut records = load_collection(&batch.path)?;
        let report = fix_collection(&mut records);
        if report.is_empty() {
            continue;
        }

        if !args.dry_run {
            save_collection(&batch.path, &records)?;
        }
        info!(
            path = %batch.path.display(),
            difficulty = report.difficulty.len(),
            blind = report.blind.len(),
            "fix_batch"
        );

        summary.difficulty_fixes += report.difficulty.len();
        summary.blind_mode_fixes += report.blind.len();
        let file = FileFix {
            path: batch.path.display().to_string(),
            report,
        };
        if ctx.cli.format == OutputFormat::Human {
            print_file(&file, args.dry_run);
        }
        summary.files.push(file);
    }

    output_by_format!(ctx.cli.format,
        json => { print_json(&summary)? },
        human => {
            if ctx.chatty() {
                print_summary(&summary);
            }
        }
    );
    Ok(())
}
