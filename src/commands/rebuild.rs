//! `qbank rebuild <GRADE>` - merge a grade's batch files into its seed file

use std::fs;

use serde::Serialize;

use crate::cli::args::RebuildArgs;
use crate::cli::format::print_json;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format;
use qbank_core::bank::{discover_batches, save_collection, seed_path};
use qbank_core::error::{QbankError, Result};
use qbank_core::rebuild::rebuild;

#[derive(Debug, Serialize)]
struct RebuildReport {
    grade: u32,
    batch_files: usize,
    processed: usize,
    duplicates_removed: usize,
    final_count: usize,
    output: String,
}

#[tracing::instrument(skip_all, fields(grade = args.grade))]
pub fn execute(ctx: &CommandContext, args: &RebuildArgs) -> Result<()> {
    let batch_dir = ctx.batch_dir();
    let batches = discover_batches(&batch_dir, Some(args.grade))?;
    if batches.is_empty() {
        return Err(QbankError::no_input(
            &format!("batch files for grade {}", args.grade),
            batch_dir,
        ));
    }

    let rebuilt = rebuild(&batches)?;

    let seed_dir = ctx.seed_dir();
    fs::create_dir_all(&seed_dir)
        .map_err(|e| QbankError::io_operation("create directory", seed_dir.display(), e))?;
    let output = seed_path(&seed_dir, args.grade);
    save_collection(&output, &rebuilt.records)?;

    let report = RebuildReport {
        grade: args.grade,
        batch_files: batches.len(),
        processed: rebuilt.processed,
        duplicates_removed: rebuilt.duplicates,
        final_count: rebuilt.records.len(),
        output: output.display().to_string(),
    };

    output_by_format!(ctx.cli.format,
        json => { print_json(&report)? },
        human => {
            if ctx.chatty() {
                println!(
                    "Found {} batch files for Grade {}.",
                    report.batch_files, report.grade
                );
                println!("Processed {} total questions.", report.processed);
                println!("Removed {} duplicates.", report.duplicates_removed);
                println!("Final count: {} unique questions.", report.final_count);
            }
            println!(
                "Successfully wrote {} questions to {}",
                report.final_count, report.output
            );
        }
    );
    Ok(())
}
