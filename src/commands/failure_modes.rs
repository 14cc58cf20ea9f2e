//! `qbank fix-failure-modes` - give every batch record exactly three
//! failure modes

use serde::Serialize;
use tracing::info;

use crate::cli::format::print_json;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format;
use qbank_core::bank::{discover_batches, load_collection, save_collection};
use qbank_core::error::{QbankError, Result};
use qbank_core::failure_modes::normalize_collection;

#[derive(Debug, Serialize)]
struct FixedFile {
    path: String,
    records_changed: usize,
}

#[derive(Debug, Serialize)]
struct FailureModesReport {
    files_processed: usize,
    fixed: Vec<FixedFile>,
}

#[tracing::instrument(skip_all)]
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let batch_dir = ctx.batch_dir();
    let batches = discover_batches(&batch_dir, None)?;
    if batches.is_empty() {
        return Err(QbankError::no_input("batch files", batch_dir));
    }

    let filler = &ctx.config.failure_modes.filler_description;
    let mut report = FailureModesReport {
        files_processed: batches.len(),
        fixed: Vec::new(),
    };

    for batch in &batches {
        let mut records = load_collection(&batch.path)?;
        let changed = normalize_collection(&mut records, filler);
        if changed == 0 {
            continue;
        }

        save_collection(&batch.path, &records)?;
        info!(path = %batch.path.display(), records = changed, "fix_failure_modes");
        report.fixed.push(FixedFile {
            path: batch.path.display().to_string(),
            records_changed: changed,
        });
    }

    output_by_format!(ctx.cli.format,
        json => { print_json(&report)? },
        human => {
            for file in &report.fixed {
                println!("Fixed {}", file.path);
            }
            if report.fixed.is_empty() && ctx.chatty() {
                println!(
                    "All {} batch file(s) already have three failure modes per question",
                    report.files_processed
                );
            }
        }
    );
    Ok(())
}
