//! `qbank validate` and `qbank validate-batch` - schema and count checks

use std::path::PathBuf;

use tracing::debug;

use crate::cli::args::{ValidateArgs, ValidateBatchArgs};
use crate::cli::format::print_json;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format;
use qbank_core::error::{QbankError, Result};
use qbank_core::validate::{validate_file, Severity, ValidationOptions, ValidationReport};

fn print_report(ctx: &CommandContext, report: &ValidationReport) {
    let path = report.path.as_deref().unwrap_or("<memory>");

    for diagnostic in &report.diagnostics {
        let prefix = match diagnostic.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
        };
        println!("  {} [{}] {}", prefix, diagnostic.category, diagnostic.message);
    }

    if report.passed() {
        if ctx.chatty() {
            println!(
                "'{}' passed all validations ({} questions)",
                path, report.record_count
            );
        }
    } else {
        println!(
            "'{}' failed validation: {} error(s), {} warning(s)",
            path, report.error_count, report.warning_count
        );
    }
}

fn run(ctx: &CommandContext, files: &[PathBuf], options: ValidationOptions) -> Result<()> {
    debug!(?options, files = files.len(), "validate");

    let reports: Vec<ValidationReport> = files
        .iter()
        .map(|file| validate_file(&ctx.resolve(file), &options))
        .collect();
    let failed = reports.iter().filter(|r| !r.passed()).count();

    output_by_format!(ctx.cli.format,
        json => { print_json(&reports)? },
        human => {
            for report in &reports {
                print_report(ctx, report);
            }
        }
    );

    if failed > 0 {
        return Err(QbankError::ValidationFailed {
            failed,
            total: reports.len(),
        });
    }
    Ok(())
}

/// Validate consolidated seed files: exact totals, per-level counts, and
/// schema, deduplicating each file first
#[tracing::instrument(skip_all)]
pub fn execute(ctx: &CommandContext, args: &ValidateArgs) -> Result<()> {
    let targets = &ctx.config.targets;
    let options = ValidationOptions::full(
        args.target_total.unwrap_or(targets.total),
        args.target_level.unwrap_or(targets.per_level),
    );
    run(ctx, &args.files, options)
}

/// Validate batch files: exact batch size and schema
#[tracing::instrument(skip_all)]
pub fn execute_batch(ctx: &CommandContext, args: &ValidateBatchArgs) -> Result<()> {
    run(
        ctx,
        &args.files,
        ValidationOptions::batch(ctx.config.targets.batch_size),
    )
}
