//! Schema and count validation for question collections
//!
//! All checks run independently so one pass surfaces every violation:
//! - total record count and per-level counts, when expected values are given
//! - every item is an object carrying the required keys
//! - `correct_answer` is one of `options`
//! - `failure_modes` is a mapping with exactly three entries
//!
//! File validation can deduplicate first and write the cleaned file back.

pub mod checks;
pub mod types;

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::bank::save_collection;
use crate::dedup::dedupe;
pub use types::{Diagnostic, Severity, ValidationOptions, ValidationReport};

/// Validate an in-memory collection
pub fn validate_records(records: &[Value], options: &ValidationOptions) -> ValidationReport {
    let mut report = ValidationReport::new();
    run_checks(records, options, &mut report);
    report
}

fn run_checks(records: &[Value], options: &ValidationOptions, report: &mut ValidationReport) {
    report.record_count = records.len();

    if let Some(expected) = options.expected_total {
        checks::check_total(records, expected, report);
    }
    if let Some(expected) = options.expected_per_level {
        checks::check_level_counts(records, expected, report);
    }
    checks::check_records(records, report);
}

/// Validate a persisted collection.
///
/// Every problem is a diagnostic on the returned report, including a failed
/// write-back of the deduplicated collection, so callers can keep going
/// with their remaining files.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn validate_file(path: &Path, options: &ValidationOptions) -> ValidationReport {
    let mut report = ValidationReport::for_path(path.display().to_string());

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            report.add(Diagnostic::error("unreadable", format!("cannot read file: {}", e)));
            return report;
        }
    };

    let records = match serde_json::from_str::<Value>(&content) {
        Ok(Value::Array(records)) => records,
        Ok(_) => {
            report.add(Diagnostic::error("not-array", "root must be a JSON array"));
            return report;
        }
        Err(e) => {
            report.add(Diagnostic::error("invalid-json", format!("not valid JSON: {}", e)));
            return report;
        }
    };

    let records = if options.dedupe {
        let deduped = dedupe(records);
        if deduped.removed > 0 {
            warn!(removed = deduped.removed, "duplicates_removed");
            report.duplicates_removed = deduped.removed;
            report.add(Diagnostic::warning(
                "duplicates",
                format!("removed {} duplicate question(s)", deduped.removed),
            ));
            if let Err(e) = save_collection(path, &deduped.records) {
                warn!(error = %e, "dedupe_write_failed");
                report.add(Diagnostic::error(
                    "write-failed",
                    format!("cannot write deduplicated file: {}", e),
                ));
            }
        }
        deduped.records
    } else {
        records
    };

    run_checks(&records, options, &mut report);
    debug!(
        errors = report.error_count,
        warnings = report.warning_count,
        "validate_file"
    );
    report
}
