//! Individual validation checks
//!
//! Each check appends to the report and never stops the others.

use std::collections::HashMap;

use serde_json::Value;

use super::types::{Diagnostic, ValidationReport};
use crate::balance::{MAX_LEVEL, MIN_LEVEL};
use crate::failure_modes::FAILURE_MODE_COUNT;
use crate::record::QuestionRecord;

/// Collection length must equal `expected`
pub fn check_total(records: &[Value], expected: usize, report: &mut ValidationReport) {
    if records.len() != expected {
        report.add(Diagnostic::error(
            "total-count",
            format!(
                "expected exactly {} questions, found {}",
                expected,
                records.len()
            ),
        ));
    }
}

/// Every level 1-10 must hold exactly `expected` records
pub fn check_level_counts(records: &[Value], expected: usize, report: &mut ValidationReport) {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for level in records.iter().filter_map(|r| r.level()) {
        *counts.entry(level).or_default() += 1;
    }

    for level in MIN_LEVEL..=MAX_LEVEL {
        let found = counts.get(&level).copied().unwrap_or(0);
        if found != expected {
            report.add(Diagnostic::error(
                "level-count",
                format!(
                    "level {} has {} questions, expected {}",
                    level, found, expected
                ),
            ));
        }
    }
}

/// Per-record structure: object, required keys, answer membership,
/// failure-mode shape
pub fn check_records(records: &[Value], report: &mut ValidationReport) {
    for (i, record) in records.iter().enumerate() {
        let Some(map) = record.as_object() else {
            report.add(
                Diagnostic::error("not-object", format!("item {} is not a JSON object", i)).at(i),
            );
            continue;
        };

        let missing = record.missing_keys();
        if !missing.is_empty() {
            report.add(
                Diagnostic::error(
                    "missing-keys",
                    format!("item {} missing keys: {}", i, missing.join(", ")),
                )
                .at(i),
            );
        }

        if let (Some(answer), Some(options)) = (map.get("correct_answer"), map.get("options")) {
            if !record.correct_answer_in_options() {
                report.add(
                    Diagnostic::error(
                        "correct-answer",
                        format!(
                            "item {} correct_answer ({}) not in options: {}",
                            i, answer, options
                        ),
                    )
                    .at(i),
                );
            }
        }

        match map.get("failure_modes") {
            Some(Value::Object(modes)) if modes.len() != FAILURE_MODE_COUNT => {
                report.add(
                    Diagnostic::error(
                        "failure-modes-count",
                        format!(
                            "item {} does not have exactly {} failure modes (found {})",
                            i,
                            FAILURE_MODE_COUNT,
                            modes.len()
                        ),
                    )
                    .at(i),
                );
            }
            Some(Value::Object(_)) | None => {}
            Some(_) => {
                report.add(
                    Diagnostic::error(
                        "failure-modes-type",
                        format!("item {} failure_modes is not an object", i),
                    )
                    .at(i),
                );
            }
        }
    }
}
