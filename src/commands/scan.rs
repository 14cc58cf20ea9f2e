//! `qbank scan` - report blind-mode incompatible questions

use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cli::args::ScanArgs;
use crate::cli::format::print_json;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format;
use qbank_core::bank::{discover_seed_files, load_collection};
use qbank_core::blind::{scan_question, BlindIssue};
use qbank_core::error::{QbankError, Result};
use qbank_core::record::QuestionRecord;

/// One flagged question
#[derive(Debug, Serialize)]
pub struct FlaggedQuestion {
    pub index: usize,
    pub grade: Option<i64>,
    pub level: Option<i64>,
    pub question: String,
    pub options: Value,
    pub correct_answer: Value,
    pub issues: Vec<BlindIssue>,
}

/// Scan result for one file
#[derive(Debug, Serialize)]
pub struct FileScan {
    pub path: String,
    pub total: usize,
    pub flagged: Vec<FlaggedQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ScanReport<'a> {
    files: &'a [FileScan],
    total_flagged: usize,
}

/// Flag every question in `records` that matches a detection pattern
pub fn scan_records(records: &[Value]) -> Vec<FlaggedQuestion> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let question = record.question()?;
            let issues = scan_question(question);
            if issues.is_empty() {
                return None;
            }
            Some(FlaggedQuestion {
                index,
                grade: record.grade(),
                level: record.level(),
                question: question.to_string(),
                options: record.get("options").cloned().unwrap_or(Value::Null),
                correct_answer: record
                    .get("correct_answer")
                    .cloned()
                    .unwrap_or_else(|| Value::from("")),
                issues,
            })
        })
        .collect()
}

fn scan_file(path: PathBuf) -> FileScan {
    let path_str = path.display().to_string();
    match load_collection(&path) {
        Ok(records) => {
            let flagged = scan_records(&records);
            debug!(path = %path_str, total = records.len(), flagged = flagged.len(), "scan_file");
            FileScan {
                path: path_str,
                total: records.len(),
                flagged,
                error: None,
            }
        }
        Err(e) => {
            warn!(path = %path_str, error = %e, "scan_file_unreadable");
            FileScan {
                path: path_str,
                total: 0,
                flagged: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    }
}

fn print_human(ctx: &CommandContext, scans: &[FileScan], total_flagged: usize) {
    for scan in scans {
        if let Some(error) = &scan.error {
            println!("Error reading {}: {}", scan.path, error);
            continue;
        }
        if scan.flagged.is_empty() {
            continue;
        }

        println!();
        println!(
            "{}: {}/{} questions flagged",
            scan.path,
            scan.flagged.len(),
            scan.total
        );
        for item in &scan.flagged {
            let grade = item.grade.map_or("?".to_string(), |g| g.to_string());
            let level = item.level.map_or("?".to_string(), |l| l.to_string());
            println!("  [{}] Grade {}, Level {}", item.index, grade, level);
            println!("  Q: {}", item.question);
            println!("  Options: {}", item.options);
            for issue in &item.issues {
                println!("  WARN {}", issue.description);
            }
            println!();
        }
    }

    if total_flagged == 0 {
        if ctx.chatty() {
            println!(
                "All clear: no blind-mode issues found across {} file(s)",
                scans.len()
            );
        }
    } else {
        println!(
            "{} question(s) flagged across {} file(s)",
            total_flagged,
            scans.len()
        );
    }
}

#[tracing::instrument(skip_all)]
pub fn execute(ctx: &CommandContext, args: &ScanArgs) -> Result<()> {
    let files: Vec<PathBuf> = if args.files.is_empty() {
        let seed_dir = ctx.seed_dir();
        let seeds = discover_seed_files(&seed_dir)?;
        if seeds.is_empty() {
            return Err(QbankError::no_input("seed files", seed_dir));
        }
        seeds.into_iter().map(|s| s.path).collect()
    } else {
        args.files.iter().map(|f| ctx.resolve(f)).collect()
    };

    let scans: Vec<FileScan> = files.into_iter().map(scan_file).collect();
    let total_flagged: usize = scans.iter().map(|s| s.flagged.len()).sum();

    output_by_format!(ctx.cli.format,
        json => {
            print_json(&ScanReport {
                files: &scans,
                total_flagged,
            })?
        },
        human => { print_human(ctx, &scans, total_flagged); }
    );

    if total_flagged > 0 {
        return Err(QbankError::BlindModeFlagged {
            flagged: total_flagged,
            files: scans.len(),
        });
    }
    Ok(())
}
