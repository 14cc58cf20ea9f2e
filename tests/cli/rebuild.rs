use crate::cli::support::{batch_file, qbank, read_collection, record, seed_file, write_collection};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn test_rebuild_merges_grade_batches() {
    let dir = tempdir().unwrap();
    write_collection(
        &batch_file(&dir, 2, 2, 1),
        &[record(2, 2, 0), record(2, 2, 1)],
    );
    write_collection(
        &batch_file(&dir, 2, 1, 1),
        &[record(2, 1, 0), record(2, 1, 1)],
    );
    // duplicate of a level-1 question, found in a second batch
    write_collection(&batch_file(&dir, 2, 1, 2), &[record(2, 1, 1)]);
    // other grades are ignored
    write_collection(&batch_file(&dir, 3, 1, 1), &[record(3, 1, 0)]);

    qbank()
        .current_dir(dir.path())
        .args(["rebuild", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 batch files for Grade 2."))
        .stdout(predicate::str::contains("Processed 5 total questions."))
        .stdout(predicate::str::contains("Removed 1 duplicates."))
        .stdout(predicate::str::contains("Final count: 4 unique questions."))
        .stdout(predicate::str::contains("Successfully wrote 4 questions"));

    let records = read_collection(&seed_file(&dir, 2));
    let levels: Vec<i64> = records.iter().map(|r| r["level"].as_i64().unwrap()).collect();
    assert_eq!(levels, vec![1, 1, 2, 2]);
    assert!(records.iter().all(|r| r["grade"] == 2));
}

#[test]
fn test_rebuild_json_report() {
    let dir = tempdir().unwrap();
    write_collection(&batch_file(&dir, 4, 1, 1), &[record(4, 1, 0)]);

    let output = qbank()
        .current_dir(dir.path())
        .args(["--format", "json", "rebuild", "4"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["batch_files"], 1);
    assert_eq!(report["final_count"], 1);
    assert_eq!(report["duplicates_removed"], 0);
}

#[test]
fn test_rebuild_unknown_grade_fails() {
    let dir = tempdir().unwrap();
    write_collection(&batch_file(&dir, 2, 1, 1), &[record(2, 1, 0)]);

    qbank()
        .current_dir(dir.path())
        .args(["rebuild", "7"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no batch files for grade 7 found"));

    assert!(!seed_file(&dir, 7).exists());
}
