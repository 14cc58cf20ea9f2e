use crate::cli::support::{batch_file, qbank, read_collection, record, write_collection};
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::tempdir;

fn broken_batch() -> Vec<Value> {
    let mut wrong_label = record(2, 3, 0);
    wrong_label["difficulty"] = json!("beginner");
    let mut flagged = record(2, 3, 1);
    flagged["question"] = json!("Which of the following numbers is even?");
    flagged["options"] = json!(["3", "4", "7", "9"]);
    flagged["correct_answer"] = json!("4");
    vec![wrong_label, flagged, record(2, 3, 2)]
}

#[test]
fn test_fix_rewrites_batches() {
    let dir = tempdir().unwrap();
    let path = batch_file(&dir, 2, 3, 1);
    write_collection(&path, &broken_batch());

    qbank()
        .current_dir(dir.path())
        .arg("fix")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fixed grade_2_level_3_batch_1.json: 1 difficulty, 1 blind-mode",
        ))
        .stdout(predicate::str::contains("Files processed: 1"));

    let records = read_collection(&path);
    assert_eq!(records[0]["difficulty"], "intermediate");
    assert_eq!(
        records[1]["question"],
        "Which of the numbers 3, 4, 7, and 9 is even?"
    );
    assert_eq!(records[2], record(2, 3, 2));
}

#[test]
fn test_fix_dry_run_leaves_files() {
    let dir = tempdir().unwrap();
    let path = batch_file(&dir, 2, 3, 1);
    write_collection(&path, &broken_batch());
    let before = std::fs::read_to_string(&path).unwrap();

    qbank()
        .current_dir(dir.path())
        .args(["fix", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DIFF: [beginner] -> [intermediate] (level 3)"))
        .stdout(predicate::str::contains(
            "-> Which of the numbers 3, 4, 7, and 9 is even?",
        ))
        .stdout(predicate::str::contains("Would fix"))
        .stdout(predicate::str::contains("DRY RUN - Summary:"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_fix_second_run_is_clean() {
    let dir = tempdir().unwrap();
    write_collection(&batch_file(&dir, 2, 3, 1), &broken_batch());

    qbank().current_dir(dir.path()).arg("fix").assert().success();

    let output = qbank()
        .current_dir(dir.path())
        .args(["--format", "json", "fix"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let summary: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(summary["difficulty_fixes"], 0);
    assert_eq!(summary["blind_mode_fixes"], 0);
    assert_eq!(summary["files"], json!([]));
}

#[test]
fn test_fix_without_batches_fails() {
    let dir = tempdir().unwrap();

    qbank()
        .current_dir(dir.path())
        .arg("fix")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no batch files found"));
}
