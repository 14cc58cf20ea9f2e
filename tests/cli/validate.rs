use crate::cli::support::{
    batch_file, full_bank, qbank, read_collection, record, seed_file, write_collection,
};
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::tempdir;

#[test]
fn test_validate_full_bank_passes() {
    let dir = tempdir().unwrap();
    let path = seed_file(&dir, 2);
    write_collection(&path, &full_bank(2, 100));

    qbank()
        .current_dir(dir.path())
        .args(["validate", "seed_content/seed_grade_2.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passed all validations (1000 questions)"));
}

#[test]
fn test_validate_reports_level_and_total_mismatch() {
    let dir = tempdir().unwrap();
    let path = seed_file(&dir, 2);
    let mut bank = full_bank(2, 100);
    let idx = bank.iter().position(|r| r["level"] == 5).unwrap();
    bank.remove(idx);
    write_collection(&path, &bank);

    qbank()
        .current_dir(dir.path())
        .args(["validate", "seed_content/seed_grade_2.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("expected exactly 1000 questions, found 999"))
        .stdout(predicate::str::contains("level 5 has 99 questions, expected 100"))
        .stdout(predicate::str::contains("level 4 has").not())
        .stderr(predicate::str::contains("1 of 1 file(s) failed validation"));
}

#[test]
fn test_validate_custom_targets_and_dedupe() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("small.json");
    let mut bank = full_bank(3, 2);
    bank.push(record(3, 1, 0));
    write_collection(&path, &bank);

    let output = qbank()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "validate",
            "--target-total",
            "20",
            "--target-level",
            "2",
            "small.json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let reports: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(reports[0]["duplicates_removed"], 1);
    assert_eq!(reports[0]["error_count"], 0);
    assert_eq!(reports[0]["diagnostics"][0]["category"], "duplicates");
    assert_eq!(read_collection(&path).len(), 20);
}

#[test]
fn test_validate_reports_answer_mismatch_index() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bank.json");
    let mut bank = full_bank(2, 1);
    bank[3]["correct_answer"] = json!("2.0");
    write_collection(&path, &bank);

    qbank()
        .current_dir(dir.path())
        .args(["validate", "--target-total", "10", "--target-level", "1", "bank.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[correct-answer] item 3 correct_answer"));
}

#[test]
fn test_validate_invalid_json_continues_with_other_files() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("broken.json"), "[{").unwrap();
    write_collection(&dir.path().join("ok.json"), &full_bank(2, 1));

    qbank()
        .current_dir(dir.path())
        .args([
            "validate",
            "--target-total",
            "10",
            "--target-level",
            "1",
            "broken.json",
            "ok.json",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[invalid-json]"))
        .stdout(predicate::str::contains("ok.json' passed all validations"))
        .stderr(predicate::str::contains("1 of 2 file(s) failed validation"));
}

#[test]
fn test_validate_failed_write_back_continues_with_other_files() {
    let dir = tempdir().unwrap();
    let mut bank = full_bank(2, 1);
    bank.push(record(2, 1, 0));
    write_collection(&dir.path().join("dupes.json"), &bank);
    std::fs::create_dir(dir.path().join("dupes.json.tmp")).unwrap();
    write_collection(&dir.path().join("ok.json"), &full_bank(2, 1));

    qbank()
        .current_dir(dir.path())
        .args([
            "validate",
            "--target-total",
            "10",
            "--target-level",
            "1",
            "dupes.json",
            "ok.json",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[write-failed]"))
        .stdout(predicate::str::contains("ok.json' passed all validations"))
        .stderr(predicate::str::contains("1 of 2 file(s) failed validation"));

    assert_eq!(read_collection(&dir.path().join("dupes.json")).len(), 11);
}

#[test]
fn test_validate_batch_requires_fifty() {
    let dir = tempdir().unwrap();
    let full = batch_file(&dir, 2, 1, 1);
    write_collection(&full, &(0..50).map(|n| record(2, 1, n)).collect::<Vec<_>>());
    let short = batch_file(&dir, 2, 1, 2);
    write_collection(&short, &(0..49).map(|n| record(2, 1, n)).collect::<Vec<_>>());

    qbank()
        .current_dir(dir.path())
        .args([
            "validate-batch",
            "seed_content/batches/grade_2_level_1_batch_1.json",
        ])
        .assert()
        .success();

    qbank()
        .current_dir(dir.path())
        .args([
            "validate-batch",
            "seed_content/batches/grade_2_level_1_batch_2.json",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("expected exactly 50 questions, found 49"));
}

#[test]
fn test_validate_batch_reports_failure_mode_problems() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("batch.json");
    let mut bank: Vec<Value> = (0..50).map(|n| record(2, 1, n)).collect();
    bank[10]["failure_modes"] = json!("free text");
    bank[11]["failure_modes"] = json!({"only": "one"});
    bank[12].as_object_mut().unwrap().remove("type");
    write_collection(&path, &bank);

    qbank()
        .current_dir(dir.path())
        .args(["validate-batch", "batch.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("item 10 failure_modes is not an object"))
        .stdout(predicate::str::contains(
            "item 11 does not have exactly 3 failure modes (found 1)",
        ))
        .stdout(predicate::str::contains("item 12 missing keys: type"));
}
