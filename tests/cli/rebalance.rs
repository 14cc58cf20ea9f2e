use crate::cli::support::{qbank, read_collection, record, seed_file, write_collection};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn test_rebalance_default_seed_file() {
    let dir = tempdir().unwrap();
    let mut records: Vec<Value> = (0..4).map(|n| record(2, 1, n)).collect();
    records.push(record(2, 3, 0));
    write_collection(&seed_file(&dir, 2), &records);

    qbank()
        .current_dir(dir.path())
        .args(["rebalance", "--cap", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New counts:"))
        .stdout(predicate::str::contains("Level 1: 2 questions"))
        .stdout(predicate::str::contains("Level 3: 1 questions"))
        .stdout(predicate::str::contains("Level 10: 0 questions"));

    let kept = read_collection(&seed_file(&dir, 2));
    assert_eq!(kept.len(), 3);
    assert_eq!(kept[0], records[0]);
    assert_eq!(kept[1], records[1]);
    assert_eq!(kept[2], records[4]);
}

#[test]
fn test_rebalance_explicit_file_uses_config_cap() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("qbank.toml"), "[targets]\nlevel_cap = 1\n").unwrap();
    let path = dir.path().join("grade5.json");
    write_collection(&path, &[record(5, 7, 0), record(5, 7, 1)]);

    qbank()
        .current_dir(dir.path())
        .args(["rebalance", "grade5.json"])
        .assert()
        .success();

    assert_eq!(read_collection(&path).len(), 1);
}

#[test]
fn test_rebalance_zero_cap_is_usage_error() {
    let dir = tempdir().unwrap();
    write_collection(&seed_file(&dir, 2), &[record(2, 1, 0)]);

    qbank()
        .current_dir(dir.path())
        .args(["rebalance", "--cap", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_rebalance_missing_file_fails() {
    let dir = tempdir().unwrap();

    qbank()
        .current_dir(dir.path())
        .arg("rebalance")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("seed_grade_2.json"));
}
