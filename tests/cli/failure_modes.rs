use crate::cli::support::{batch_file, qbank, read_collection, record, write_collection};
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;

#[test]
fn test_fix_failure_modes_pads_and_trims() {
    let dir = tempdir().unwrap();
    let path = batch_file(&dir, 5, 2, 1);
    let mut short = record(5, 2, 0);
    short["failure_modes"] = json!({"off_by_one": "Counted one too many."});
    let mut long = record(5, 2, 1);
    long["failure_modes"] = json!({"a": "1", "b": "2", "c": "3", "d": "4", "e": "5"});
    write_collection(&path, &[short, long]);

    let untouched = batch_file(&dir, 5, 3, 1);
    write_collection(&untouched, &[record(5, 3, 0)]);

    qbank()
        .current_dir(dir.path())
        .arg("fix-failure-modes")
        .assert()
        .success()
        .stdout(predicate::str::contains("grade_5_level_2_batch_1.json"))
        .stdout(predicate::str::contains("grade_5_level_3_batch_1.json").not());

    let records = read_collection(&path);
    let short_keys: Vec<&String> = records[0]["failure_modes"]
        .as_object()
        .unwrap()
        .keys()
        .collect();
    assert_eq!(
        short_keys,
        vec!["off_by_one", "unanticipated_error_2", "unanticipated_error_3"]
    );
    assert_eq!(
        records[0]["failure_modes"]["unanticipated_error_2"],
        "Student made an error in calculation or conceptual understanding."
    );
    assert_eq!(
        records[1]["failure_modes"],
        json!({"a": "1", "b": "2", "c": "3"})
    );
}

#[test]
fn test_fix_failure_modes_uses_configured_filler() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("qbank.toml"),
        "[failure_modes]\nfiller_description = \"Unclassified slip.\"\n",
    )
    .unwrap();
    let path = batch_file(&dir, 1, 1, 1);
    let mut missing = record(1, 1, 0);
    missing.as_object_mut().unwrap().remove("failure_modes");
    write_collection(&path, &[missing]);

    qbank()
        .current_dir(dir.path())
        .arg("fix-failure-modes")
        .assert()
        .success();

    let records = read_collection(&path);
    assert_eq!(
        records[0]["failure_modes"],
        json!({
            "unanticipated_error_1": "Unclassified slip.",
            "unanticipated_error_2": "Unclassified slip.",
            "unanticipated_error_3": "Unclassified slip."
        })
    );
}

#[test]
fn test_fix_failure_modes_without_batches_fails() {
    let dir = tempdir().unwrap();

    qbank()
        .current_dir(dir.path())
        .arg("fix-failure-modes")
        .assert()
        .code(1);
}
