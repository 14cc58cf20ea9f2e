use crate::cli::support::{qbank, record, seed_file, write_collection};
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn clean_bank() -> TempDir {
    let dir = tempdir().unwrap();
    write_collection(&seed_file(&dir, 2), &[record(2, 1, 0)]);
    dir
}

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = clean_bank();

    qbank()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "scan"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("discover_seed_files"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    let dir = clean_bank();

    qbank()
        .current_dir(dir.path())
        .args(["--log-level", "warn", "scan"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = clean_bank();

    qbank()
        .current_dir(dir.path())
        .args(["--verbose", "scan"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let dir = clean_bank();

    qbank()
        .current_dir(dir.path())
        .args(["--verbose", "scan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = clean_bank();

    qbank()
        .current_dir(dir.path())
        .args(["--log-level", "debug", "--log-json", "scan"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}

#[test]
fn test_qbank_log_env_overrides_flags() {
    let dir = clean_bank();

    qbank()
        .current_dir(dir.path())
        .env("QBANK_LOG", "qbank=debug")
        .arg("scan")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}
