use assert_cmd::{cargo::cargo_bin_cmd, Command};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for qbank with logging environment cleared
pub fn qbank() -> Command {
    let mut cmd = cargo_bin_cmd!("qbank");
    cmd.env_remove("RUST_LOG")
        .env_remove("QBANK_LOG")
        .env_remove("QBANK_LOG_LEVEL");
    cmd
}

/// A schema-valid question record
pub fn record(grade: i64, level: i64, n: usize) -> Value {
    let difficulty = match level {
        1 | 2 => "beginner",
        3 | 4 => "intermediate",
        5 | 6 => "advanced",
        7 | 8 => "expert",
        _ => "master",
    };
    json!({
        "grade": grade,
        "level": level,
        "difficulty": difficulty,
        "type": "arithmetic",
        "question": format!("Grade {} level {} question {}: what is {} + 1?", grade, level, n, n),
        "options": [n.to_string(), (n + 1).to_string(), (n + 2).to_string()],
        "correct_answer": (n + 1).to_string(),
        "ideal_solution": "Add one.",
        "failure_modes": {
            "no_carry": "Forgot to carry.",
            "off_by_one": "Counted one too many.",
            "wrong_operation": "Subtracted instead of adding."
        }
    })
}

/// `per_level` records for each of levels 1-10
pub fn full_bank(grade: i64, per_level: usize) -> Vec<Value> {
    (1..=10)
        .flat_map(|level| (0..per_level).map(move |n| record(grade, level, n)))
        .collect()
}

/// Write a collection in the persisted format
pub fn write_collection(path: &Path, records: &[Value]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut text = serde_json::to_string_pretty(records).unwrap();
    text.push('\n');
    fs::write(path, text).unwrap();
}

pub fn read_collection(path: &Path) -> Vec<Value> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

pub fn seed_file(dir: &TempDir, grade: u32) -> PathBuf {
    dir.path()
        .join("seed_content")
        .join(format!("seed_grade_{}.json", grade))
}

pub fn batch_file(dir: &TempDir, grade: u32, level: u32, batch: u32) -> PathBuf {
    dir.path().join("seed_content").join("batches").join(format!(
        "grade_{}_level_{}_batch_{}.json",
        grade, level, batch
    ))
}
