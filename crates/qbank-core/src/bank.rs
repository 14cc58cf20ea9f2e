//! Persisted question collections
//!
//! Collections are JSON arrays written with 2-space indentation, non-ASCII
//! characters kept literal, and a single trailing newline. Working files
//! follow `grade_{G}_level_{L}_batch_{B}.json`; consolidated files follow
//! `seed_grade_{G}.json`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::{QbankError, Result};

static BATCH_NAME: OnceLock<Regex> = OnceLock::new();
static SEED_NAME: OnceLock<Regex> = OnceLock::new();

fn batch_name_re() -> &'static Regex {
    BATCH_NAME.get_or_init(|| {
        Regex::new(r"^grade_(\d+)_level_(\d+)_batch_(\d+)\.json$")
            .expect("Invalid batch file name pattern")
    })
}

fn seed_name_re() -> &'static Regex {
    SEED_NAME.get_or_init(|| {
        Regex::new(r"^seed_grade_(\d+)\.json$").expect("Invalid seed file name pattern")
    })
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

/// A per-grade, per-level working file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFile {
    pub path: PathBuf,
    pub grade: u32,
    pub level: u32,
    pub batch: u32,
}

impl BatchFile {
    /// Parse a path whose file name follows the batch naming convention
    pub fn parse(path: &Path) -> Option<Self> {
        let caps = batch_name_re().captures(file_name(path)?)?;
        Some(BatchFile {
            path: path.to_path_buf(),
            grade: caps[1].parse().ok()?,
            level: caps[2].parse().ok()?,
            batch: caps[3].parse().ok()?,
        })
    }
}

/// A consolidated per-grade file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedFile {
    pub path: PathBuf,
    pub grade: u32,
}

impl SeedFile {
    pub fn parse(path: &Path) -> Option<Self> {
        let caps = seed_name_re().captures(file_name(path)?)?;
        Some(SeedFile {
            path: path.to_path_buf(),
            grade: caps[1].parse().ok()?,
        })
    }
}

/// Path of the consolidated file for `grade`
pub fn seed_path(seed_dir: &Path, grade: u32) -> PathBuf {
    seed_dir.join(format!("seed_grade_{}.json", grade))
}

/// Files directly inside `dir`, sorted by file name.
///
/// A missing directory yields no files.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "directory_missing");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.map_err(|e| QbankError::io_operation("read directory", dir.display(), e))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Batch files in `dir`, optionally restricted to one grade
pub fn discover_batches(dir: &Path, grade: Option<u32>) -> Result<Vec<BatchFile>> {
    let batches: Vec<BatchFile> = list_files(dir)?
        .iter()
        .filter_map(|path| BatchFile::parse(path))
        .filter(|batch| grade.map_or(true, |g| batch.grade == g))
        .collect();
    debug!(dir = %dir.display(), ?grade, count = batches.len(), "discover_batches");
    Ok(batches)
}

/// Consolidated seed files in `dir`
pub fn discover_seed_files(dir: &Path) -> Result<Vec<SeedFile>> {
    let seeds: Vec<SeedFile> = list_files(dir)?
        .iter()
        .filter_map(|path| SeedFile::parse(path))
        .collect();
    debug!(dir = %dir.display(), count = seeds.len(), "discover_seed_files");
    Ok(seeds)
}

/// Parse collection text, rejecting anything but a JSON array
pub fn parse_collection(path: &Path, content: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| QbankError::malformed(path, format!("not valid JSON: {}", e)))?;
    match value {
        Value::Array(records) => Ok(records),
        _ => Err(QbankError::malformed(path, "root must be a JSON array")),
    }
}

/// Read a persisted collection
pub fn load_collection(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path)
        .map_err(|e| QbankError::io_operation("read", path.display(), e))?;
    let records = parse_collection(path, &content)?;
    trace!(path = %path.display(), records = records.len(), "load_collection");
    Ok(records)
}

/// Render a collection in the persisted format
pub fn render_collection(records: &[Value]) -> Result<String> {
    let mut text = serde_json::to_string_pretty(records)?;
    text.push('\n');
    Ok(text)
}

/// Write a collection, replacing the file through a temporary sibling
pub fn save_collection(path: &Path, records: &[Value]) -> Result<()> {
    let text = render_collection(records)?;
    let temp = path.with_extension("json.tmp");
    fs::write(&temp, text).map_err(|e| QbankError::io_operation("write", temp.display(), e))?;
    fs::rename(&temp, path)
        .map_err(|e| QbankError::io_operation("replace", path.display(), e))?;
    debug!(path = %path.display(), records = records.len(), "save_collection");
    Ok(())
}
