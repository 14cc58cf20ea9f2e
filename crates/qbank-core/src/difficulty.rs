//! Difficulty labels derived from levels
//!
//! Level 1-2 → beginner, 3-4 → intermediate, 5-6 → advanced,
//! 7-8 → expert, 9-10 → master. Levels outside 1-10 have no label.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::QuestionRecord;

/// Canonical difficulty label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Master,
}

impl Difficulty {
    /// Canonical label for a level, `None` outside 1-10
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            1 | 2 => Some(Difficulty::Beginner),
            3 | 4 => Some(Difficulty::Intermediate),
            5 | 6 => Some(Difficulty::Advanced),
            7 | 8 => Some(Difficulty::Expert),
            9 | 10 => Some(Difficulty::Master),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
            Difficulty::Master => "master",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort rank of a stored difficulty label when consolidating batches.
///
/// `expert` and unknown labels sort last with the rest of the unknowns.
pub fn difficulty_rank(label: Option<&str>) -> u32 {
    match label {
        Some("beginner") => 1,
        Some("intermediate") => 2,
        Some("advanced") => 3,
        Some("master") => 4,
        Some("grandmaster") => 5,
        Some("gifted") => 6,
        _ => 99,
    }
}

/// A corrected difficulty label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DifficultyFix {
    pub level: i64,
    /// Stored label before the fix (`None` when absent or not a string)
    pub from: Option<String>,
    pub to: Difficulty,
}

/// Bring a record's `difficulty` in line with its `level`.
///
/// Returns the applied fix, or `None` when the label already matches or the
/// level has no canonical label.
pub fn normalize_difficulty(record: &mut Value) -> Option<DifficultyFix> {
    let level = record.level()?;
    let expected = Difficulty::from_level(level)?;
    if record.difficulty() == Some(expected.as_str()) {
        return None;
    }

    let from = record.difficulty().map(str::to_string);
    record.set_difficulty(expected.as_str());
    Some(DifficultyFix {
        level,
        from,
        to: expected,
    })
}
