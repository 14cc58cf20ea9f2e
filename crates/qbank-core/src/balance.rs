//! Per-level capping of a collection
//!
//! Records are admitted in order while their level is under the cap; the
//! rest are dropped, never reassigned or reordered.

use serde::Serialize;
use serde_json::Value;

use crate::record::QuestionRecord;

/// Lowest level tracked by the counters
pub const MIN_LEVEL: i64 = 1;
/// Highest level tracked by the counters
pub const MAX_LEVEL: i64 = 10;

/// Per-level admission counters for levels 1-10, owned by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    counts: [usize; 10],
    /// Records whose level fell outside 1-10 (kept, not counted per level)
    pub out_of_range: usize,
}

impl LevelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(level: i64) -> Option<usize> {
        if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            usize::try_from(level - MIN_LEVEL).ok()
        } else {
            None
        }
    }

    /// Count admitted for `level`, zero outside 1-10
    pub fn get(&self, level: i64) -> usize {
        Self::slot(level).map_or(0, |i| self.counts[i])
    }

    /// `(level, count)` for every level 1-10
    pub fn iter(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        (MIN_LEVEL..=MAX_LEVEL).zip(self.counts.iter().copied())
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Result of balancing a collection
#[derive(Debug, Clone, PartialEq)]
pub struct Balanced {
    pub records: Vec<Value>,
    /// Final per-level counts, including whatever the caller passed in
    pub counts: LevelCounts,
    pub dropped: usize,
}

/// Admit records for each level until `cap` is reached.
///
/// A missing `level` counts as level 1. Levels outside 1-10 are retained
/// unchanged and tallied in [`LevelCounts::out_of_range`].
pub fn balance(records: Vec<Value>, cap: usize, mut counts: LevelCounts) -> Balanced {
    let mut kept = Vec::with_capacity(records.len());
    let mut dropped = 0;

    for record in records {
        let level = if record.get("level").is_none() {
            Some(MIN_LEVEL)
        } else {
            record.level()
        };

        match level.and_then(LevelCounts::slot) {
            Some(i) if counts.counts[i] < cap => {
                counts.counts[i] += 1;
                kept.push(record);
            }
            Some(_) => dropped += 1,
            None => {
                counts.out_of_range += 1;
                kept.push(record);
            }
        }
    }

    Balanced {
        records: kept,
        counts,
        dropped,
    }
}
