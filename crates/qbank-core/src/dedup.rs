//! Deduplication by trimmed question text

use std::collections::HashSet;

use serde_json::Value;

use crate::record::QuestionRecord;

/// Records left after deduplication
#[derive(Debug, Clone, PartialEq)]
pub struct Deduped {
    pub records: Vec<Value>,
    /// Number of later duplicates dropped
    pub removed: usize,
}

/// Keep the first record for each distinct trimmed `question`.
///
/// Order of first occurrences is preserved. Items without a string
/// `question` are always kept; the validator reports them separately.
pub fn dedupe(records: Vec<Value>) -> Deduped {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    let mut kept = Vec::with_capacity(records.len());
    let mut removed = 0;

    for record in records {
        if let Some(key) = record.question_key() {
            if !seen.insert(key.to_string()) {
                removed += 1;
                continue;
            }
        }
        kept.push(record);
    }

    Deduped {
        records: kept,
        removed,
    }
}
