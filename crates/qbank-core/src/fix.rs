//! Per-record fixes applied to working batch files
//!
//! Difficulty labels are normalized first, then blind-mode incompatible
//! questions are rewritten to name their answer choices.

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::blind::{is_blind_incompatible, rewrite_with_rule};
use crate::difficulty::{normalize_difficulty, DifficultyFix};
use crate::record::QuestionRecord;

/// A rewritten question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlindFix {
    /// Record index within the collection
    pub index: usize,
    pub before: String,
    pub after: String,
    /// Rewrite rule that produced `after`
    pub rule: &'static str,
}

/// Everything changed in one collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FixReport {
    pub difficulty: Vec<DifficultyFix>,
    pub blind: Vec<BlindFix>,
}

impl FixReport {
    pub fn is_empty(&self) -> bool {
        self.difficulty.is_empty() && self.blind.is_empty()
    }
}

/// Fix every record in place and report what changed.
///
/// Questions are only rewritten when `options` is a non-empty list of
/// strings; a rewrite that yields the same text is not counted.
pub fn fix_collection(records: &mut [Value]) -> FixReport {
    let mut report = FixReport::default();

    for (index, record) in records.iter_mut().enumerate() {
        if let Some(fix) = normalize_difficulty(record) {
            report.difficulty.push(fix);
        }

        if let Some(blind) = fix_blind_mode(record, index) {
            record.set_question(blind.after.clone());
            report.blind.push(blind);
        }
    }

    report
}

fn fix_blind_mode(record: &Value, index: usize) -> Option<BlindFix> {
    let question = record.question()?;
    if !is_blind_incompatible(question) {
        return None;
    }
    let options = record.options().filter(|o| !o.is_empty())?;

    let (rule, after) = rewrite_with_rule(question, &options);
    if after == question {
        return None;
    }
    trace!(index, rule, "blind_rewrite");
    Some(BlindFix {
        index,
        before: question.to_string(),
        after,
        rule,
    })
}
