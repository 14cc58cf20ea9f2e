//! Consolidating batch files into a grade's seed file

use serde_json::Value;
use tracing::{debug, info};

use crate::bank::{load_collection, BatchFile};
use crate::dedup::dedupe;
use crate::difficulty::difficulty_rank;
use crate::error::Result;
use crate::record::QuestionRecord;

/// Merged contents of a grade's batch files
#[derive(Debug, Clone, PartialEq)]
pub struct Rebuilt {
    pub records: Vec<Value>,
    /// Records read across all batches, before deduplication
    pub processed: usize,
    /// Duplicates removed across batches
    pub duplicates: usize,
}

/// Load `batches` in order, deduplicate across them, and sort by level then
/// difficulty.
///
/// The sort is stable, so records with equal keys keep batch order. A
/// missing level sorts first.
pub fn rebuild(batches: &[BatchFile]) -> Result<Rebuilt> {
    let mut merged = Vec::new();
    for batch in batches {
        let records = load_collection(&batch.path)?;
        debug!(path = %batch.path.display(), records = records.len(), "rebuild_batch");
        merged.extend(records);
    }
    let processed = merged.len();

    let deduped = dedupe(merged);
    let mut records = deduped.records;
    records.sort_by_key(|r| (r.level().unwrap_or(0), difficulty_rank(r.difficulty())));

    info!(
        processed,
        duplicates = deduped.removed,
        final_count = records.len(),
        "rebuild"
    );
    Ok(Rebuilt {
        records,
        processed,
        duplicates: deduped.removed,
    })
}
