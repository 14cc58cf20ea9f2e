//! Failure-mode normalization
//!
//! Every record ends up with exactly [`FAILURE_MODE_COUNT`] failure modes.
//! Short mappings are padded with `unanticipated_error_{n}` entries; long
//! ones lose their last entries in document order.

use serde_json::{Map, Value};

/// Number of failure modes each record must carry
pub const FAILURE_MODE_COUNT: usize = 3;

/// Key used when a non-mapping value is coerced into a mapping
pub const GENERIC_ERROR_KEY: &str = "generic_error";

/// Stored `failure_modes` value, resolved by JSON type
#[derive(Debug, Clone, PartialEq)]
pub enum FailureModesInput {
    Mapping(Map<String, Value>),
    Missing,
    Other(Value),
}

impl FailureModesInput {
    pub fn from_value(value: Option<Value>) -> Self {
        match value {
            Some(Value::Object(map)) => FailureModesInput::Mapping(map),
            Some(other) => FailureModesInput::Other(other),
            None => FailureModesInput::Missing,
        }
    }

    /// Canonical mapping before padding or trimming
    fn into_mapping(self) -> (Map<String, Value>, bool) {
        match self {
            FailureModesInput::Mapping(map) => (map, false),
            FailureModesInput::Missing => (Map::new(), false),
            FailureModesInput::Other(value) => {
                let text = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                let mut map = Map::new();
                map.insert(GENERIC_ERROR_KEY.to_string(), Value::String(text));
                (map, true)
            }
        }
    }
}

/// Normalized failure modes
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedModes {
    pub modes: Map<String, Value>,
    /// Whether anything was coerced, added, or removed
    pub changed: bool,
}

/// Pad or trim a `failure_modes` value to exactly three entries
pub fn normalize_failure_modes(value: Option<Value>, filler: &str) -> NormalizedModes {
    let (mut modes, mut changed) = FailureModesInput::from_value(value).into_mapping();

    let mut n = modes.len() + 1;
    while modes.len() < FAILURE_MODE_COUNT {
        let key = format!("unanticipated_error_{}", n);
        n += 1;
        if modes.contains_key(&key) {
            continue;
        }
        modes.insert(key, Value::String(filler.to_string()));
        changed = true;
    }

    while modes.len() > FAILURE_MODE_COUNT {
        let Some(last) = modes.keys().next_back().cloned() else {
            break;
        };
        modes.remove(&last);
        changed = true;
    }

    NormalizedModes { modes, changed }
}

/// Normalize every record's `failure_modes` in place.
///
/// Returns how many records changed. Non-object items are skipped.
pub fn normalize_collection(records: &mut [Value], filler: &str) -> usize {
    let mut changed = 0;
    for record in records.iter_mut() {
        let Some(map) = record.as_object_mut() else {
            continue;
        };
        // take in place so the key keeps its position in the record
        let current = map.get_mut("failure_modes").map(Value::take);
        let normalized = normalize_failure_modes(current, filler);
        if normalized.changed {
            changed += 1;
        }
        map.insert("failure_modes".to_string(), Value::Object(normalized.modes));
    }
    changed
}
