//! Question records
//!
//! Records stay as JSON objects so that unknown fields and key order survive
//! a load/save cycle. [`QuestionRecord`] gives typed access to the fields the
//! curation passes care about.

use serde_json::Value;

/// Keys every persisted question record must carry
pub const REQUIRED_KEYS: [&str; 9] = [
    "grade",
    "level",
    "difficulty",
    "type",
    "question",
    "options",
    "correct_answer",
    "ideal_solution",
    "failure_modes",
];

/// Typed view over a question record stored as a JSON value.
///
/// Accessors return `None` when the item is not an object or the field is
/// absent or of the wrong JSON type.
pub trait QuestionRecord {
    fn question(&self) -> Option<&str>;

    /// Trimmed question text, the identity used for deduplication
    fn question_key(&self) -> Option<&str> {
        self.question().map(str::trim)
    }

    fn level(&self) -> Option<i64>;

    fn grade(&self) -> Option<i64>;

    fn difficulty(&self) -> Option<&str>;

    /// Answer choices, only when every entry is a string
    fn options(&self) -> Option<Vec<&str>>;

    /// Whether `correct_answer` equals one of `options` exactly
    fn correct_answer_in_options(&self) -> bool;

    /// Required keys absent from the record, in [`REQUIRED_KEYS`] order
    fn missing_keys(&self) -> Vec<&'static str>;

    fn set_question(&mut self, text: String);

    fn set_difficulty(&mut self, label: &str);
}

/// Integers, and floats with no fractional part (`5.0` is level 5)
fn whole_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        let f = value.as_f64()?;
        (f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
    })
}

impl QuestionRecord for Value {
    fn question(&self) -> Option<&str> {
        self.get("question").and_then(Value::as_str)
    }

    fn level(&self) -> Option<i64> {
        self.get("level").and_then(whole_number)
    }

    fn grade(&self) -> Option<i64> {
        self.get("grade").and_then(whole_number)
    }

    fn difficulty(&self) -> Option<&str> {
        self.get("difficulty").and_then(Value::as_str)
    }

    fn options(&self) -> Option<Vec<&str>> {
        self.get("options")?
            .as_array()?
            .iter()
            .map(Value::as_str)
            .collect()
    }

    fn correct_answer_in_options(&self) -> bool {
        match (
            self.get("correct_answer"),
            self.get("options").and_then(Value::as_array),
        ) {
            (Some(answer), Some(options)) => options.contains(answer),
            _ => false,
        }
    }

    fn missing_keys(&self) -> Vec<&'static str> {
        match self.as_object() {
            Some(map) => REQUIRED_KEYS
                .iter()
                .copied()
                .filter(|key| !map.contains_key(*key))
                .collect(),
            None => REQUIRED_KEYS.to_vec(),
        }
    }

    fn set_question(&mut self, text: String) {
        if let Some(map) = self.as_object_mut() {
            map.insert("question".to_string(), Value::String(text));
        }
    }

    fn set_difficulty(&mut self, label: &str) {
        if let Some(map) = self.as_object_mut() {
            map.insert("difficulty".to_string(), Value::String(label.to_string()));
        }
    }
}
