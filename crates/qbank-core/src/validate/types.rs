use serde::Serialize;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning - reported, does not fail the file
    Warning,
    /// Error - the file fails validation
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Check that produced it (e.g. "level-count", "correct-answer")
    pub category: String,
    /// Human-readable description
    pub message: String,
    /// Offending record index, for per-record checks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl Diagnostic {
    pub fn error(category: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            category: category.to_string(),
            message: message.into(),
            index: None,
        }
    }

    pub fn warning(category: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(category, message)
        }
    }

    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// Expectations a collection is validated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationOptions {
    pub expected_total: Option<usize>,
    pub expected_per_level: Option<usize>,
    /// Remove duplicates and write the deduplicated file back first
    pub dedupe: bool,
}

impl ValidationOptions {
    /// Consolidated file: exact total and per-level counts, deduplicated
    pub fn full(total: usize, per_level: usize) -> Self {
        Self {
            expected_total: Some(total),
            expected_per_level: Some(per_level),
            dedupe: true,
        }
    }

    /// Batch file: exact record count only
    pub fn batch(size: usize) -> Self {
        Self {
            expected_total: Some(size),
            expected_per_level: None,
            dedupe: false,
        }
    }
}

/// Result of validating one collection
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// File validated, when the collection came from disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Records checked (after deduplication)
    pub record_count: usize,
    pub duplicates_removed: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn passed(&self) -> bool {
        self.error_count == 0
    }

    /// Diagnostics of one category
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.category == category)
    }
}
