//! Error types and exit codes for qbank
//!
//! Exit codes:
//! - 0: Success
//! - 1: Failure (validation failed, questions flagged, no input, I/O)
//! - 2: Usage error (bad flags/args, invalid configuration values)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during qbank operations
#[derive(Error, Debug)]
pub enum QbankError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Failures (exit code 1)
    #[error("no {kind} found in {dir:?}")]
    NoInputFiles { kind: String, dir: PathBuf },

    #[error("malformed collection {path:?}: {reason}")]
    MalformedCollection { path: PathBuf, reason: String },

    #[error("{failed} of {total} file(s) failed validation")]
    ValidationFailed { failed: usize, total: usize },

    #[error("{flagged} question(s) flagged across {files} file(s)")]
    BlindModeFlagged { flagged: usize, files: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl QbankError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        QbankError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        QbankError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a file that is not a JSON array of records
    pub fn malformed(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        QbankError::MalformedCollection {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an empty file discovery
    pub fn no_input(kind: &str, dir: impl Into<PathBuf>) -> Self {
        QbankError::NoInputFiles {
            kind: kind.to_string(),
            dir: dir.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            QbankError::UnknownFormat(_)
            | QbankError::DuplicateFormat
            | QbankError::UsageError(_)
            | QbankError::InvalidValue { .. } => ExitCode::Usage,

            QbankError::NoInputFiles { .. }
            | QbankError::MalformedCollection { .. }
            | QbankError::ValidationFailed { .. }
            | QbankError::BlindModeFlagged { .. }
            | QbankError::Io(_)
            | QbankError::Json(_)
            | QbankError::Toml(_)
            | QbankError::FailedOperationWithTarget { .. }
            | QbankError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            QbankError::UnknownFormat(_) => "unknown_format",
            QbankError::DuplicateFormat => "duplicate_format",
            QbankError::UsageError(_) => "usage_error",
            QbankError::InvalidValue { .. } => "invalid_value",
            QbankError::NoInputFiles { .. } => "no_input_files",
            QbankError::MalformedCollection { .. } => "malformed_collection",
            QbankError::ValidationFailed { .. } => "validation_failed",
            QbankError::BlindModeFlagged { .. } => "blind_mode_flagged",
            QbankError::Io(_) => "io_error",
            QbankError::Json(_) => "json_error",
            QbankError::Toml(_) => "toml_error",
            QbankError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            QbankError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for qbank operations
pub type Result<T> = std::result::Result<T, QbankError>;
