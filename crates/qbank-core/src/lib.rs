//! Qbank Core Library
//!
//! Curation logic for a JSON-encoded bank of quiz questions: deduplication,
//! level balancing, difficulty normalization, blind-mode detection and
//! rewriting, failure-mode normalization, and schema validation.

pub mod balance;
pub mod bank;
pub mod blind;
pub mod config;
pub mod dedup;
pub mod difficulty;
pub mod error;
pub mod failure_modes;
pub mod fix;
pub mod format;
pub mod logging;
pub mod rebuild;
pub mod record;
pub mod validate;
