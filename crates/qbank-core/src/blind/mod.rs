//! Blind-mode compatibility
//!
//! In blind mode a solver sees only the question text. [`detect`] classifies
//! questions that lean on the hidden answer choices and [`rewrite`] folds the
//! choices into the text.

pub mod detect;
pub mod patterns;
pub mod rewrite;

pub use detect::{has_embedded_items, is_blind_incompatible, scan_question, BlindIssue};
pub use patterns::PatternKind;
pub use rewrite::{format_items_list, rewrite, rewrite_with_rule};
