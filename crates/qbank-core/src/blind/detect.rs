//! Blind-mode compatibility detection
//!
//! A question is blind-mode incompatible when its text refers to its answer
//! choices instead of naming them. Exemptions are checked first: a question
//! that already embeds a comparable list is compatible whatever else it says.

use serde::Serialize;

use super::patterns::{blind_patterns, exemption_patterns, PatternKind};

/// One detection pattern matched by a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlindIssue {
    pub kind: PatternKind,
    pub description: &'static str,
}

/// Whether the question text already lists the items it asks about
pub fn has_embedded_items(question: &str) -> bool {
    if question.to_lowercase().contains("among ") {
        return true;
    }
    exemption_patterns().iter().any(|re| re.is_match(question))
}

/// Every detection pattern the question matches, in table order.
///
/// Empty when the question is exempt.
pub fn scan_question(question: &str) -> Vec<BlindIssue> {
    if has_embedded_items(question) {
        return Vec::new();
    }

    let lowered = question.to_lowercase();
    let lowered = lowered.trim();
    blind_patterns()
        .iter()
        .filter(|pattern| pattern.regex.is_match(lowered))
        .map(|pattern| BlindIssue {
            kind: pattern.kind,
            description: pattern.description,
        })
        .collect()
}

/// Whether the question cannot be answered without seeing its options
pub fn is_blind_incompatible(question: &str) -> bool {
    if has_embedded_items(question) {
        return false;
    }

    let lowered = question.to_lowercase();
    let lowered = lowered.trim();
    blind_patterns()
        .iter()
        .any(|pattern| pattern.regex.is_match(lowered))
}
