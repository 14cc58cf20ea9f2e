//! Compiled pattern tables for blind-mode detection

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Which family a detection pattern belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    /// Refers to the answer choices ("which of these", "none of the above")
    Reference,
    /// Asks for a superlative without naming the items compared
    BareComparative,
}

/// A detection pattern, matched against lower-cased trimmed question text
#[derive(Debug)]
pub struct BlindPattern {
    pub kind: PatternKind,
    pub description: &'static str,
    pub regex: Regex,
}

const REFERENCE_SOURCES: [(&str, &str); 6] = [
    (
        r"\bwhich of (these|the following|the above)\b",
        r#"References options: "which of these/the following""#,
    ),
    (
        r"\bwhich (one|answer|option|choice)\b",
        r#"References options: "which one/answer/option/choice""#,
    ),
    (
        r"\bfrom the (options|choices|list)\b",
        r#"References options: "from the options/choices""#,
    ),
    (
        r"\b(options|choices) (above|below|given|listed)\b",
        "References listed options",
    ),
    (r"\bnone of the above\b", r#"References "none of the above""#),
    (r"\ball of the above\b", r#"References "all of the above""#),
];

const COMPARATIVE_SOURCES: [(&str, &str); 2] = [
    (
        r"^which\b.*\bis (the )?(largest|smallest|greatest|least|biggest|longest|shortest|most|fewest|closest|nearest)\b",
        r#"Comparative "which is the largest/smallest" without specifying items"#,
    ),
    (
        r"^which\b.*\bhas (the )?(most|fewest|least|largest|smallest|greatest|longest|shortest)\b",
        r#"Comparative "which has the most/fewest" without specifying items"#,
    ),
];

// Exemptions run against the original text, not the lower-cased one
const EMBEDDED_LIST: &str = r"([A-Za-z0-9\-.' ]+,\s*){2,}.*\b(and|or)\b";
const TRAILING_ITEMS: &str = r"[?:]\s*[\d\w/]+(\s*,\s*[\d\w/]+){2,}";
const COMPARATIVE_OR: &str = r"(?i)(greater|larger|smaller|less).+\bor\b";

static PATTERNS: OnceLock<Vec<BlindPattern>> = OnceLock::new();
static EXEMPTIONS: OnceLock<Vec<Regex>> = OnceLock::new();

fn compile(source: &str) -> Regex {
    Regex::new(source).expect("Invalid blind-mode regex pattern")
}

/// Every detection pattern: reference patterns first, then bare comparatives
pub fn blind_patterns() -> &'static [BlindPattern] {
    PATTERNS.get_or_init(|| {
        let references = REFERENCE_SOURCES
            .iter()
            .map(|(source, description)| (PatternKind::Reference, *source, *description));
        let comparatives = COMPARATIVE_SOURCES
            .iter()
            .map(|(source, description)| (PatternKind::BareComparative, *source, *description));

        references
            .chain(comparatives)
            .map(|(kind, source, description)| BlindPattern {
                kind,
                description,
                regex: compile(source),
            })
            .collect()
    })
}

/// Bare comparative patterns only
pub fn comparative_patterns() -> impl Iterator<Item = &'static BlindPattern> {
    blind_patterns()
        .iter()
        .filter(|p| p.kind == PatternKind::BareComparative)
}

/// Regex exemptions meaning the question already lists its items
pub fn exemption_patterns() -> &'static [Regex] {
    EXEMPTIONS.get_or_init(|| {
        [EMBEDDED_LIST, TRAILING_ITEMS, COMPARATIVE_OR]
            .into_iter()
            .map(compile)
            .collect()
    })
}
