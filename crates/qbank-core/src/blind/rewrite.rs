//! Blind-mode rewriting
//!
//! Rewrites a question flagged by the detector so its text names every
//! answer choice. Rules are tried in table order and the first one whose
//! output the detector accepts wins; the generic fallback always qualifies.

use std::sync::OnceLock;

use regex::Regex;

use super::detect::is_blind_incompatible;
use super::patterns::comparative_patterns;

/// A named rewrite rule: `(question, items list) -> rewritten question`
pub struct RewriteRule {
    pub name: &'static str,
    apply: fn(&str, &str) -> Option<String>,
}

const RULES: [RewriteRule; 4] = [
    RewriteRule {
        name: "following-clause",
        apply: following_clause,
    },
    RewriteRule {
        name: "bare-comparative",
        apply: bare_comparative,
    },
    RewriteRule {
        name: "embedded-clause",
        apply: embedded_clause,
    },
    RewriteRule {
        name: "generic-fallback",
        apply: generic_fallback,
    },
];

static FOLLOWING: OnceLock<Regex> = OnceLock::new();
static NOUN_VERB: OnceLock<Regex> = OnceLock::new();
static LEADING_VERB: OnceLock<Regex> = OnceLock::new();
static EMBEDDED: OnceLock<Regex> = OnceLock::new();

fn regex(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("Invalid rewrite regex pattern"))
}

/// Join options as a natural-language list: `A, B, and C`.
///
/// A single option is returned as-is; there is no "and" before it.
pub fn format_items_list(options: &[&str]) -> String {
    match options {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}

/// Rewrite a flagged question so its text embeds `options`.
///
/// Callers check [`super::is_blind_incompatible`] first and pass a
/// non-empty option list.
pub fn rewrite(question: &str, options: &[&str]) -> String {
    rewrite_with_rule(question, options).1
}

/// Like [`rewrite`], also naming the rule that produced the text
pub fn rewrite_with_rule(question: &str, options: &[&str]) -> (&'static str, String) {
    let trimmed = question.trim();
    let items = format_items_list(options);

    for rule in &RULES {
        match (rule.apply)(trimmed, &items) {
            Some(text) if !is_blind_incompatible(&text) => return (rule.name, text),
            _ => {}
        }
    }

    // Unreachable while the fallback closes the table
    ("unchanged", question.to_string())
}

/// "Which of these/the following/the above ..." at the start of the question
fn following_clause(question: &str, items: &str) -> Option<String> {
    let caps = regex(
        &FOLLOWING,
        r"(?i)^Which of (?:these|the following|the above)\s+(.+)",
    )
    .captures(question)?;
    let rest = caps.get(1)?.as_str();

    let noun_verb = regex(
        &NOUN_VERB,
        r"(?i)^(\w+(?:\s+\w+)?)\s+(is|are|has|have|equals|was|were|does|do|can|cannot|could|should|would|will|leaves|shows|CANNOT)\b(.*)$",
    );
    if let Some(m) = noun_verb.captures(rest) {
        return Some(format!(
            "Which of the {} {} {}{}",
            &m[1], items, &m[2], &m[3]
        ));
    }

    let leading_verb = regex(
        &LEADING_VERB,
        r"(?i)^(is|are|has|have|equals|was|were|does|do|can|could|should|would|will)\b(.*)$",
    );
    if let Some(m) = leading_verb.captures(rest) {
        return Some(format!("Which of {} {}{}", items, &m[1], &m[2]));
    }

    Some(format!("Which of {} {}", items, rest))
}

/// "Which X is the largest?" with no items named
fn bare_comparative(question: &str, items: &str) -> Option<String> {
    let lowered = question.to_lowercase();
    if !comparative_patterns().any(|p| p.regex.is_match(&lowered)) {
        return None;
    }

    Some(match question.strip_suffix('?') {
        Some(stem) => format!("{} among {}?", stem, items),
        None => format!("{} among {}", question, items),
    })
}

/// "<context>. Which of these ..." after a leading sentence
fn embedded_clause(question: &str, items: &str) -> Option<String> {
    let caps = regex(&EMBEDDED, r"(?i)^(.+?)\.\s*Which of these (.+)$").captures(question)?;
    Some(format!("{}. Which of {} {}", &caps[1], items, &caps[2]))
}

/// Prefix the whole question with the item list
fn generic_fallback(question: &str, items: &str) -> Option<String> {
    let mut chars = question.chars();
    let lowered_head = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    Some(format!("Among {}, {}", items, lowered_head))
}
