//! Objective polishing: filler removal and verb normalization.

use regex::Regex;
use std::sync::LazyLock;

use super::segmenter::ends_with_terminal;

// Applied in order, each at most once, anchored at the start
static FILLER_PREFIXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)^please\s+").expect("Invalid regex: please prefix"),
        Regex::new(r"(?i)^(can|could|would|will)\s+you\s+").expect("Invalid regex: can-you prefix"),
        Regex::new(r"(?i)^i\s+(need|want)\s+(you|ya)\s+to\s+").expect("Invalid regex: need-you-to prefix"),
        Regex::new(r"(?i)^i\s+(need|want)\s+help\s+to\s+").expect("Invalid regex: need-help-to prefix"),
        Regex::new(r"(?i)^help\s+me\s+to\s+").expect("Invalid regex: help-me-to prefix"),
    ]
});

static LEADING_MAKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^make\s+").expect("Invalid regex: leading make"));

/// Normalize the objective sentence into an imperative with terminal punctuation.
pub fn polish_objective(objective: &str) -> String {
    let mut polished = objective.trim().to_string();
    if polished.is_empty() {
        return polished;
    }

    for prefix in FILLER_PREFIXES.iter() {
        polished = prefix.replace(&polished, "").into_owned();
    }
    polished = LEADING_MAKE.replace(&polished, "Create ").into_owned();

    if !ends_with_terminal(&polished) {
        polished.push('.');
    }
    polished
}
