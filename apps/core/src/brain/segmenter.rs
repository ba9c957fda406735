//! Sentence segmentation.
//!
//! Splits raw field content into cleaned sentences: one bullet marker stripped
//! per line, boundaries at `.`/`!`/`?` followed by whitespace and an uppercase
//! letter or digit, whitespace collapsed.

use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() is acceptable here, the patterns are static
static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("Invalid regex: line breaks"));

static BULLET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•]\s*").expect("Invalid regex: bullet marker"));

// The regex crate has no lookaround, so the match spans the punctuation, the
// whitespace run and the first char of the next sentence.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+[A-Z0-9]").expect("Invalid regex: sentence boundary"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace run"));

static TERMINAL_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?)]$").expect("Invalid regex: terminal punctuation"));

/// Split `text` into an ordered list of sentences.
///
/// Never empty when `text` has non-whitespace content.
pub fn segment(text: &str) -> Vec<String> {
    let mut candidates: Vec<&str> = Vec::new();

    for line in LINE_BREAKS.split(text).map(str::trim).filter(|l| !l.is_empty()) {
        let cleaned = strip_bullet(line);
        let parts = split_line(cleaned);
        if parts.is_empty() {
            candidates.push(cleaned);
        } else {
            candidates.extend(parts);
        }
    }

    if candidates.is_empty() {
        candidates.push(text.trim());
    }

    candidates
        .into_iter()
        .map(collapse_whitespace)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Removes a single leading `-`, `*` or `•` marker and the whitespace after it
pub fn strip_bullet(line: &str) -> &str {
    match BULLET_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Collapses whitespace runs into single spaces and trims
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Trims, strips a bullet marker and ensures terminal punctuation.
pub fn format_sentence(sentence: &str) -> String {
    let trimmed = sentence.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let mut formatted = strip_bullet(trimmed).to_string();
    if !ends_with_terminal(&formatted) {
        formatted.push('.');
    }
    formatted
}

/// `format_sentence` without the trailing period, for list items.
pub fn format_bullet(sentence: &str) -> String {
    let mut formatted = format_sentence(sentence);
    if formatted.ends_with('.') {
        formatted.pop();
    }
    formatted
}

pub(crate) fn ends_with_terminal(text: &str) -> bool {
    TERMINAL_PUNCTUATION.is_match(text)
}

fn split_line(line: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(line) {
        // Punctuation and the next sentence's first char are single-byte ASCII.
        parts.push(&line[start..boundary.start() + 1]);
        start = boundary.end() - 1;
    }
    parts.push(&line[start..]);

    parts.into_iter().map(str::trim).filter(|p| !p.is_empty()).collect()
}
