//! Snippet insertion.
//!
//! Places a suggestion snippet at the cursor of the field content, padding
//! with a single space where the snippet would otherwise glue onto a word.

use serde::{Deserialize, Serialize};

/// Field content and cursor after an insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insertion {
    pub text: String,
    /// Cursor position in chars, right after the inserted snippet
    pub cursor: usize,
}

/// Insert `snippet` into `text` at char offset `cursor` (clamped to the end).
pub fn insert_snippet(text: &str, cursor: usize, snippet: &str) -> Insertion {
    let split = text
        .char_indices()
        .nth(cursor)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len());
    let (before, after) = text.split_at(split);

    let pad_before = needs_pad(before.chars().next_back(), snippet.chars().next());
    let pad_after = needs_pad(after.chars().next(), snippet.chars().next_back());

    let mut inserted = String::with_capacity(snippet.len() + 2);
    if pad_before {
        inserted.push(' ');
    }
    inserted.push_str(snippet);
    let cursor = before.chars().count() + inserted.chars().count();
    if pad_after {
        inserted.push(' ');
    }

    Insertion {
        text: format!("{}{}{}", before, inserted, after),
        cursor,
    }
}

/// A space is needed when both neighbours exist and neither is whitespace
fn needs_pad(neighbour: Option<char>, snippet_edge: Option<char>) -> bool {
    match (neighbour, snippet_edge) {
        (Some(n), Some(s)) => !n.is_whitespace() && !s.is_whitespace(),
        _ => false,
    }
}
