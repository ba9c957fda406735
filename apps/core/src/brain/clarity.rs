//! Clarity analysis.
//!
//! Independent pattern checks over the raw text (plus one over the segmented
//! sentences), each contributing at most one human-readable suggestion.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Below this many words the request is considered under-specified
pub const MINIMAL_WORD_THRESHOLD: usize = 12;

/// Emitted when no check fires
pub const FALLBACK_SUGGESTION: &str = "Prompty did not detect unclear phrasing, but double-check that goals, audience, and constraints are explicit.";

const MORE_CONTEXT_SUGGESTION: &str =
    "Add more context so Prompty understands the audience, purpose, and constraints.";

const PRONOUN_SUGGESTION: &str = "Clarify who or what pronouns like \"it\" or \"they\" refer to.";

/// Words that turn "some" into an idiom rather than a vague quantity
const QUANTITY_EXCEPTIONS: &[&str] = &["one", "body", "thing", "where", "time"];

static VAGUE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\bASAP\b|as soon as possible|\bsoon\b|right away|whenever|later|some time)")
        .expect("Invalid regex: vague timing")
});

static VAGUE_THING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\bthings?\b|\bstuff\b|something|anything)").expect("Invalid regex: vague referent")
});

static ET_CETERA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\betc\.?\b|and so on|and more").expect("Invalid regex: et cetera")
});

static INDEFINITE_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(a few|a couple|several|some)\s+([a-z]+)").expect("Invalid regex: indefinite quantity")
});

static PRONOUN_ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(make|fix|improve|change|update|handle|work on|polish|adjust|optimize)\s+(it|this|that|them)\b")
        .expect("Invalid regex: pronoun action")
});

static BARE_PRONOUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(it|this|that|they|them)\b").expect("Invalid regex: bare pronoun"));

static REFERENTIAL_PREPOSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(for|about|regarding)\b").expect("Invalid regex: referential preposition")
});

/// Ordered, deduplicated suggestion list
#[derive(Debug, Default)]
struct SuggestionList {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl SuggestionList {
    fn add(&mut self, message: String) {
        if message.is_empty() || self.seen.contains(&message) {
            return;
        }
        self.seen.insert(message.clone());
        self.items.push(message);
    }
}

/// Scan `raw_text` for vague phrasing.
///
/// The result is never empty and never holds the same message twice.
pub fn analyze_clarity(raw_text: &str, sentences: &[String]) -> Vec<String> {
    let mut suggestions = SuggestionList::default();

    if let Some(m) = VAGUE_TIME.find(raw_text) {
        suggestions.add(format!(
            "Clarify the exact timeline instead of saying \"{}\".",
            m.as_str()
        ));
    }

    if let Some(m) = VAGUE_THING.find(raw_text) {
        suggestions.add(format!(
            "Replace vague wording like \"{}\" with the specific item or outcome you expect.",
            m.as_str()
        ));
    }

    if let Some(m) = ET_CETERA.find(raw_text) {
        suggestions.add(format!(
            "List the remaining examples instead of using \"{}\" so the assistant knows what to cover.",
            m.as_str()
        ));
    }

    if let Some(phrase) = indefinite_quantity(raw_text) {
        suggestions.add(format!(
            "Provide a concrete quantity instead of saying \"{}\".",
            phrase
        ));
    }

    if let Some(caps) = PRONOUN_ACTION.captures(raw_text) {
        suggestions.add(format!(
            "Specify what \"{}\" refers to when asking to {} it.",
            &caps[2], &caps[1]
        ));
    }

    let word_count = raw_text.split_whitespace().count();
    if word_count > 0 && word_count < MINIMAL_WORD_THRESHOLD {
        suggestions.add(MORE_CONTEXT_SUGGESTION.to_string());
    }

    if sentences.iter().any(|s| needs_subject(s)) {
        suggestions.add(PRONOUN_SUGGESTION.to_string());
    }

    if suggestions.items.is_empty() {
        suggestions.add(FALLBACK_SUGGESTION.to_string());
    }

    suggestions.items
}

/// First "a few / a couple / several / some + word" phrase that is not an idiom
fn indefinite_quantity(raw_text: &str) -> Option<&str> {
    INDEFINITE_QUANTITY
        .captures_iter(raw_text)
        .find(|caps| {
            let word = caps[2].to_lowercase();
            !QUANTITY_EXCEPTIONS.contains(&word.as_str())
        })
        .and_then(|caps| caps.get(0))
        .map(|m| m.as_str())
}

fn needs_subject(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    BARE_PRONOUN.is_match(&lower) && !REFERENTIAL_PREPOSITION.is_match(&lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::segmenter::segment;

    fn analyze(text: &str) -> Vec<String> {
        analyze_clarity(text, &segment(text))
    }

    #[test]
    fn test_pronoun_action() {
        let suggestions = analyze("fix it");

        assert!(suggestions.contains(&"Specify what \"it\" refers to when asking to fix it.".to_string()));
    }

    #[test]
    fn test_short_vague_request() {
        let suggestions = analyze("Help me with my thing");

        assert_eq!(
            suggestions,
            vec![
                "Replace vague wording like \"thing\" with the specific item or outcome you expect.".to_string(),
                MORE_CONTEXT_SUGGESTION.to_string(),
            ]
        );
    }

    #[test]
    fn test_timeline_keeps_matched_text() {
        let suggestions = analyze("Send the summary as soon as possible");

        assert_eq!(
            suggestions[0],
            "Clarify the exact timeline instead of saying \"as soon as possible\"."
        );
    }

    #[test]
    fn test_timeline_words_match_inside_longer_words() {
        let suggestions = analyze("Update the collateral deck for the sales team next quarter");

        assert_eq!(
            suggestions[0],
            "Clarify the exact timeline instead of saying \"later\"."
        );
    }

    #[test]
    fn test_et_cetera() {
        let suggestions = analyze("Cover pricing, onboarding, support, etc. in the guide");

        assert!(suggestions
            .iter()
            .any(|s| s.starts_with("List the remaining examples instead of using \"etc\"")));
    }

    #[test]
    fn test_indefinite_quantity_skips_idioms() {
        assert_eq!(indefinite_quantity("we need some time and some examples"), Some("some examples"));
        assert_eq!(indefinite_quantity("give me a few ideas"), Some("a few ideas"));
        assert_eq!(indefinite_quantity("someone wrote this some time ago"), None);
    }

    #[test]
    fn test_referential_preposition_silences_pronoun_check() {
        let text = "Write a detailed onboarding guide for new engineers joining our platform team this spring about tooling.";
        let suggestions = analyze(text);

        assert_eq!(suggestions, vec![FALLBACK_SUGGESTION.to_string()]);
    }

    #[test]
    fn test_bare_pronoun_sentence() {
        let text = "Draft the release notes for version two of the mobile app. They ship on the third of May.";
        let suggestions = analyze(text);

        assert_eq!(suggestions, vec![PRONOUN_SUGGESTION.to_string()]);
    }

    #[test]
    fn test_never_empty_and_unique() {
        for text in ["", "   ", "stuff stuff stuff", "fix it and fix it again later"] {
            let suggestions = analyze(text);
            let unique: HashSet<&String> = suggestions.iter().collect();

            assert!(!suggestions.is_empty(), "empty for {:?}", text);
            assert_eq!(unique.len(), suggestions.len(), "duplicates for {:?}", text);
        }
    }
}
