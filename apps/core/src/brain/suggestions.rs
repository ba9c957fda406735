//! Realtime suggestion generation.
//!
//! Produces a short, ranked list of insertable snippets for the text the user
//! is currently typing. Reuses the analysis front half; ids deduplicate.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::analyzer::analyze;
use super::categories::Bucket;

/// Upper bound on items returned per call
pub const MAX_SUGGESTIONS: usize = 6;

/// Below this many visible chars the text gets a "more specifics" nudge
pub const SHORT_TEXT_CHARS: usize = 80;

/// One clickable suggestion chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Literal text inserted at the cursor
    pub snippet: String,
}

/// Static definition of a suggestion
struct Template {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    snippet: &'static str,
}

impl Template {
    fn to_item(&self) -> SuggestionItem {
        SuggestionItem {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            snippet: self.snippet.to_string(),
        }
    }
}

const STARTER: &[Template] = &[
    Template {
        id: "add-objective",
        title: "State the goal",
        description: "Open with the single outcome you want.",
        snippet: "Goal: ",
    },
    Template {
        id: "add-audience",
        title: "Name the audience",
        description: "Say who will read or use the result.",
        snippet: "The audience is ",
    },
    Template {
        id: "add-deliverables",
        title: "Describe the deliverable",
        description: "Spell out what you expect to receive.",
        snippet: "Please deliver ",
    },
    Template {
        id: "add-constraints",
        title: "List constraints",
        description: "Mention length, deadline, or anything to avoid.",
        snippet: "Constraints: ",
    },
];

/// One template per bucket, in the order empty buckets are reported
const BUCKET_TEMPLATES: &[(Bucket, Template)] = &[
    (
        Bucket::Context,
        Template {
            id: "add-context",
            title: "Add background",
            description: "Explain the situation, audience, or why this matters.",
            snippet: "Context: ",
        },
    ),
    (
        Bucket::Constraints,
        Template {
            id: "add-constraints",
            title: "List constraints",
            description: "Mention length, deadline, or anything to avoid.",
            snippet: "Constraints: ",
        },
    ),
    (
        Bucket::Outputs,
        Template {
            id: "add-deliverables",
            title: "Describe the deliverable",
            description: "Spell out what you expect to receive.",
            snippet: "Please deliver ",
        },
    ),
    (
        Bucket::Steps,
        Template {
            id: "add-steps",
            title: "Suggest an approach",
            description: "Outline the order in which the work should happen.",
            snippet: "First, ",
        },
    ),
    (
        Bucket::Tone,
        Template {
            id: "add-tone",
            title: "Set the tone",
            description: "Describe the voice or style the answer should use.",
            snippet: "Use a tone that is ",
        },
    ),
    (
        Bucket::Format,
        Template {
            id: "add-format",
            title: "Choose a format",
            description: "Ask for a checklist, table, outline, or other structure.",
            snippet: "Deliver it as ",
        },
    ),
];

const MORE_SPECIFICS: Template = Template {
    id: "more-specifics",
    title: "Add specifics",
    description: "Short prompts get generic answers. Add names, numbers, or examples.",
    snippet: "Specifically, ",
};

/// Fixed clarity message openings → targeted suggestion.
/// Matched on the prefix only, since the rest of a message echoes user text.
const CLARITY_TEMPLATES: &[(&[&str], Template)] = &[
    (
        &["Clarify the exact timeline"],
        Template {
            id: "set-deadline",
            title: "Give a deadline",
            description: "Replace vague timing with a date or duration.",
            snippet: "The deadline is ",
        },
    ),
    (
        &["Replace vague wording"],
        Template {
            id: "name-the-item",
            title: "Name the item",
            description: "Swap vague words for the exact thing you mean.",
            snippet: "By that I mean ",
        },
    ),
    (
        &["List the remaining examples"],
        Template {
            id: "complete-the-list",
            title: "Finish the list",
            description: "List every example instead of trailing off with etc.",
            snippet: "The full list is: ",
        },
    ),
    (
        &["Provide a concrete quantity"],
        Template {
            id: "set-quantity",
            title: "Give a number",
            description: "Say exactly how many you want.",
            snippet: "I need exactly ",
        },
    ),
    (
        &["Specify what ", "Clarify who or what pronouns"],
        Template {
            id: "name-the-referent",
            title: "Name what \"it\" is",
            description: "Point pronouns at the thing they stand for.",
            snippet: "Here, \"it\" means ",
        },
    ),
];

/// Ordered list, unique by id
#[derive(Default)]
struct ItemList {
    ids: HashSet<&'static str>,
    items: Vec<SuggestionItem>,
}

impl ItemList {
    fn add(&mut self, template: &Template) {
        if self.ids.insert(template.id) {
            self.items.push(template.to_item());
        }
    }
}

/// Suggest up to `MAX_SUGGESTIONS` snippets for `current_text`.
pub fn generate_suggestions(current_text: &str) -> Vec<SuggestionItem> {
    let mut list = ItemList::default();

    let trimmed = current_text.trim();
    if trimmed.is_empty() {
        STARTER.iter().for_each(|t| list.add(t));
        return list.items;
    }

    let analysis = analyze(current_text);

    for (bucket, template) in BUCKET_TEMPLATES {
        if analysis.categories.is_empty(*bucket) {
            list.add(template);
        }
    }

    if trimmed.chars().count() < SHORT_TEXT_CHARS {
        list.add(&MORE_SPECIFICS);
    }

    for message in &analysis.clarity {
        for (openings, template) in CLARITY_TEMPLATES {
            if openings.iter().any(|opening| message.starts_with(opening)) {
                list.add(template);
            }
        }
    }

    list.items.truncate(MAX_SUGGESTIONS);
    list.items
}
