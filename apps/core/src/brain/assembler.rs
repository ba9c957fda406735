//! Prompt assembly.
//!
//! Turns raw field content into a structured prompt document. Every section is
//! always present; empty buckets render a category-specific placeholder.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::analyzer::{analyze, PromptAnalysis};
use super::categories::Bucket;
use super::objective::polish_objective;
use super::segmenter::{collapse_whitespace, format_bullet};

const MISSING_OBJECTIVE: &str = "Clarify the user's primary goal before proposing a solution.";

const GUARDRAILS: &[&str] = &[
    "Verify key assumptions and ask clarifying questions when requirements feel ambiguous or incomplete.",
    "Explain how your response directly advances the stated mission and respects the constraints.",
];

const WHEN_RESPONDING: &[&str] = &[
    "Start with a succinct status summary that shows you understand the mission.",
    "Provide the deliverables in a clear structure (headings, bullet lists, tables, or code blocks).",
    "Close with optional follow-up questions or suggestions to improve the outcome.",
];

const NO_ORIGINAL_TEXT: &str = "> (no original text captured)";

/// Result of an explicit "improve" action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewriteOutcome {
    /// The field got a structured replacement
    Improved,
    /// Assembly produced the same text; the field is left alone
    Unchanged,
    /// Nothing to work with
    EmptyInput,
}

impl RewriteOutcome {
    /// Toast text shown to the user for this outcome
    pub fn notice(&self) -> &'static str {
        match self {
            RewriteOutcome::Improved => {
                "Prompt leveled up! Review the structured version and adjust if needed."
            }
            RewriteOutcome::Unchanged => "This prompt already looks solid. Prompty kept it as-is.",
            RewriteOutcome::EmptyInput => "Type a prompt first so Prompty knows what to improve.",
        }
    }
}

impl fmt::Display for RewriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RewriteOutcome::Improved => "improved",
            RewriteOutcome::Unchanged => "unchanged",
            RewriteOutcome::EmptyInput => "empty_input",
        };
        write!(f, "{}", label)
    }
}

/// Text to write back into the field plus the user notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewrite {
    pub outcome: RewriteOutcome,
    pub text: String,
    pub notice: String,
}

/// Build the structured prompt for `raw_text`.
///
/// Returns `raw_text` unchanged when it holds no visible characters.
/// Deterministic: identical input yields byte-identical output.
pub fn assemble(raw_text: &str) -> String {
    if collapse_whitespace(raw_text).is_empty() {
        return raw_text.to_string();
    }

    let analysis = analyze(raw_text);
    let document = render(raw_text, &analysis);
    debug!(chars = document.len(), "Assembled prompt");
    document
}

/// Run the explicit "improve" action, classifying the outcome.
pub fn improve(raw_text: &str) -> Rewrite {
    let (outcome, text) = if raw_text.trim().is_empty() {
        (RewriteOutcome::EmptyInput, raw_text.to_string())
    } else {
        let assembled = assemble(raw_text);
        if assembled.trim() == raw_text.trim() {
            (RewriteOutcome::Unchanged, raw_text.to_string())
        } else {
            (RewriteOutcome::Improved, assembled)
        }
    };

    Rewrite {
        outcome,
        text,
        notice: outcome.notice().to_string(),
    }
}

fn render(raw_text: &str, analysis: &PromptAnalysis) -> String {
    let categories = &analysis.categories;
    let mut lines: Vec<String> = Vec::new();

    let objective = if categories.objective.is_empty() {
        MISSING_OBJECTIVE.to_string()
    } else {
        format_bullet(&polish_objective(&categories.objective))
    };

    lines.push(format!(
        "You are an experienced {}. Carefully study the request and craft a thorough, outcome-focused response.",
        analysis.role
    ));

    section(&mut lines, "Mission", std::slice::from_ref(&objective), "");

    let persona_default = format!(
        "No persona requested. Draw on the expertise of an experienced {}.",
        analysis.role
    );
    section(&mut lines, "Persona & Voice of the Responder", &categories.persona, &persona_default);

    let context: Vec<String> = categories
        .context
        .iter()
        .chain(categories.other.iter())
        .cloned()
        .collect();
    section(
        &mut lines,
        "Situational Context",
        &context,
        "No additional context provided. Confirm audience, tools, or environment as needed.",
    );
    section(
        &mut lines,
        "Constraints & Risks to Track",
        &categories.constraints,
        "Ask whether there are timeline, tone, formatting, or tooling constraints that must be respected.",
    );
    section(
        &mut lines,
        "Expected Deliverables",
        &categories.outputs,
        "Recommend the most useful deliverable and describe why it aligns with the mission.",
    );
    section(
        &mut lines,
        "Suggested Approach",
        &categories.steps,
        "Outline a clear plan or set of steps before presenting the final deliverable.",
    );
    section(
        &mut lines,
        "Tone & Style",
        &categories.tone,
        "Use a clear, professional tone unless the requester signals otherwise.",
    );
    section(
        &mut lines,
        "Output Format",
        &categories.format,
        "Pick the structure that best fits the deliverable and keep it consistent throughout.",
    );

    let guardrails = guardrails(analysis);
    section(&mut lines, "Communication Guardrails", &guardrails, "");
    section(&mut lines, "Clarity Suggestions for the Requester", &analysis.clarity, "");

    // Closing checklist keeps its own punctuation
    lines.push(String::new());
    lines.push("## When Responding".to_string());
    lines.extend(WHEN_RESPONDING.iter().map(|item| format!("- {}", item)));

    lines.push(String::new());
    lines.push("---".to_string());
    lines.push("### Original Request".to_string());
    lines.push(quote_original(raw_text));

    lines.join("\n")
}

/// Fixed checklist plus items for whatever the requester left out
fn guardrails(analysis: &PromptAnalysis) -> Vec<String> {
    let categories = &analysis.categories;
    let mut items: Vec<String> = GUARDRAILS.iter().map(|s| s.to_string()).collect();

    if categories.is_empty(Bucket::Constraints) {
        items.push(
            "Surface any critical constraints (timeline, tone, length, dependencies) that should be confirmed."
                .to_string(),
        );
    }
    if categories.is_empty(Bucket::Steps) {
        items.push("Share a recommended plan of attack before diving into detailed deliverables.".to_string());
    }
    if categories.is_empty(Bucket::Tone) {
        items.push("Confirm the preferred tone or voice if it could change how the response lands.".to_string());
    }
    if categories.is_empty(Bucket::Format) {
        items.push("Confirm the preferred output format before producing long-form deliverables.".to_string());
    }

    items
}

/// Appends a blank line, the heading and one bullet per item (or the placeholder)
fn section(lines: &mut Vec<String>, title: &str, items: &[String], placeholder: &str) {
    lines.push(String::new());
    lines.push(format!("## {}", title));

    if items.is_empty() {
        lines.push(format!("- {}", format_bullet(placeholder)));
        return;
    }
    lines.extend(items.iter().map(|item| format!("- {}", format_bullet(item))));
}

fn quote_original(raw_text: &str) -> String {
    let quoted: Vec<String> = raw_text
        .trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("> {}", line))
        .collect();

    if quoted.is_empty() {
        NO_ORIGINAL_TEXT.to_string()
    } else {
        quoted.join("\n")
    }
}
